//! Fungarium Tree Renderer
//!
//! Presents a [`TaxonNode`](fungarium_domain::TaxonNode) and its descendants as
//! an interactively expandable list of rows. The renderer owns no domain data:
//! it borrows the tree and keeps only per-node UI state (expanded, description
//! shown).
//!
//! # Examples
//!
//! ```
//! use fungarium_store::Taxonomy;
//! use fungarium_view::TreeView;
//!
//! let taxonomy = Taxonomy::fungi().unwrap();
//! let mut view = TreeView::from_source(&taxonomy);
//! assert_eq!(view.render().len(), 1);
//!
//! view.root_mut().toggle_expanded();
//! assert_eq!(view.render().len(), 1 + taxonomy.root().child_count());
//! ```

#![warn(missing_docs)]

pub mod hue;
pub mod node_view;
pub mod row;

pub use hue::{hue_for, hue_to_rgb};
pub use node_view::{NodeView, TreeView};
pub use row::{DescriptionControl, ExpandControl, Row};
