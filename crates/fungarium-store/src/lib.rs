//! Fungarium Taxonomy Store
//!
//! Builds and exposes the fixed taxon tree.
//!
//! # Architecture
//!
//! - [`TaxonomyBuilder`]: arena of pending nodes, validates every attachment
//! - [`Taxonomy`]: the frozen tree, handed out by reference
//! - Seed loading: TOML records with parent paths, including the built-in Fungi dataset
//!
//! # Examples
//!
//! ```
//! use fungarium_store::Taxonomy;
//!
//! let taxonomy = Taxonomy::fungi().unwrap();
//! let phylum = taxonomy.lookup_str("Fungi/Chytridiomycota").unwrap();
//! assert_eq!(phylum.rank(), "Phylum");
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod error;
pub mod seed;
pub mod taxonomy;

pub use builder::{TaxonId, TaxonomyBuilder};
pub use error::{Result, StoreError};
pub use seed::{SeedValue, TaxonRecord};
pub use taxonomy::{Iter, Taxonomy};
