//! Fungarium Domain Layer
//!
//! This crate contains the data model for Fungarium's taxonomy browser.
//! It performs no I/O and defines the value objects and trait interfaces
//! that the store, view and CLI layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Taxon**: a named unit of the classification (Kingdom, Phylum, ... Genus)
//! - **Rank**: the taxonomic level label of a taxon (free text, well-known levels recognised)
//! - **Attributes**: specimen facts carried by leaf taxa (habitat, reproduction, ...)
//! - **Taxon path**: slash-separated names from the root (`Fungi/Ascomycota`)
//!
//! ## Architecture
//!
//! - Pure data model only
//! - Tree construction and validation live in `fungarium-store`
//! - Rendering lives in `fungarium-view`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod attribute;
pub mod path;
pub mod rank;
pub mod taxon;
pub mod traits;

// Re-exports for convenience
pub use attribute::AttributeValue;
pub use path::TaxonPath;
pub use rank::Rank;
pub use taxon::{display_name, TaxonNode, TaxonSpec};
pub use traits::TaxonSource;
