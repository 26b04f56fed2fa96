//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the data model and the layers
//! that build or consume it. Implementations live in other crates.

use crate::{TaxonNode, TaxonPath};

/// Trait for anything that exposes a fully built taxonomy
///
/// Implemented by the infrastructure layer (fungarium-store)
pub trait TaxonSource {
    /// Error type for lookups
    type Error;

    /// The root taxon
    fn root(&self) -> &TaxonNode;

    /// Resolve a path starting at the root
    fn lookup(&self, path: &TaxonPath) -> Result<&TaxonNode, Self::Error>;
}
