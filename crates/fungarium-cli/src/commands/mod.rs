//! Command implementations.

pub mod info;
pub mod show;

pub use self::info::execute_info;
pub use self::show::execute_show;

use crate::error::{CliError, Result};
use fungarium_domain::{TaxonNode, TaxonPath};

/// Resolve user input to a full path from the root.
///
/// An empty argument names the root. A path whose first segment is not the
/// root gets the root's name prepended, so `Ascomycota` and
/// `Fungi/Ascomycota` are the same taxon.
pub fn resolve_path(root: &TaxonNode, input: &str) -> Result<TaxonPath> {
    let input = input.trim();
    if input.trim_matches('/').is_empty() {
        return Ok(TaxonPath::root(root.name()));
    }

    let path = TaxonPath::parse(input).map_err(CliError::InvalidInput)?;
    if root.matches(&path.segments()[0]) {
        return Ok(path);
    }

    let mut full = TaxonPath::root(root.name());
    for segment in path.segments() {
        full = full.join(segment);
    }
    Ok(full)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fungarium_store::Taxonomy;

    #[test]
    fn test_resolve_empty_is_root() {
        let taxonomy = Taxonomy::fungi().unwrap();
        let path = resolve_path(taxonomy.root(), "  ").unwrap();
        assert_eq!(path.to_string(), "Fungi");
    }

    #[test]
    fn test_resolve_prepends_root() {
        let taxonomy = Taxonomy::fungi().unwrap();
        let path = resolve_path(taxonomy.root(), "Ascomycota/Pezizomycotina").unwrap();
        assert_eq!(path.to_string(), "Fungi/Ascomycota/Pezizomycotina");

        let path = resolve_path(taxonomy.root(), "/Fungi/Ascomycota/").unwrap();
        assert_eq!(path.to_string(), "Fungi/Ascomycota");
    }

    #[test]
    fn test_resolve_rejects_empty_segment() {
        let taxonomy = Taxonomy::fungi().unwrap();
        let result = resolve_path(taxonomy.root(), "Ascomycota//Pezizomycotina");
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
