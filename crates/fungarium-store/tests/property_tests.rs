//! Property tests for taxonomy construction
//!
//! Random trees and random attachment sequences must always freeze into a
//! well-formed taxonomy: every node reachable, keys equal to names, no cycles.

use fungarium_domain::TaxonSpec;
use fungarium_store::{StoreError, TaxonId, Taxonomy, TaxonomyBuilder};
use proptest::prelude::*;

fn spec(i: usize) -> TaxonSpec {
    TaxonSpec::new(format!("taxon{}", i), "Clade")
}

fn assert_well_formed(taxonomy: &Taxonomy, expected: usize) -> Result<(), TestCaseError> {
    prop_assert_eq!(taxonomy.len(), expected);
    prop_assert_eq!(taxonomy.iter().count(), expected);
    for (_, node) in taxonomy.iter() {
        for (key, child) in node.entries() {
            prop_assert_eq!(key, child.name());
        }
    }
    Ok(())
}

proptest! {
    /// Property: any parent assignment built with add_child is fully reachable
    #[test]
    fn test_random_trees_are_reachable(parents in prop::collection::vec(any::<usize>(), 0..40)) {
        let mut builder = TaxonomyBuilder::new();
        let mut ids = vec![builder.add_root(spec(0)).unwrap()];

        for (i, choice) in parents.iter().enumerate() {
            let parent = ids[choice % ids.len()];
            ids.push(builder.add_child(parent, spec(i + 1)).unwrap());
        }

        let taxonomy = builder.build().unwrap();
        assert_well_formed(&taxonomy, parents.len() + 1)?;
    }

    /// Property: arbitrary attach attempts never produce a cycle
    #[test]
    fn test_random_attachments_stay_acyclic(
        n in 2usize..20,
        attempts in prop::collection::vec((any::<usize>(), any::<usize>()), 0..60),
    ) {
        let mut builder = TaxonomyBuilder::new();
        let root = builder.add_root(spec(0)).unwrap();
        let ids: Vec<TaxonId> = (1..n)
            .map(|i| builder.create_taxon(spec(i), None).unwrap())
            .collect();

        for (a, b) in attempts {
            let parent = ids[a % ids.len()];
            let child = ids[b % ids.len()];
            let key = builder.pending(child).unwrap().name().to_string();
            match builder.attach_child(parent, &key, child) {
                Ok(())
                | Err(StoreError::CycleDetected { .. })
                | Err(StoreError::AlreadyAttached(_)) => {}
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }

        // Hang every remaining top-level node off the root
        for id in &ids {
            let key = builder.pending(*id).unwrap().name().to_string();
            match builder.attach_child(root, &key, *id) {
                Ok(()) | Err(StoreError::AlreadyAttached(_)) => {}
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }

        let taxonomy = builder.build().unwrap();
        assert_well_formed(&taxonomy, n)?;
    }
}
