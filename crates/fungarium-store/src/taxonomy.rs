//! Built, immutable taxonomy

use crate::error::{Result, StoreError};
use fungarium_domain::{TaxonNode, TaxonPath, TaxonSource};

/// The built-in Fungi dataset
const FUNGI_SEED: &str = include_str!("../data/fungi.toml");

/// A fully constructed taxon tree
///
/// Only obtainable from [`TaxonomyBuilder::build`](crate::TaxonomyBuilder::build)
/// or the seed loaders, so a partially built tree is never observable.
/// There is no API to change a taxonomy once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Taxonomy {
    root: TaxonNode,
    len: usize,
}

impl Taxonomy {
    pub(crate) fn from_root(root: TaxonNode) -> Self {
        let len = root.subtree_size();
        Self { root, len }
    }

    /// Build the built-in Fungi classification
    ///
    /// # Examples
    ///
    /// ```
    /// use fungarium_store::Taxonomy;
    ///
    /// let taxonomy = Taxonomy::fungi().unwrap();
    /// assert_eq!(taxonomy.root().name(), "Fungi");
    /// assert_eq!(taxonomy.root().rank(), "Kingdom");
    /// ```
    pub fn fungi() -> Result<Self> {
        Self::from_seed_str(FUNGI_SEED)
    }

    /// The root taxon
    pub fn root(&self) -> &TaxonNode {
        &self.root
    }

    /// Total number of taxa
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a taxonomy has at least its root
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resolve a path; the first segment must name the root
    pub fn lookup(&self, path: &TaxonPath) -> Result<&TaxonNode> {
        let mut segments = path.segments().iter();

        let first = segments
            .next()
            .ok_or_else(|| StoreError::InvalidPath(path.to_string()))?;
        if !self.root.matches(first) {
            return Err(StoreError::NotFound(format!("no root named '{}'", first)));
        }

        let mut node = &self.root;
        for segment in segments {
            node = node.find_child(segment).ok_or_else(|| {
                StoreError::NotFound(format!("'{}' has no child '{}'", node.name(), segment))
            })?;
        }
        Ok(node)
    }

    /// Parse and resolve a slash-separated path
    pub fn lookup_str(&self, path: &str) -> Result<&TaxonNode> {
        let path = TaxonPath::parse(path).map_err(StoreError::InvalidPath)?;
        self.lookup(&path)
    }

    /// Pre-order traversal yielding `(depth, node)`, root at depth 0
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: vec![(0, &self.root)],
        }
    }
}

impl TaxonSource for Taxonomy {
    type Error = StoreError;

    fn root(&self) -> &TaxonNode {
        Taxonomy::root(self)
    }

    fn lookup(&self, path: &TaxonPath) -> Result<&TaxonNode> {
        Taxonomy::lookup(self, path)
    }
}

/// Pre-order iterator over a taxonomy
pub struct Iter<'a> {
    stack: Vec<(usize, &'a TaxonNode)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (usize, &'a TaxonNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        let children: Vec<&TaxonNode> = node.children().collect();
        self.stack
            .extend(children.into_iter().rev().map(|c| (depth + 1, c)));
        Some((depth, node))
    }
}
