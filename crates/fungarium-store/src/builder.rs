//! Taxonomy builder
//!
//! Nodes are allocated in an arena and addressed by [`TaxonId`] until
//! [`TaxonomyBuilder::build`] freezes them into an owned [`Taxonomy`] tree.
//! All structural invariants (single root, unique keys, no cycles, full
//! reachability) are checked here, so a built taxonomy is always well formed.

use crate::error::{Result, StoreError};
use crate::Taxonomy;
use fungarium_domain::{display_name, TaxonNode, TaxonSpec};
use tracing::{debug, info};

/// Handle to a node that is still under construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaxonId(usize);

#[derive(Debug)]
struct Slot {
    node: TaxonNode,
    parent: Option<TaxonId>,
    children: Vec<(String, TaxonId)>,
}

/// Incremental taxonomy construction
///
/// # Examples
///
/// ```
/// use fungarium_domain::TaxonSpec;
/// use fungarium_store::TaxonomyBuilder;
///
/// let mut builder = TaxonomyBuilder::new();
/// let root = builder.add_root(TaxonSpec::new("Fungi", "Kingdom")).unwrap();
/// builder.add_child(root, TaxonSpec::new("Chytridiomycota", "Phylum")).unwrap();
///
/// let taxonomy = builder.build().unwrap();
/// assert_eq!(taxonomy.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct TaxonomyBuilder {
    slots: Vec<Slot>,
    root: Option<TaxonId>,
}

impl TaxonomyBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes created so far
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no node has been created
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The node behind an id, without its (not yet assembled) children
    pub fn pending(&self, id: TaxonId) -> Result<&TaxonNode> {
        self.slot(id).map(|s| &s.node)
    }

    /// Create a detached node
    ///
    /// When `parent` is given, its domain label (own or inherited) is copied
    /// onto the new node as `inherited_domain`. The parent itself is not
    /// modified; use [`attach_child`](Self::attach_child) to link the two.
    pub fn create_taxon(&mut self, spec: TaxonSpec, parent: Option<TaxonId>) -> Result<TaxonId> {
        spec.validate().map_err(StoreError::InvalidSpec)?;

        let inherited = match parent {
            Some(p) => self.slot(p)?.node.effective_domain().map(str::to_string),
            None => None,
        };

        let id = TaxonId(self.slots.len());
        debug!(name = %spec.name, rank = %spec.rank, id = id.0, "created taxon");
        self.slots.push(Slot {
            node: TaxonNode::new(spec).with_inherited_domain(inherited),
            parent: None,
            children: Vec::new(),
        });
        Ok(id)
    }

    /// Create the root node
    pub fn add_root(&mut self, spec: TaxonSpec) -> Result<TaxonId> {
        if self.root.is_some() {
            return Err(StoreError::MultipleRoots);
        }
        let id = self.create_taxon(spec, None)?;
        self.root = Some(id);
        Ok(id)
    }

    /// Insert `child` into `parent`'s children under `key`
    ///
    /// # Errors
    /// - `KeyMismatch` if `key` differs from the child's name
    /// - `CycleDetected` if `child` is `parent`, one of its ancestors, or the root
    /// - `AlreadyAttached` if `child` already has a parent
    /// - `DuplicateKey` if `parent` already uses `key`, or a key that only
    ///   differs from it by underscores versus spaces
    pub fn attach_child(&mut self, parent: TaxonId, key: &str, child: TaxonId) -> Result<()> {
        let parent_name = self.slot(parent)?.node.name().to_string();
        let child_slot = self.slot(child)?;
        let child_name = child_slot.node.name().to_string();

        if key != child_name {
            return Err(StoreError::KeyMismatch {
                key: key.to_string(),
                name: child_name,
            });
        }

        if self.root == Some(child) || self.is_ancestor(child, parent) {
            return Err(StoreError::CycleDetected {
                parent: parent_name,
                child: child_name,
            });
        }

        if child_slot.parent.is_some() {
            return Err(StoreError::AlreadyAttached(child_name));
        }

        if self.has_key(parent, key) {
            return Err(StoreError::DuplicateKey {
                parent: parent_name,
                key: key.to_string(),
            });
        }

        self.slots[child.0].parent = Some(parent);
        self.slots[parent.0].children.push((key.to_string(), child));
        debug!(parent = %parent_name, key = %key, "attached taxon");
        Ok(())
    }

    /// Create a node and attach it under its own name in one step
    pub fn add_child(&mut self, parent: TaxonId, spec: TaxonSpec) -> Result<TaxonId> {
        if self.has_key(parent, &spec.name) {
            return Err(StoreError::DuplicateKey {
                parent: self.slot(parent)?.node.name().to_string(),
                key: spec.name,
            });
        }

        let key = spec.name.clone();
        let id = self.create_taxon(spec, Some(parent))?;
        self.attach_child(parent, &key, id)?;
        Ok(id)
    }

    /// Freeze the arena into an immutable taxonomy
    ///
    /// # Errors
    /// - `NoRoot` if no root was declared
    /// - `Unattached` if any created node is not reachable from the root
    pub fn build(self) -> Result<Taxonomy> {
        let root = self.root.ok_or(StoreError::NoRoot)?;

        if let Some(orphan) = self
            .slots
            .iter()
            .enumerate()
            .find(|(i, s)| *i != root.0 && s.parent.is_none())
        {
            return Err(StoreError::Unattached(orphan.1.node.name().to_string()));
        }

        let len = self.slots.len();
        let mut nodes: Vec<Option<TaxonNode>> = Vec::with_capacity(len);
        let mut links: Vec<Vec<(String, TaxonId)>> = Vec::with_capacity(len);
        for slot in self.slots {
            nodes.push(Some(slot.node));
            links.push(slot.children);
        }

        let tree = assemble(&mut nodes, &links, root)?;
        info!(root = %tree.name(), nodes = len, "taxonomy built");
        Ok(Taxonomy::from_root(tree))
    }

    fn slot(&self, id: TaxonId) -> Result<&Slot> {
        self.slots
            .get(id.0)
            .ok_or_else(|| StoreError::NotFound(format!("taxon id {}", id.0)))
    }

    /// Keys are compared in display form: path lookup cannot tell
    /// `A_B` from `A B`, so siblings must not either
    fn has_key(&self, parent: TaxonId, key: &str) -> bool {
        let wanted = display_name(key);
        self.slots
            .get(parent.0)
            .is_some_and(|s| s.children.iter().any(|(k, _)| display_name(k) == wanted))
    }

    /// Check if `candidate` is `node` or one of its ancestors
    fn is_ancestor(&self, candidate: TaxonId, node: TaxonId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.slots.get(id.0).and_then(|s| s.parent);
        }
        false
    }
}

/// Move arena nodes into their parents, bottom-up
fn assemble(
    nodes: &mut [Option<TaxonNode>],
    links: &[Vec<(String, TaxonId)>],
    id: TaxonId,
) -> Result<TaxonNode> {
    let mut node = nodes[id.0]
        .take()
        .ok_or_else(|| StoreError::NotFound(format!("taxon id {}", id.0)))?;

    for (key, child_id) in &links[id.0] {
        let child = assemble(nodes, links, *child_id)?;
        node.attach(child).map_err(|_| StoreError::DuplicateKey {
            parent: node.name().to_string(),
            key: key.clone(),
        })?;
    }

    Ok(node)
}
