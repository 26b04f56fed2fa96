//! Taxon module - the single entity of the classification tree

use crate::AttributeValue;
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Display form of a taxon name (underscores become spaces)
///
/// # Examples
///
/// ```
/// use fungarium_domain::display_name;
///
/// assert_eq!(display_name("Fungi_incertae_sedis"), "Fungi incertae sedis");
/// ```
pub fn display_name(name: &str) -> String {
    name.replace('_', " ")
}

/// Construction record for a taxon
///
/// Mirrors the authoring shape `{name, rank, description?, attributes?}`.
/// `domain` is the optional top-level classification label carried by the root.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaxonSpec {
    /// Name, unique among siblings
    pub name: String,

    /// Rank label (free text)
    pub rank: String,

    /// Optional description
    pub description: Option<String>,

    /// Specimen attributes
    pub attributes: BTreeMap<String, AttributeValue>,

    /// Own domain-like classification label
    pub domain: Option<String>,
}

impl TaxonSpec {
    /// Create a spec with a name and rank and nothing else
    pub fn new(name: impl Into<String>, rank: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rank: rank.into(),
            ..Self::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add one attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Set the domain label
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Check that name and rank are present and the name is addressable
    ///
    /// # Errors
    /// Returns error if name or rank is empty or whitespace, or if the name
    /// contains the path separator `/`
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Taxon name cannot be empty".to_string());
        }
        if self.name.contains('/') {
            return Err(format!("Taxon name '{}' cannot contain '/'", self.name));
        }
        if self.rank.trim().is_empty() {
            return Err(format!("Taxon '{}' has an empty rank", self.name));
        }
        Ok(())
    }
}

/// A taxon and the subtree it owns
///
/// Nodes are assembled bottom-up and never change afterwards; the only
/// mutation is [`TaxonNode::attach`], used while a tree is being built.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxonNode {
    name: String,
    rank: String,
    description: Option<String>,
    attributes: BTreeMap<String, AttributeValue>,
    domain: Option<String>,
    inherited_domain: Option<String>,
    children: IndexMap<String, TaxonNode>,
}

impl TaxonNode {
    /// Create a childless node from a spec
    ///
    /// An empty description is treated as no description.
    pub fn new(spec: TaxonSpec) -> Self {
        Self {
            name: spec.name,
            rank: spec.rank,
            description: spec.description.filter(|d| !d.trim().is_empty()),
            attributes: spec.attributes,
            domain: spec.domain,
            inherited_domain: None,
            children: IndexMap::new(),
        }
    }

    /// Record the domain label snapshotted from the parent at construction
    pub fn with_inherited_domain(mut self, inherited: Option<String>) -> Self {
        self.inherited_domain = inherited;
        self
    }

    /// Attach a child under its own name
    ///
    /// # Errors
    /// Returns error if a child with the same name, or the same display
    /// name, is already attached
    pub fn attach(&mut self, child: TaxonNode) -> Result<(), String> {
        if self.children.values().any(|c| c.matches(&child.name)) {
            return Err(format!(
                "'{}' already has a child named '{}'",
                self.name, child.name
            ));
        }
        self.children.insert(child.name.clone(), child);
        Ok(())
    }

    /// Name as authored
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name with underscores shown as spaces
    pub fn display_name(&self) -> String {
        display_name(&self.name)
    }

    /// Rank label
    pub fn rank(&self) -> &str {
        &self.rank
    }

    /// Description, if any
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Specimen attributes (empty for intermediate ranks)
    pub fn attributes(&self) -> &BTreeMap<String, AttributeValue> {
        &self.attributes
    }

    /// Own domain label
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// Domain label copied from the parent when this node was created
    pub fn inherited_domain(&self) -> Option<&str> {
        self.inherited_domain.as_deref()
    }

    /// Domain label in effect: own label first, then the inherited snapshot
    pub fn effective_domain(&self) -> Option<&str> {
        self.domain().or_else(|| self.inherited_domain())
    }

    /// Child by key
    pub fn child(&self, key: &str) -> Option<&TaxonNode> {
        self.children.get(key)
    }

    /// Child whose name matches `segment`, treating underscores and spaces alike
    pub fn find_child(&self, segment: &str) -> Option<&TaxonNode> {
        self.child(segment)
            .or_else(|| self.children.values().find(|c| c.matches(segment)))
    }

    /// Check if `segment` names this node, treating underscores and spaces alike
    pub fn matches(&self, segment: &str) -> bool {
        self.name == segment || display_name(&self.name) == display_name(segment)
    }

    /// Children in insertion order
    pub fn children(&self) -> impl Iterator<Item = &TaxonNode> {
        self.children.values()
    }

    /// Child keys with their nodes, in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &TaxonNode)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Check if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including this node
    pub fn subtree_size(&self) -> usize {
        1 + self.children().map(TaxonNode::subtree_size).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_default_empty() {
        let node = TaxonNode::new(TaxonSpec::new("Fungi", "Kingdom"));
        assert!(node.attributes().is_empty());
        assert!(node.is_leaf());
        assert_eq!(node.description(), None);
    }

    #[test]
    fn test_empty_description_is_absent() {
        let node = TaxonNode::new(TaxonSpec::new("Fungi", "Kingdom").with_description("  "));
        assert_eq!(node.description(), None);
    }

    #[test]
    fn test_slash_in_name_is_rejected() {
        assert!(TaxonSpec::new("Ascomycota/Basidiomycota", "Phylum").validate().is_err());
        assert!(TaxonSpec::new("Fungi_incertae_sedis", "Incertae sedis").validate().is_ok());
    }

    #[test]
    fn test_display_equal_siblings_collide() {
        let mut root = TaxonNode::new(TaxonSpec::new("Fungi", "Kingdom"));
        root.attach(TaxonNode::new(TaxonSpec::new("Fungi_incertae_sedis", "Incertae sedis")))
            .unwrap();

        let clash = TaxonNode::new(TaxonSpec::new("Fungi incertae sedis", "Class"));
        assert!(root.attach(clash).is_err());
        assert_eq!(root.child_count(), 1);
    }

    #[test]
    fn test_spec_validation() {
        assert!(TaxonSpec::new("Fungi", "Kingdom").validate().is_ok());
        assert!(TaxonSpec::new("", "Kingdom").validate().is_err());
        assert!(TaxonSpec::new("Fungi", " ").validate().is_err());
    }

    #[test]
    fn test_attach_rejects_duplicate() {
        let mut root = TaxonNode::new(TaxonSpec::new("Fungi", "Kingdom"));
        root.attach(TaxonNode::new(TaxonSpec::new("Chytridiomycota", "Phylum")))
            .unwrap();
        let err = root
            .attach(TaxonNode::new(TaxonSpec::new("Chytridiomycota", "Class")))
            .unwrap_err();
        assert!(err.contains("Chytridiomycota"));
        assert_eq!(root.child_count(), 1);
        assert_eq!(root.child("Chytridiomycota").unwrap().rank(), "Phylum");
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let mut root = TaxonNode::new(TaxonSpec::new("Fungi", "Kingdom"));
        for name in ["Zygomycota", "Ascomycota", "Basidiomycota"] {
            root.attach(TaxonNode::new(TaxonSpec::new(name, "Phylum"))).unwrap();
        }
        let names: Vec<&str> = root.children().map(TaxonNode::name).collect();
        assert_eq!(names, ["Zygomycota", "Ascomycota", "Basidiomycota"]);
        assert_eq!(root.subtree_size(), 4);
    }

    #[test]
    fn test_name_matching() {
        let mut root = TaxonNode::new(TaxonSpec::new("Fungi", "Kingdom"));
        root.attach(TaxonNode::new(TaxonSpec::new("Fungi_incertae_sedis", "Phylum")))
            .unwrap();
        assert!(root.find_child("Fungi incertae sedis").is_some());
        assert!(root.find_child("Fungi_incertae_sedis").is_some());
        assert!(root.find_child("Ascomycota").is_none());
    }

    #[test]
    fn test_effective_domain() {
        let root = TaxonNode::new(TaxonSpec::new("Fungi", "Kingdom").with_domain("Eukaryota"));
        assert_eq!(root.effective_domain(), Some("Eukaryota"));
        assert_eq!(root.inherited_domain(), None);

        let child = TaxonNode::new(TaxonSpec::new("Ascomycota", "Phylum"))
            .with_inherited_domain(Some("Eukaryota".to_string()));
        assert_eq!(child.domain(), None);
        assert_eq!(child.effective_domain(), Some("Eukaryota"));
    }
}
