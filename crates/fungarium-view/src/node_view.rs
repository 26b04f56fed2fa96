//! Per-node view state and the render contract

use crate::hue::hue_for;
use crate::row::{DescriptionControl, ExpandControl, Row};
use fungarium_domain::{TaxonNode, TaxonPath, TaxonSource};
use tracing::trace;

/// A mounted view of one taxon
///
/// Holds two independent flags, both initially off. Child views exist only
/// while the node is expanded; collapsing drops them along with their state.
#[derive(Debug, Clone)]
pub struct NodeView<'a> {
    node: &'a TaxonNode,
    depth: usize,
    expanded: bool,
    description_visible: bool,
    children: Vec<NodeView<'a>>,
}

impl<'a> NodeView<'a> {
    /// Mount a collapsed view of `node` at `depth`
    pub fn new(node: &'a TaxonNode, depth: usize) -> Self {
        Self {
            node,
            depth,
            expanded: false,
            description_visible: false,
            children: Vec::new(),
        }
    }

    /// The viewed taxon
    pub fn node(&self) -> &'a TaxonNode {
        self.node
    }

    /// Nesting depth
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether children are shown
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether the description is shown
    pub fn is_description_visible(&self) -> bool {
        self.description_visible
    }

    /// Mounted child views (empty while collapsed)
    pub fn children(&self) -> &[NodeView<'a>] {
        &self.children
    }

    /// Whether an expand/collapse control is rendered
    pub fn has_expand_control(&self) -> bool {
        !self.node.is_leaf()
    }

    /// Whether a description toggle is rendered
    pub fn has_description_control(&self) -> bool {
        self.node.description().is_some()
    }

    /// Flip the expanded flag
    ///
    /// Returns `false` without changing anything when the node is a leaf.
    pub fn toggle_expanded(&mut self) -> bool {
        let target = !self.expanded;
        self.set_expanded(target)
    }

    /// Set the expanded flag
    ///
    /// Returns `false` without changing anything when the node is a leaf.
    pub fn set_expanded(&mut self, expanded: bool) -> bool {
        if !self.has_expand_control() {
            return false;
        }
        if self.expanded != expanded {
            self.expanded = expanded;
            self.children = if expanded {
                self.node
                    .children()
                    .map(|c| NodeView::new(c, self.depth + 1))
                    .collect()
            } else {
                Vec::new()
            };
            trace!(name = %self.node.name(), expanded, "toggled expansion");
        }
        true
    }

    /// Flip the description flag
    ///
    /// Returns `false` without changing anything when there is no description.
    pub fn toggle_description(&mut self) -> bool {
        if !self.has_description_control() {
            return false;
        }
        self.description_visible = !self.description_visible;
        trace!(name = %self.node.name(), visible = self.description_visible, "toggled description");
        true
    }

    /// Expand this node and every node below it
    pub fn expand_all(&mut self) {
        self.set_expanded(true);
        for child in &mut self.children {
            child.expand_all();
        }
    }

    /// Show the description of every mounted node that has one
    pub fn reveal_descriptions(&mut self) {
        if self.has_description_control() {
            self.description_visible = true;
        }
        for child in &mut self.children {
            child.reveal_descriptions();
        }
    }

    /// Find a mounted view by path; the first segment must name this node
    ///
    /// Segments resolve through [`TaxonNode::find_child`], so a path reaches
    /// the same node here as in a store lookup.
    pub fn find_mut(&mut self, path: &TaxonPath) -> Option<&mut NodeView<'a>> {
        let (first, rest) = path.segments().split_first()?;
        if !self.node.matches(first) {
            return None;
        }

        let mut current = self;
        for segment in rest {
            let target = current.node.find_child(segment)?;
            current = current
                .children
                .iter_mut()
                .find(|c| std::ptr::eq(c.node, target))?;
        }
        Some(current)
    }

    /// Render this node and, while expanded, its descendants
    pub fn render(&self) -> Vec<Row<'a>> {
        let mut rows = Vec::new();
        self.render_into(&mut rows);
        rows
    }

    fn render_into(&self, rows: &mut Vec<Row<'a>>) {
        let node = self.node;
        rows.push(Row {
            depth: self.depth,
            name: node.name(),
            label: format!("{} ({})", node.display_name(), node.rank()),
            rank: node.rank(),
            expand_control: self
                .has_expand_control()
                .then(|| ExpandControl::for_state(self.expanded)),
            description_control: self
                .has_description_control()
                .then(|| DescriptionControl::for_state(self.description_visible)),
            description: node.description().filter(|_| self.description_visible),
            attributes: node.attributes(),
            hue: hue_for(node.name()),
        });

        if self.expanded {
            for child in &self.children {
                child.render_into(rows);
            }
        }
    }
}

/// Render entry point: a view rooted at depth 0
#[derive(Debug, Clone)]
pub struct TreeView<'a> {
    root: NodeView<'a>,
}

impl<'a> TreeView<'a> {
    /// Mount a view over a root node
    pub fn new(root: &'a TaxonNode) -> Self {
        Self {
            root: NodeView::new(root, 0),
        }
    }

    /// Mount a view over any taxonomy source
    pub fn from_source<S: TaxonSource>(source: &'a S) -> Self {
        Self::new(source.root())
    }

    /// Root view
    pub fn root(&self) -> &NodeView<'a> {
        &self.root
    }

    /// Root view, mutably
    pub fn root_mut(&mut self) -> &mut NodeView<'a> {
        &mut self.root
    }

    /// Find a mounted view by path
    pub fn find_mut(&mut self, path: &TaxonPath) -> Option<&mut NodeView<'a>> {
        self.root.find_mut(path)
    }

    /// Render every visible row in parent-before-child order
    pub fn render(&self) -> Vec<Row<'a>> {
        self.root.render()
    }
}
