//! Rendered rows and their controls

use fungarium_domain::AttributeValue;
use std::collections::BTreeMap;

/// Expand/collapse control, present only on nodes with children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandControl {
    /// Node is collapsed; activating shows its children
    Expand,
    /// Node is expanded; activating hides its children
    Collapse,
}

impl ExpandControl {
    /// Control for the given expanded state
    pub fn for_state(expanded: bool) -> Self {
        if expanded {
            ExpandControl::Collapse
        } else {
            ExpandControl::Expand
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            ExpandControl::Expand => "Expand",
            ExpandControl::Collapse => "Collapse",
        }
    }

    /// Single-character marker for tree output
    pub fn marker(&self) -> char {
        match self {
            ExpandControl::Expand => '+',
            ExpandControl::Collapse => '-',
        }
    }
}

/// Description toggle, present only on nodes with a description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionControl {
    /// Description hidden
    Show,
    /// Description visible
    Hide,
}

impl DescriptionControl {
    /// Control for the given visibility
    pub fn for_state(visible: bool) -> Self {
        if visible {
            DescriptionControl::Hide
        } else {
            DescriptionControl::Show
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            DescriptionControl::Show => "Show Description",
            DescriptionControl::Hide => "Hide Description",
        }
    }
}

/// One rendered node
#[derive(Debug, Clone, PartialEq)]
pub struct Row<'a> {
    /// Nesting depth, root at 0
    pub depth: usize,

    /// Name as authored
    pub name: &'a str,

    /// `"<display name> (<rank>)"`
    pub label: String,

    /// Rank label
    pub rank: &'a str,

    /// Expand/collapse control, `None` for leaves
    pub expand_control: Option<ExpandControl>,

    /// Description toggle, `None` without a description
    pub description_control: Option<DescriptionControl>,

    /// Description text while visible
    pub description: Option<&'a str>,

    /// Specimen attributes of the node
    pub attributes: &'a BTreeMap<String, AttributeValue>,

    /// Cosmetic background hue
    pub hue: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_labels() {
        assert_eq!(ExpandControl::for_state(false), ExpandControl::Expand);
        assert_eq!(ExpandControl::for_state(true).label(), "Collapse");
        assert_eq!(DescriptionControl::for_state(false).label(), "Show Description");
        assert_eq!(DescriptionControl::for_state(true).label(), "Hide Description");
    }
}
