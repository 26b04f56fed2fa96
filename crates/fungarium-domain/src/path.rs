//! Taxon path module - addressing taxa by name from the root

use std::fmt;

/// Path to a taxon
///
/// Uses slash-delimited names starting at the root: `Fungi/Ascomycota/Pezizomycotina`.
/// Names are only unique among siblings, so the full path is needed to address a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaxonPath(Vec<String>);

impl TaxonPath {
    /// Parse a path from its slash-delimited form
    ///
    /// Leading and trailing slashes are ignored.
    ///
    /// # Errors
    /// Returns error if the path is empty or contains an empty segment
    pub fn parse(value: &str) -> Result<Self, String> {
        let trimmed = value.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Err("Taxon path cannot be empty".to_string());
        }

        let segments: Vec<String> = trimmed.split('/').map(|s| s.trim().to_string()).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(format!("Taxon path has an empty segment: {}", value));
        }

        Ok(Self(segments))
    }

    /// Path consisting of the root name only
    pub fn root(name: &str) -> Self {
        Self(vec![name.to_string()])
    }

    /// Path segments, root first
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Name of the addressed taxon (last segment)
    pub fn leaf(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or_default()
    }

    /// Get depth (number of segments; the root path has depth 1)
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Extend this path by one child name
    pub fn join(&self, name: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.to_string());
        Self(segments)
    }

    /// Path of the parent taxon, `None` for the root
    pub fn parent(&self) -> Option<Self> {
        if self.0.len() <= 1 {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_vec()))
    }
}

impl fmt::Display for TaxonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

impl std::str::FromStr for TaxonPath {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
