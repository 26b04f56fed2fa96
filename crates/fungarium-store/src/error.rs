//! Error types for taxonomy construction and lookup

use thiserror::Error;

/// Errors that can occur while building or querying a taxonomy
#[derive(Error, Debug)]
pub enum StoreError {
    /// Construction record is missing its name or rank
    #[error("Invalid taxon spec: {0}")]
    InvalidSpec(String),

    /// Parent already has a child under this key
    #[error("Duplicate key '{key}' under '{parent}'")]
    DuplicateKey {
        /// Parent name
        parent: String,
        /// Offending key
        key: String,
    },

    /// Attachment would make a node its own ancestor
    #[error("Attaching '{child}' under '{parent}' would create a cycle")]
    CycleDetected {
        /// Parent name
        parent: String,
        /// Child name
        child: String,
    },

    /// Lookup missed
    #[error("Not found: {0}")]
    NotFound(String),

    /// Attach key differs from the child's name
    #[error("Key '{key}' does not match child name '{name}'")]
    KeyMismatch {
        /// Key passed to the attach call
        key: String,
        /// Name of the child
        name: String,
    },

    /// Child already has a parent
    #[error("Taxon '{0}' is already attached")]
    AlreadyAttached(String),

    /// A root was already declared
    #[error("Taxonomy already has a root")]
    MultipleRoots,

    /// Build called before a root was declared
    #[error("Taxonomy has no root")]
    NoRoot,

    /// A created node was never attached
    #[error("Taxon '{0}' is not reachable from the root")]
    Unattached(String),

    /// Malformed taxon path
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Seed file could not be parsed
    #[error("Seed parse error: {0}")]
    Seed(#[from] toml::de::Error),

    /// Seed file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
