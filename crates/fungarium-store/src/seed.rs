//! Seed file loading
//!
//! A seed is a TOML document of `[[taxon]]` records applied in file order.
//! Each record names its parent by slash path; the single record without a
//! parent is the root. Parents must be declared before their children.

use crate::builder::{TaxonId, TaxonomyBuilder};
use crate::error::{Result, StoreError};
use crate::Taxonomy;
use fungarium_domain::{display_name, AttributeValue, TaxonPath, TaxonSpec};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Top-level seed document
#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    taxon: Vec<TaxonRecord>,
}

/// One construction record
#[derive(Debug, Deserialize)]
pub struct TaxonRecord {
    /// Taxon name
    pub name: String,

    /// Rank label
    pub rank: String,

    /// Slash path of the parent, absent for the root
    #[serde(default)]
    pub parent: Option<String>,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Optional domain label
    #[serde(default)]
    pub domain: Option<String>,

    /// Specimen attributes
    #[serde(default)]
    pub attributes: BTreeMap<String, SeedValue>,
}

/// Scalar attribute as written in TOML
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SeedValue {
    /// `true` / `false`
    Flag(bool),
    /// Integer literal
    Integer(i64),
    /// Float literal
    Number(f64),
    /// String literal
    Text(String),
}

impl From<SeedValue> for AttributeValue {
    fn from(value: SeedValue) -> Self {
        match value {
            SeedValue::Flag(b) => AttributeValue::Flag(b),
            SeedValue::Integer(i) => AttributeValue::Number(i as f64),
            SeedValue::Number(n) => AttributeValue::Number(n),
            SeedValue::Text(s) => AttributeValue::Text(s),
        }
    }
}

impl TaxonRecord {
    fn into_spec(self) -> (Option<String>, TaxonSpec) {
        let spec = TaxonSpec {
            name: self.name,
            rank: self.rank,
            description: self.description,
            attributes: self
                .attributes
                .into_iter()
                .map(|(k, v)| (k, v.into()))
                .collect(),
            domain: self.domain,
        };
        (self.parent, spec)
    }
}

/// Path in display form, so parents resolve with the same spelling rules
/// as [`Taxonomy::lookup`]
fn normalized(path: &TaxonPath) -> TaxonPath {
    match path.segments().split_first() {
        Some((first, rest)) => rest
            .iter()
            .fold(TaxonPath::root(&display_name(first)), |acc, segment| {
                acc.join(&display_name(segment))
            }),
        None => path.clone(),
    }
}

impl Taxonomy {
    /// Build a taxonomy from seed text
    ///
    /// # Errors
    /// Any structural error from the builder, `NotFound` for a parent path
    /// that was not declared earlier, or `Seed` for malformed TOML.
    pub fn from_seed_str(seed: &str) -> Result<Self> {
        let seed: SeedFile = toml::from_str(seed)?;
        let mut builder = TaxonomyBuilder::new();
        let mut ids: HashMap<TaxonPath, TaxonId> = HashMap::new();

        for record in seed.taxon {
            let (parent, spec) = record.into_spec();
            let name = spec.name.clone();

            let (path, id) = match parent {
                None => (TaxonPath::root(&display_name(&name)), builder.add_root(spec)?),
                Some(parent) => {
                    let parent_path = TaxonPath::parse(&parent).map_err(StoreError::InvalidPath)?;
                    let parent_path = normalized(&parent_path);
                    let parent_id = ids.get(&parent_path).copied().ok_or_else(|| {
                        StoreError::NotFound(format!(
                            "parent '{}' of '{}' (parents must be declared first)",
                            parent_path, name
                        ))
                    })?;
                    (parent_path.join(&display_name(&name)), builder.add_child(parent_id, spec)?)
                }
            };

            ids.insert(path, id);
        }

        debug!(records = ids.len(), "seed applied");
        builder.build()
    }

    /// Build a taxonomy from a seed file on disk
    pub fn from_seed_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_seed_str(&contents)
    }
}
