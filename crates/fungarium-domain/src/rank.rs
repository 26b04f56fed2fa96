//! Rank module - well-known taxonomic levels

/// Well-known taxonomic rank
///
/// Ranks on a [`TaxonNode`](crate::TaxonNode) are free text; this enum only
/// recognises the common levels so callers can order or highlight them.
/// A rank label that does not parse is still a valid rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Top of the hierarchy
    Kingdom,

    /// Major lineage within a kingdom
    Phylum,

    /// Informal level between phylum and class
    Subphylum,

    /// Class
    Class,

    /// Order
    Order,

    /// Family
    Family,

    /// Genus (specimen level in the built-in dataset)
    Genus,

    /// Species
    Species,
}

impl Rank {
    /// Get the rank name as displayed
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Kingdom => "Kingdom",
            Rank::Phylum => "Phylum",
            Rank::Subphylum => "Subphylum",
            Rank::Class => "Class",
            Rank::Order => "Order",
            Rank::Family => "Family",
            Rank::Genus => "Genus",
            Rank::Species => "Species",
        }
    }

    /// Parse a rank from a label, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kingdom" => Some(Rank::Kingdom),
            "phylum" => Some(Rank::Phylum),
            "subphylum" => Some(Rank::Subphylum),
            "class" => Some(Rank::Class),
            "order" => Some(Rank::Order),
            "family" => Some(Rank::Family),
            "genus" => Some(Rank::Genus),
            "species" => Some(Rank::Species),
            _ => None,
        }
    }
}

impl std::str::FromStr for Rank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown rank: {}", s))
    }
}
