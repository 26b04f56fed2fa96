//! Attribute values carried by specimen (leaf) taxa

use std::fmt;

/// A single scalar attribute value
///
/// Attributes hold specimen facts such as habitat or reproduction mode.
/// The set of variants is closed: text, number or flag.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Descriptive text (the common case)
    Text(String),

    /// Numeric measurement
    Number(f64),

    /// Yes/no fact
    Flag(bool),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(s) => write!(f, "{}", s),
            AttributeValue::Number(n) => write!(f, "{}", n),
            AttributeValue::Flag(b) => write!(f, "{}", if *b { "yes" } else { "no" }),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        AttributeValue::Number(n)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Flag(b)
    }
}
