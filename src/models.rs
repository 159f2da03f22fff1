//! Frontend Models
//!
//! Scheme entries as edited locally and rows as persisted remotely.

use serde::{Deserialize, Deserializer, Serialize};

/// Pricing scheme type
///
/// Serialized as the human-readable label the collection stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SchemeType {
    /// Flat price per kWh
    Fixed,
    /// Admin fee on top of a variable rate
    Variable,
    /// Not yet chosen
    #[default]
    Unset,
}

/// Scheme types offered by the type selector
pub const SCHEME_TYPES: &[SchemeType] = &[SchemeType::Fixed, SchemeType::Variable];

impl SchemeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemeType::Fixed => "Fixed Pricing",
            SchemeType::Variable => "Variable-based",
            SchemeType::Unset => "",
        }
    }

    /// Parse a stored label. Unknown labels read as `Unset`.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Fixed Pricing" | "Fixed pricing" => SchemeType::Fixed,
            "Variable-based" => SchemeType::Variable,
            _ => SchemeType::Unset,
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, SchemeType::Unset)
    }

    /// Unit suffix shown after the amount in the result table
    pub fn unit(&self) -> &'static str {
        match self {
            SchemeType::Fixed => "/kWh",
            SchemeType::Variable => "/kWh Admin Fee",
            SchemeType::Unset => "",
        }
    }
}

impl From<String> for SchemeType {
    fn from(label: String) -> Self {
        SchemeType::from_label(&label)
    }
}

impl From<SchemeType> for String {
    fn from(scheme_type: SchemeType) -> Self {
        scheme_type.as_str().to_string()
    }
}

/// One row of the editor list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub scheme_type: SchemeType,
    /// Raw input text; coerced to a number on submit
    pub amount: String,
}

impl SchemeEntry {
    /// Create an empty entry with a fresh identifier
    pub fn new() -> Self {
        Self {
            id: new_id(),
            scheme_type: SchemeType::Unset,
            amount: String::new(),
        }
    }

    /// Whether the amount input should be shown for this row
    pub fn amount_visible(&self) -> bool {
        self.scheme_type.is_set()
    }
}

impl Default for SchemeEntry {
    fn default() -> Self {
        Self::new()
    }
}

/// Row shape sent to and returned by the collection endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeRow {
    pub id: String,
    #[serde(rename = "type")]
    pub scheme_type: String,
    #[serde(deserialize_with = "number_or_string")]
    pub amount: f64,
}

impl SchemeRow {
    pub fn kind(&self) -> SchemeType {
        SchemeType::from_label(&self.scheme_type)
    }
}

/// Generate a fresh entry identifier
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Numeric columns may come back as JSON numbers or numeric strings
fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Number(n) => Ok(n),
        Amount::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
