use serde::{Deserialize, Serialize};

/// A field value as surfaced by the host dataset API: a scalar, or a typed
/// reference to another record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Lookup(LookupRef),
}

impl FieldValue {
    /// Scalar rendering of a text or number value; lookup references have none.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Text(value) => Some(value.clone()),
            Self::Number(value) => Some(value.to_string()),
            Self::Lookup(_) => None,
        }
    }

    /// True unless the value is the empty string. Zero counts as filled.
    pub fn is_filled(&self) -> bool {
        match self {
            Self::Text(value) => !value.is_empty(),
            Self::Number(_) | Self::Lookup(_) => true,
        }
    }
}

/// A lookup-type field value: points at another record, carrying a display
/// name and an identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupRef {
    pub name: Option<String>,
    pub id: Option<LookupId>,
}

impl LookupRef {
    pub fn new(name: impl Into<String>, id: LookupId) -> Self {
        Self {
            name: Some(name.into()),
            id: Some(id),
        }
    }
}

/// Record identifier carried by a lookup reference. Source data ships both a
/// plain string form and a structured `{guid}` wrapper for the same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LookupId {
    Plain(String),
    Structured { guid: String },
}

impl LookupId {
    /// Unwraps either identifier shape to its plain string form. All engine
    /// logic goes through here, so the two shapes are indistinguishable past
    /// the ingestion boundary.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plain(id) => id,
            Self::Structured { guid } => guid,
        }
    }
}
