use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One (sample, method) measurement in the pivot grid.
///
/// Serialized with camelCase keys: this is the wire shape the rendering
/// collaborator consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellValue {
    pub analysis_id: String,
    pub value: String,
    pub unit: String,
    pub expected: String,
    pub required: bool,
}

impl CellValue {
    /// Placeholder for a method that was never recorded against a sample.
    pub fn placeholder() -> Self {
        Self {
            analysis_id: String::new(),
            value: String::new(),
            unit: String::new(),
            expected: String::new(),
            required: false,
        }
    }
}

/// One pivot row: identity fields plus a dense method -> cell mapping. The
/// mapping carries an entry for every method in the table, placeholders
/// included; renderers never probe for missing keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotRow {
    pub sample_id: String,
    pub sample_name: String,
    pub sample_guid: String,
    #[serde(flatten)]
    pub cells: BTreeMap<String, CellValue>,
}

/// The pivoted output: rows in first-appearance order and the method column
/// list in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotTable {
    pub rows: Vec<PivotRow>,
    pub methods: Vec<String>,
    /// True when linkage ran permissively because no sample names could be
    /// resolved; callers should surface a warning.
    pub low_confidence: bool,
}

/// Distinguishes "inputs not yet available" (render a loading state) from a
/// computed pivot, which may legitimately hold zero rows (render an explicit
/// empty state). The two are different outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PivotOutcome {
    /// One or both input collections have no records yet.
    NotReady,
    Ready(PivotTable),
}

impl PivotOutcome {
    pub fn table(&self) -> Option<&PivotTable> {
        match self {
            Self::Ready(table) => Some(table),
            Self::NotReady => None,
        }
    }
}
