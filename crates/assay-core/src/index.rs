//! Sample identity index.

use std::collections::BTreeSet;

use assay_model::RecordSet;

use crate::fields::resolve_text;

/// Candidate labels for a sample's display name across source schemas.
pub const SAMPLE_NAME_LABELS: [&str; 5] = ["Name", "ID", "cr2b6_name", "Sample", "name"];

/// The set of valid sample identifiers plus an insertion-ordered
/// name -> identifier map built from the sample collection.
///
/// A sample's canonical identifier is its own record id; when that id equals
/// the dataset row key (test data keys rows by the record id itself) the row
/// key is used directly. Samples without a resolvable display name appear in
/// the id set but not in the name map.
#[derive(Debug, Clone, Default)]
pub struct SampleIndex {
    valid_ids: BTreeSet<String>,
    names: Vec<(String, String)>,
}

impl SampleIndex {
    pub fn build(samples: &RecordSet) -> Self {
        let mut index = Self::default();
        for (row_key, record) in samples.iter() {
            let record_id = record.record_id();
            let actual_id = if record_id == row_key {
                row_key
            } else {
                record_id
            };
            index.valid_ids.insert(actual_id.to_string());
            if let Some(name) = resolve_text(record, samples, &SAMPLE_NAME_LABELS) {
                let name = name.trim();
                if !name.is_empty() {
                    index.insert_name(name.to_string(), actual_id.to_string());
                }
            }
        }
        index
    }

    // A re-registered name keeps its original scan position and takes the
    // newer id.
    fn insert_name(&mut self, name: String, id: String) {
        match self.names.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = id,
            None => self.names.push((name, id)),
        }
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.valid_ids.contains(id)
    }

    pub fn id_for(&self, name: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, id)| id.as_str())
    }

    /// Known (name, id) pairs in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names
            .iter()
            .map(|(name, id)| (name.as_str(), id.as_str()))
    }

    /// False when no sample resolved a display name; linkage then runs in
    /// permissive mode.
    pub fn has_name_map(&self) -> bool {
        !self.names.is_empty()
    }
}
