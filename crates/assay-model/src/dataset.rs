use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::{FieldValue, LookupRef};

/// A dataset column: internal field key plus human display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub display_name: String,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
        }
    }
}

/// One host record: a stable identifier plus raw and display-formatted
/// values keyed by field name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    record_id: String,
    values: BTreeMap<String, FieldValue>,
    formatted: BTreeMap<String, String>,
}

impl Record {
    pub fn new(record_id: impl Into<String>) -> Self {
        Self {
            record_id: record_id.into(),
            values: BTreeMap::new(),
            formatted: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, field: impl Into<String>, value: FieldValue) -> Self {
        self.values.insert(field.into(), value);
        self
    }

    pub fn with_text(self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_value(field, FieldValue::Text(value.into()))
    }

    pub fn with_number(self, field: impl Into<String>, value: f64) -> Self {
        self.with_value(field, FieldValue::Number(value))
    }

    pub fn with_lookup(self, field: impl Into<String>, lookup: LookupRef) -> Self {
        self.with_value(field, FieldValue::Lookup(lookup))
    }

    pub fn with_formatted(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.formatted.insert(field.into(), value.into());
        self
    }

    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn formatted_value(&self, field: &str) -> Option<&str> {
        self.formatted.get(field).map(String::as_str)
    }
}

/// An ordered record collection with column metadata, mirroring the host
/// dataset surface: column descriptors, sorted row keys, records by key.
///
/// The row key and a record's own identifier may disagree; mixed
/// test/production data carries both identity schemes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSet {
    columns: Vec<ColumnDescriptor>,
    order: Vec<String>,
    records: BTreeMap<String, Record>,
}

impl RecordSet {
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            columns,
            order: Vec::new(),
            records: BTreeMap::new(),
        }
    }

    /// Appends a record under the given row key; re-inserting an existing
    /// key replaces the record without disturbing row order.
    pub fn insert(&mut self, row_key: impl Into<String>, record: Record) {
        let row_key = row_key.into();
        if self.records.insert(row_key.clone(), record).is_none() {
            self.order.push(row_key);
        }
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn row_keys(&self) -> &[String] {
        &self.order
    }

    pub fn record(&self, row_key: &str) -> Option<&Record> {
        self.records.get(row_key)
    }

    /// Records in row-key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.order
            .iter()
            .filter_map(|key| self.records.get(key).map(|record| (key.as_str(), record)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
