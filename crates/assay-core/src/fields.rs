//! Candidate-label field resolution.
//!
//! The two record sources disagree on column naming: production data uses
//! internal field keys, imports use display headers, and linked columns can
//! carry parenthetical suffixes. Resolution tries the raw value first, the
//! display-formatted value second, and finally retries both under a column
//! whose normalized name matches the requested label.

use assay_model::{FieldValue, LookupRef, Record, RecordSet};

/// A field resolved from a record: a scalar rendered as text, or a typed
/// lookup reference.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    Text(String),
    Lookup(LookupRef),
}

fn raw_or_formatted(record: &Record, field: &str) -> Option<Resolved> {
    if let Some(value) = record.value(field)
        && value.is_filled()
    {
        return Some(match value {
            FieldValue::Text(text) => Resolved::Text(text.clone()),
            FieldValue::Number(number) => Resolved::Text(number.to_string()),
            FieldValue::Lookup(lookup) => Resolved::Lookup(lookup.clone()),
        });
    }
    record
        .formatted_value(field)
        .filter(|text| !text.is_empty())
        .map(|text| Resolved::Text(text.to_string()))
}

/// Strips parenthetical segments and collapses repeated whitespace, so
/// `"Unit (Method) (Analytical Method)"` compares equal to `"Unit"`.
pub fn strip_parens(label: &str) -> String {
    let mut cleaned = String::with_capacity(label.len());
    let mut rest = label;
    while let Some(open) = rest.find('(') {
        match rest[open..].find(')') {
            Some(close) => {
                cleaned.push_str(&rest[..open]);
                cleaned.push(' ');
                rest = &rest[open + close + 1..];
            }
            // Unbalanced parenthesis: keep the remainder as-is.
            None => break,
        }
    }
    cleaned.push_str(rest);
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolves one label against a record: raw value, then formatted value,
/// then a normalized match against the dataset's column names retried the
/// same way under the matched column's internal key.
pub fn resolve_field(record: &Record, dataset: &RecordSet, label: &str) -> Option<Resolved> {
    if let Some(value) = raw_or_formatted(record, label) {
        return Some(value);
    }
    let normalized = strip_parens(label);
    let column = dataset.columns().iter().find(|column| {
        column.display_name == label
            || column.name == label
            || strip_parens(&column.display_name) == normalized
            || strip_parens(&column.name) == normalized
    })?;
    raw_or_formatted(record, &column.name)
}

/// First candidate label that yields a filled value wins. A filled lookup
/// reference ends the chain like any other hit.
pub fn resolve_first(record: &Record, dataset: &RecordSet, labels: &[&str]) -> Option<Resolved> {
    labels
        .iter()
        .find_map(|label| resolve_field(record, dataset, label))
}

/// Text form of the first filled value; `None` when that value is a lookup
/// reference rather than a scalar.
pub fn resolve_text(record: &Record, dataset: &RecordSet, labels: &[&str]) -> Option<String> {
    match resolve_first(record, dataset, labels)? {
        Resolved::Text(text) => Some(text),
        Resolved::Lookup(_) => None,
    }
}
