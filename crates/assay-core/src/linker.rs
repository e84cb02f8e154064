//! Sample linkage for analysis records.
//!
//! The two sources represent the analysis -> sample relationship
//! differently: production records carry a typed lookup reference, imports
//! carry a plain name or a raw identifier column, and degraded data may only
//! mention the sample inside free text. Linkage runs an ordered ladder of
//! independent strategies; the first that yields a non-empty sample name
//! wins.

use assay_model::{FieldValue, Record, RecordSet};
use tracing::trace;

use crate::fields::{Resolved, resolve_first, resolve_text};
use crate::index::SampleIndex;

/// Lookup-reference field tying an analysis to its sample.
pub const SAMPLE_REF_FIELD: &str = "cr2b6_sample";
/// Direct sample-name labels on an analysis record.
pub const DIRECT_NAME_LABELS: [&str; 4] = ["Sample", "cr2b6_samplename", "sampleName", "Name"];
/// Raw sample-identifier labels on an analysis record.
pub const SAMPLE_ID_LABELS: [&str; 2] = ["cr2b6_sampleid", "sampleId"];

const CROSS_ID_LABELS: [&str; 2] = ["sampleId", "ID"];
const CROSS_NAME_LABELS: [&str; 4] = ["sampleName", "ID", "cr2b6_id", "Name"];
const REF_NAME_LABELS: [&str; 3] = ["cr2b6_id", "ID", "Name"];
const ANALYSIS_ID_LABELS: [&str; 2] = ["cr2b6_id", "ID"];
const NOTES_LABELS: [&str; 2] = ["cr2b6_notes", "Notes"];

/// Shared identity for records no strategy could link.
pub const UNKNOWN_NAME: &str = "Unknown Sample";
pub const UNKNOWN_KEY: &str = "Unknown";

/// Identity resolved for one analysis record: the sample's display name and
/// the identifier used to deduplicate pivot rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleLink {
    pub name: String,
    pub key: String,
}

/// Runs the strategy ladder. `None` means every strategy was exhausted; the
/// caller decides whether the record falls into the Unknown bucket or is
/// dropped (see the engine's acceptance gate).
pub fn link_sample(
    record: &Record,
    index: &SampleIndex,
    analyses: &RecordSet,
    samples: &RecordSet,
) -> Option<SampleLink> {
    let link = direct_reference(record)
        .or_else(|| direct_name(record, analyses, index))
        .or_else(|| id_cross_lookup(record, analyses, samples))
        .or_else(|| formatted_reference(record, analyses, samples, index))
        .or_else(|| pattern_fallback(record, analyses, index));
    if let Some(link) = &link {
        trace!(sample = %link.name, key = %link.key, "linked analysis record");
    }
    link
}

/// Typed lookup reference carrying an identifier. The reference's display
/// name is taken as-is; a nameless reference still links by id.
fn direct_reference(record: &Record) -> Option<SampleLink> {
    let Some(FieldValue::Lookup(reference)) = record.value(SAMPLE_REF_FIELD) else {
        return None;
    };
    let id = reference.id.as_ref()?;
    let name = reference
        .name
        .clone()
        .unwrap_or_else(|| UNKNOWN_NAME.to_string());
    Some(SampleLink {
        name,
        key: id.as_str().to_string(),
    })
}

/// Plain name field. Import data has no identifier scheme at all, so when
/// the name map cannot supply an id the name itself becomes the key.
fn direct_name(record: &Record, analyses: &RecordSet, index: &SampleIndex) -> Option<SampleLink> {
    let name = resolve_text(record, analyses, &DIRECT_NAME_LABELS)?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let key = index
        .id_for(name)
        .map_or_else(|| name.to_string(), str::to_string);
    Some(SampleLink {
        name: name.to_string(),
        key,
    })
}

/// Raw identifier column cross-referenced against each sample's own
/// identifier field.
fn id_cross_lookup(
    record: &Record,
    analyses: &RecordSet,
    samples: &RecordSet,
) -> Option<SampleLink> {
    let raw_id = resolve_text(record, analyses, &SAMPLE_ID_LABELS)?;
    let (_, sample) = samples.iter().find(|(_, sample)| {
        resolve_text(sample, samples, &CROSS_ID_LABELS).as_deref() == Some(raw_id.as_str())
    })?;
    let name = resolve_text(sample, samples, &CROSS_NAME_LABELS)?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(SampleLink {
        name: name.to_string(),
        key: raw_id,
    })
}

/// Display-formatted reference of the shape `"<name> (<guid>)"`. The
/// parenthesized token (or the whole string when no such token exists) must
/// be a known sample id; the name is re-resolved from the sample record
/// rather than trusted from the formatted string.
fn formatted_reference(
    record: &Record,
    analyses: &RecordSet,
    samples: &RecordSet,
    index: &SampleIndex,
) -> Option<SampleLink> {
    let formatted = match resolve_first(record, analyses, &[SAMPLE_REF_FIELD])? {
        Resolved::Text(text) => text,
        Resolved::Lookup(_) => return None,
    };
    let candidate = trailing_parenthetical(&formatted).unwrap_or(formatted.as_str());
    if !index.contains_id(candidate) {
        return None;
    }
    let sample = find_by_id(samples, candidate)?;
    let name = resolve_text(sample, samples, &REF_NAME_LABELS)?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(SampleLink {
        name: name.to_string(),
        key: candidate.to_string(),
    })
}

/// Last resort: the first indexed sample whose name appears inside the
/// record's notes or its own id. Permissive by design and quadratic in the
/// worst case; only reached when every identifier scheme failed.
fn pattern_fallback(
    record: &Record,
    analyses: &RecordSet,
    index: &SampleIndex,
) -> Option<SampleLink> {
    if !index.has_name_map() {
        return None;
    }
    let analysis_id = resolve_text(record, analyses, &ANALYSIS_ID_LABELS).unwrap_or_default();
    let notes = resolve_text(record, analyses, &NOTES_LABELS).unwrap_or_default();
    if analysis_id.is_empty() && notes.is_empty() {
        return None;
    }
    index
        .names()
        .find(|&(name, _)| notes.contains(name) || analysis_id.contains(name))
        .map(|(name, id)| SampleLink {
            name: name.to_string(),
            key: id.to_string(),
        })
}

/// Extracts the trailing `"(...)"` token of a formatted reference.
fn trailing_parenthetical(text: &str) -> Option<&str> {
    let inner = text.strip_suffix(')')?;
    let open = inner.rfind('(')?;
    let token = &inner[open + 1..];
    if token.is_empty() { None } else { Some(token) }
}

fn find_by_id<'a>(samples: &'a RecordSet, id: &str) -> Option<&'a Record> {
    if let Some(record) = samples.record(id) {
        return Some(record);
    }
    samples
        .iter()
        .map(|(_, record)| record)
        .find(|record| record.record_id() == id)
}
