//! The pivot engine: a single synchronous pass over the analysis collection.

use assay_model::{CellValue, FieldValue, PivotOutcome, Record, RecordSet};
use tracing::{debug, trace};

use crate::aggregate::PivotAggregator;
use crate::fields::resolve_text;
use crate::index::SampleIndex;
use crate::linker::{self, SampleLink};

/// Lookup-reference field naming the analysis method.
pub const METHOD_REF_FIELD: &str = "cr2b6_method";
/// Label for analyses whose method could not be resolved.
pub const UNKNOWN_METHOD: &str = "Unknown Method";

const METHOD_LABELS: [&str; 3] = ["Method", "cr2b6_method", "cr2b6_methodname"];
const VALUE_LABELS: [&str; 2] = ["Value", "cr2b6_value"];
const ANALYSIS_ID_LABELS: [&str; 2] = ["cr2b6_id", "ID"];
const EXPECTED_LABELS: [&str; 2] = ["Expected Value", "cr2b6_expectedvalue"];
const UNIT_LABELS: [&str; 2] = ["Unit", "Unit (Method) (Analytical Method)"];

/// Builds the sample x method pivot from the two input collections.
///
/// Returns [`PivotOutcome::NotReady`] when either collection has no records
/// yet; that is the only short-circuit. Otherwise the output is total: one
/// row per resolved sample key, one cell per (row, method) intersection.
/// Inputs are borrowed immutably and never modified; every invocation builds
/// fresh accumulator state.
pub fn build_pivot(samples: &RecordSet, analyses: &RecordSet) -> PivotOutcome {
    if samples.is_empty() || analyses.is_empty() {
        debug!(
            samples = samples.len(),
            analyses = analyses.len(),
            "inputs not ready"
        );
        return PivotOutcome::NotReady;
    }

    let index = SampleIndex::build(samples);
    let permissive = !index.has_name_map();
    if permissive {
        debug!("no sample names resolved; accepting all analysis records");
    }

    let mut aggregator = PivotAggregator::new();
    let mut skipped = 0usize;
    for (row_key, record) in analyses.iter() {
        let link = match linker::link_sample(record, &index, analyses, samples) {
            Some(link) => link,
            None if permissive => SampleLink {
                name: linker::UNKNOWN_NAME.to_string(),
                key: linker::UNKNOWN_KEY.to_string(),
            },
            None => {
                trace!(record = row_key, "no linkage strategy matched; skipped");
                skipped += 1;
                continue;
            }
        };

        let method = resolve_method(record, analyses);
        let cell = extract_cell(record, analyses);

        // Rows deduplicate on the identifier when one was resolved, else on
        // the name; the guid column always carries the resolved identifier.
        let dedupe_key = if link.key != linker::UNKNOWN_KEY {
            link.key.as_str()
        } else {
            link.name.as_str()
        };
        aggregator.add(dedupe_key, &link.name, &link.key, &method, cell);
    }

    if skipped > 0 {
        debug!(skipped, "analysis records without sample linkage dropped");
    }
    PivotOutcome::Ready(aggregator.build(permissive))
}

fn resolve_method(record: &Record, analyses: &RecordSet) -> String {
    if let Some(FieldValue::Lookup(reference)) = record.value(METHOD_REF_FIELD)
        && let Some(name) = &reference.name
    {
        return name.clone();
    }
    resolve_text(record, analyses, &METHOD_LABELS).unwrap_or_else(|| UNKNOWN_METHOD.to_string())
}

fn extract_cell(record: &Record, analyses: &RecordSet) -> CellValue {
    CellValue {
        analysis_id: resolve_text(record, analyses, &ANALYSIS_ID_LABELS).unwrap_or_default(),
        value: resolve_text(record, analyses, &VALUE_LABELS).unwrap_or_default(),
        unit: resolve_text(record, analyses, &UNIT_LABELS).unwrap_or_default(),
        expected: resolve_text(record, analyses, &EXPECTED_LABELS).unwrap_or_default(),
        required: true,
    }
}
