//! File-level orchestration: load two CSV exports, run the pivot engine.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use assay_core::build_pivot;
use assay_ingest::load_csv;
use assay_model::{PivotOutcome, RecordSet};

pub fn load_dataset(path: &Path) -> Result<RecordSet> {
    load_csv(path).with_context(|| format!("load {}", path.display()))
}

/// Loads both collections and builds the pivot.
///
/// A file with a header row but no records yields `PivotOutcome::NotReady`,
/// exactly like a host dataset that has not finished loading; an unreadable
/// or malformed file is an error.
pub fn pivot_files(samples: &Path, analyses: &Path) -> Result<PivotOutcome> {
    let samples = load_dataset(samples)?;
    let analyses = load_dataset(analyses)?;
    info!(
        samples = samples.len(),
        analyses = analyses.len(),
        "datasets loaded"
    );
    let outcome = build_pivot(&samples, &analyses);
    if let PivotOutcome::Ready(table) = &outcome {
        info!(
            rows = table.rows.len(),
            methods = table.methods.len(),
            "pivot built"
        );
    }
    Ok(outcome)
}
