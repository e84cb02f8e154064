//! CSV export loading.
//!
//! Import data carries plain display strings only: every header doubles as
//! internal field key and display name, and every cell is ingested as text.
//! Generated record ids double as row keys, so downstream identity
//! resolution treats these rows the same way the host treats test data.

use std::path::Path;

use csv::ReaderBuilder;
use thiserror::Error;
use tracing::debug;

use assay_model::{ColumnDescriptor, Record, RecordSet};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("{0}: header row is empty")]
    EmptyHeader(String),
}

pub type Result<T> = std::result::Result<T, IngestError>;

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Loads a delimited export as a record set.
///
/// Rows shorter than the header row are padded with empty cells rather than
/// rejected; exports from spreadsheets are routinely ragged.
pub fn load_csv(path: &Path) -> Result<RecordSet> {
    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyHeader(path.display().to_string()));
    }

    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("row");
    let columns = headers
        .iter()
        .map(|header| ColumnDescriptor::new(header.clone(), header.clone()))
        .collect();
    let mut dataset = RecordSet::new(columns);

    for (row_number, row) in reader.records().enumerate() {
        let row = row?;
        let record_id = format!("{stem}-{}", row_number + 1);
        let mut record = Record::new(record_id.clone());
        for (column, header) in headers.iter().enumerate() {
            let cell = row.get(column).map(normalize_cell).unwrap_or_default();
            record = record.with_text(header.clone(), cell);
        }
        dataset.insert(record_id, record);
    }

    debug!(path = %path.display(), records = dataset.len(), "loaded csv dataset");
    Ok(dataset)
}
