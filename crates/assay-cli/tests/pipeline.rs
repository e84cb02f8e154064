//! End-to-end tests over CSV fixtures.

use std::fs;
use std::path::PathBuf;

use assay_cli::pipeline::pivot_files;
use assay_cli::summary::{pivot_table, render_json};
use assay_model::{PivotOutcome, PivotTable};

fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn ready(outcome: PivotOutcome) -> PivotTable {
    match outcome {
        PivotOutcome::Ready(table) => table,
        PivotOutcome::NotReady => panic!("expected a ready pivot"),
    }
}

#[test]
fn csv_exports_pivot_end_to_end() {
    let dir = tempfile::tempdir().expect("tempdir");
    let samples = write_fixture(&dir, "samples.csv", "Name\nSample A\nSample B\n");
    let analyses = write_fixture(
        &dir,
        "analyses.csv",
        "Sample,Method,Value,Expected Value,Unit\n\
         Sample A,pH,7.2,7.0,\n\
         Sample B,Conductivity,1.4,,mS/cm\n\
         Sample A,Conductivity,1.1,,mS/cm\n",
    );

    let table = ready(pivot_files(&samples, &analyses).expect("pivot"));
    assert_eq!(table.methods, vec!["pH", "Conductivity"]);
    assert_eq!(table.rows.len(), 2);

    let row_a = &table.rows[0];
    assert_eq!(row_a.sample_name, "Sample A");
    // CSV rows link by name; the generated sample record id becomes the key.
    assert_eq!(row_a.sample_id, "samples-1");
    assert_eq!(row_a.cells["pH"].value, "7.2");
    assert_eq!(row_a.cells["pH"].expected, "7.0");
    assert_eq!(row_a.cells["Conductivity"].unit, "mS/cm");

    let row_b = &table.rows[1];
    assert!(!row_b.cells["pH"].required);
    assert_eq!(row_b.cells["pH"].value, "");
}

#[test]
fn header_only_analyses_report_not_ready() {
    let dir = tempfile::tempdir().expect("tempdir");
    let samples = write_fixture(&dir, "samples.csv", "Name\nSample A\n");
    let analyses = write_fixture(&dir, "analyses.csv", "Sample,Method,Value\n");

    let outcome = pivot_files(&samples, &analyses).expect("pivot");
    assert_eq!(outcome, PivotOutcome::NotReady);
}

#[test]
fn missing_file_is_an_error_not_a_readiness_state() {
    let dir = tempfile::tempdir().expect("tempdir");
    let samples = write_fixture(&dir, "samples.csv", "Name\nSample A\n");
    let missing = dir.path().join("absent.csv");

    assert!(pivot_files(&samples, &missing).is_err());
}

#[test]
fn json_rendering_uses_the_host_wire_shape() {
    let dir = tempfile::tempdir().expect("tempdir");
    let samples = write_fixture(&dir, "samples.csv", "Name\nSample A\n");
    let analyses = write_fixture(
        &dir,
        "analyses.csv",
        "Sample,Method,Value,Expected Value\nSample A,pH,7.2,7.0\n",
    );

    let table = ready(pivot_files(&samples, &analyses).expect("pivot"));
    let json: serde_json::Value =
        serde_json::from_str(&render_json(&table).expect("render json")).expect("parse json");

    assert_eq!(json["methods"][0], "pH");
    assert_eq!(json["lowConfidence"], false);
    let row = &json["rows"][0];
    assert_eq!(row["sampleName"], "Sample A");
    assert_eq!(row["pH"]["value"], "7.2");
    assert_eq!(row["pH"]["analysisId"], "");
    assert_eq!(row["pH"]["required"], true);
}

#[test]
fn table_rendering_marks_absent_methods() {
    let dir = tempfile::tempdir().expect("tempdir");
    let samples = write_fixture(&dir, "samples.csv", "Name\nSample A\nSample B\n");
    let analyses = write_fixture(
        &dir,
        "analyses.csv",
        "Sample,Method,Value,Expected Value,Unit\n\
         Sample A,pH,7.2,7.0,\n\
         Sample B,Conductivity,1.4,,mS/cm\n",
    );

    let table = ready(pivot_files(&samples, &analyses).expect("pivot"));
    let rendered = pivot_table(&table).to_string();
    assert!(rendered.contains("Sample A"));
    assert!(rendered.contains("7.2 (expected 7.0)"));
    assert!(rendered.contains("1.4 mS/cm"));
    assert!(rendered.contains("N/A"));
}
