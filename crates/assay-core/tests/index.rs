use assay_core::SampleIndex;
use assay_model::{ColumnDescriptor, Record, RecordSet};

fn name_columns() -> Vec<ColumnDescriptor> {
    vec![ColumnDescriptor::new("Name", "Name")]
}

#[test]
fn row_key_is_the_id_when_record_reports_the_same() {
    let mut samples = RecordSet::new(name_columns());
    samples.insert("r1", Record::new("r1").with_text("Name", "Sample A"));
    let index = SampleIndex::build(&samples);
    assert!(index.contains_id("r1"));
    assert_eq!(index.id_for("Sample A"), Some("r1"));
}

#[test]
fn record_id_takes_precedence_over_row_key() {
    let mut samples = RecordSet::new(name_columns());
    samples.insert("row-1", Record::new("guid-1").with_text("Name", "Sample A"));
    let index = SampleIndex::build(&samples);
    assert!(index.contains_id("guid-1"));
    assert!(!index.contains_id("row-1"));
    assert_eq!(index.id_for("Sample A"), Some("guid-1"));
}

#[test]
fn unnamed_samples_keep_their_id_but_skip_the_name_map() {
    let mut samples = RecordSet::new(name_columns());
    samples.insert("r1", Record::new("r1").with_text("Name", "  "));
    samples.insert("r2", Record::new("r2").with_text("Name", "Sample B"));
    let index = SampleIndex::build(&samples);
    assert!(index.contains_id("r1"));
    assert!(index.has_name_map());
    assert_eq!(index.names().count(), 1);
    assert_eq!(index.id_for("Sample B"), Some("r2"));
}

#[test]
fn duplicate_name_keeps_scan_position_and_takes_newer_id() {
    let mut samples = RecordSet::new(name_columns());
    samples.insert("r1", Record::new("r1").with_text("Name", "Sample A"));
    samples.insert("r2", Record::new("r2").with_text("Name", "Sample B"));
    samples.insert("r3", Record::new("r3").with_text("Name", "Sample A"));
    let index = SampleIndex::build(&samples);
    let pairs: Vec<(&str, &str)> = index.names().collect();
    assert_eq!(pairs, vec![("Sample A", "r3"), ("Sample B", "r2")]);
}

#[test]
fn name_resolves_through_the_candidate_ladder() {
    // No "Name" field at all; "ID" is the second candidate.
    let mut samples = RecordSet::new(vec![ColumnDescriptor::new("ID", "ID")]);
    samples.insert("r1", Record::new("r1").with_text("ID", "Sample C"));
    let index = SampleIndex::build(&samples);
    assert_eq!(index.id_for("Sample C"), Some("r1"));
}

#[test]
fn no_resolvable_names_means_no_name_map() {
    let mut samples = RecordSet::new(vec![ColumnDescriptor::new("Code", "Code")]);
    samples.insert("r1", Record::new("r1").with_text("Code", "X-1"));
    let index = SampleIndex::build(&samples);
    assert!(!index.has_name_map());
    assert!(index.contains_id("r1"));
}
