use assay_core::fields::{Resolved, resolve_first, resolve_text};
use assay_model::{ColumnDescriptor, LookupId, LookupRef, Record, RecordSet};

fn dataset(columns: &[(&str, &str)]) -> RecordSet {
    RecordSet::new(
        columns
            .iter()
            .map(|(name, display)| ColumnDescriptor::new(*name, *display))
            .collect(),
    )
}

#[test]
fn raw_value_wins_over_formatted() {
    let record = Record::new("r1")
        .with_text("Unit", "mg")
        .with_formatted("Unit", "milligrams");
    let value = resolve_text(&record, &dataset(&[]), &["Unit"]);
    assert_eq!(value.as_deref(), Some("mg"));
}

#[test]
fn empty_raw_falls_back_to_formatted() {
    let record = Record::new("r1")
        .with_text("Unit", "")
        .with_formatted("Unit", "mg");
    let value = resolve_text(&record, &dataset(&[]), &["Unit"]);
    assert_eq!(value.as_deref(), Some("mg"));
}

#[test]
fn label_order_is_respected() {
    let record = Record::new("r1")
        .with_text("Value", "first")
        .with_text("cr2b6_value", "second");
    let value = resolve_text(&record, &dataset(&[]), &["Value", "cr2b6_value"]);
    assert_eq!(value.as_deref(), Some("first"));

    let record = Record::new("r2").with_text("cr2b6_value", "second");
    let value = resolve_text(&record, &dataset(&[]), &["Value", "cr2b6_value"]);
    assert_eq!(value.as_deref(), Some("second"));
}

#[test]
fn parenthetical_label_matches_column_by_normalized_name() {
    let columns = dataset(&[("cr2b6_unit", "Unit")]);
    let record = Record::new("r1").with_text("cr2b6_unit", "mg/L");
    let value = resolve_text(&record, &columns, &["Unit (Method) (Analytical Method)"]);
    assert_eq!(value.as_deref(), Some("mg/L"));
}

#[test]
fn aliased_column_matches_plain_label_by_display_name() {
    let columns = dataset(&[("a_linked.cr2b6_unit", "Unit (Method) (Analytical Method)")]);
    let record = Record::new("r1").with_text("a_linked.cr2b6_unit", "mS/cm");
    let value = resolve_text(&record, &columns, &["Unit"]);
    assert_eq!(value.as_deref(), Some("mS/cm"));
}

#[test]
fn filled_lookup_ends_the_label_chain() {
    let record = Record::new("r1")
        .with_lookup(
            "Sample",
            LookupRef::new("Sample A", LookupId::Plain("S1".to_string())),
        )
        .with_text("Name", "fallback");
    // The lookup is a hit for the first label, so the chain stops there and
    // text resolution reports nothing rather than moving on to "Name".
    assert_eq!(resolve_text(&record, &dataset(&[]), &["Sample", "Name"]), None);
    match resolve_first(&record, &dataset(&[]), &["Sample", "Name"]) {
        Some(Resolved::Lookup(reference)) => {
            assert_eq!(reference.name.as_deref(), Some("Sample A"));
        }
        other => panic!("expected lookup, got {other:?}"),
    }
}

#[test]
fn number_zero_is_a_value() {
    let record = Record::new("r1").with_number("Value", 0.0);
    let value = resolve_text(&record, &dataset(&[]), &["Value"]);
    assert_eq!(value.as_deref(), Some("0"));
}

#[test]
fn unresolvable_field_is_absent_not_an_error() {
    let record = Record::new("r1");
    assert_eq!(resolve_text(&record, &dataset(&[]), &["Anything"]), None);
}
