//! Terminal rendering of the pivot.
//!
//! Cell styling follows the host renderer's contract: a recorded value shows
//! `value unit` plus the expected value, a required-but-empty cell is
//! highlighted, and a method never recorded for a sample renders as a dimmed
//! `N/A`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use assay_model::{CellValue, PivotTable, RecordSet};

pub fn print_pivot(pivot: &PivotTable) {
    println!("{}", pivot_table(pivot));
}

/// Builds the sample x method table: one row per sample, one column per
/// method, every intersection filled.
pub fn pivot_table(pivot: &PivotTable) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Sample")];
    header.extend(pivot.methods.iter().map(|method| header_cell(method)));
    table.set_header(header);
    apply_table_style(&mut table);
    for row in &pivot.rows {
        let mut cells = vec![Cell::new(&row.sample_name).add_attribute(Attribute::Bold)];
        for method in &pivot.methods {
            cells.push(match row.cells.get(method) {
                Some(cell) => measurement_cell(cell),
                None => dim_cell("N/A"),
            });
        }
        table.add_row(cells);
    }
    table
}

/// Lists a dataset's column names and display names.
pub fn columns_table(dataset: &RecordSet) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Name"), header_cell("Display Name")]);
    apply_table_style(&mut table);
    for column in dataset.columns() {
        table.add_row(vec![
            Cell::new(&column.name),
            Cell::new(&column.display_name),
        ]);
    }
    table
}

/// Serializes the pivot in the wire shape the host renderer consumes.
pub fn render_json(pivot: &PivotTable) -> serde_json::Result<String> {
    serde_json::to_string_pretty(pivot)
}

fn measurement_cell(cell: &CellValue) -> Cell {
    if !cell.required {
        return dim_cell("N/A");
    }
    if cell.value.is_empty() {
        return Cell::new("pending")
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold);
    }
    let mut text = cell.value.clone();
    if !cell.unit.is_empty() {
        text = format!("{text} {}", cell.unit);
    }
    if !cell.expected.is_empty() {
        text = format!("{text} (expected {})", cell.expected);
    }
    Cell::new(text)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
