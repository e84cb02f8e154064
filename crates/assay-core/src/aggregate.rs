//! Pivot accumulation and materialization.

use std::collections::{BTreeMap, BTreeSet};

use assay_model::{CellValue, PivotRow, PivotTable};

#[derive(Debug, Clone)]
struct RowEntry {
    key: String,
    name: String,
    guid: String,
    cells: BTreeMap<String, CellValue>,
}

/// Accumulates linked analysis cells into per-sample, per-method slots.
///
/// Row identity is first-seen (the name and guid recorded when a sample key
/// first appears are kept), cell content is last-seen (a duplicate
/// (sample, method) pair overwrites the earlier cell). Rows and methods both
/// preserve first-appearance order. Owned by a single engine invocation and
/// discarded with it.
#[derive(Debug, Default)]
pub struct PivotAggregator {
    rows: Vec<RowEntry>,
    row_index: BTreeMap<String, usize>,
    methods: Vec<String>,
    method_set: BTreeSet<String>,
}

impl PivotAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str, name: &str, guid: &str, method: &str, cell: CellValue) {
        let index = match self.row_index.get(key) {
            Some(&index) => index,
            None => {
                self.rows.push(RowEntry {
                    key: key.to_string(),
                    name: name.to_string(),
                    guid: guid.to_string(),
                    cells: BTreeMap::new(),
                });
                self.row_index.insert(key.to_string(), self.rows.len() - 1);
                self.rows.len() - 1
            }
        };
        self.rows[index].cells.insert(method.to_string(), cell);
        if self.method_set.insert(method.to_string()) {
            self.methods.push(method.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Materializes the dense sample x method grid. Every missing
    /// intersection gets the placeholder cell, so each row carries exactly
    /// one entry per method.
    pub fn build(self, low_confidence: bool) -> PivotTable {
        let methods = self.methods;
        let rows = self
            .rows
            .into_iter()
            .map(|mut entry| {
                let cells = methods
                    .iter()
                    .map(|method| {
                        let cell = entry
                            .cells
                            .remove(method)
                            .unwrap_or_else(CellValue::placeholder);
                        (method.clone(), cell)
                    })
                    .collect();
                PivotRow {
                    sample_id: entry.key,
                    sample_name: entry.name,
                    sample_guid: entry.guid,
                    cells,
                }
            })
            .collect();
        PivotTable {
            rows,
            methods,
            low_confidence,
        }
    }
}
