pub mod dataset;
pub mod field;
pub mod pivot;

pub use dataset::{ColumnDescriptor, Record, RecordSet};
pub use field::{FieldValue, LookupId, LookupRef};
pub use pivot::{CellValue, PivotOutcome, PivotRow, PivotTable};
