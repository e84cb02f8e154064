pub mod csv_table;

pub use csv_table::{IngestError, Result, load_csv};
