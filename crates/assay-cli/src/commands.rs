use anyhow::{Context, Result};
use tracing::warn;

use assay_model::PivotOutcome;

use crate::cli::{ColumnsArgs, OutputArg, PivotArgs};
use assay_cli::pipeline::{load_dataset, pivot_files};
use assay_cli::summary::{columns_table, print_pivot, render_json};

/// Outcome of the `pivot` command, mapped to an exit code by `main`.
pub enum PivotStatus {
    /// A pivot was rendered.
    Ready,
    /// Inputs were complete but produced zero rows.
    Empty,
    /// One or both inputs carried no records yet.
    NotReady,
}

pub fn run_pivot(args: &PivotArgs) -> Result<PivotStatus> {
    match pivot_files(&args.samples, &args.analyses)? {
        PivotOutcome::NotReady => {
            println!("waiting for data: both inputs need at least one record");
            Ok(PivotStatus::NotReady)
        }
        PivotOutcome::Ready(table) if table.rows.is_empty() => {
            println!("no analysis records could be linked to a sample");
            Ok(PivotStatus::Empty)
        }
        PivotOutcome::Ready(table) => {
            if table.low_confidence {
                warn!("no sample names available; linkage ran permissively");
            }
            match args.output {
                OutputArg::Table => print_pivot(&table),
                OutputArg::Json => {
                    println!("{}", render_json(&table).context("serialize pivot")?);
                }
            }
            Ok(PivotStatus::Ready)
        }
    }
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let dataset = load_dataset(&args.dataset)?;
    println!("{}", columns_table(&dataset));
    Ok(())
}
