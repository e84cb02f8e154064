//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "assay-pivot",
    version,
    about = "Pivot sample analyses into a sample x method grid",
    long_about = "Link loosely-structured analysis records to their samples and pivot\n\
                  them into one row per sample, one column per analysis method."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build and render the pivot from two CSV exports.
    Pivot(PivotArgs),

    /// List a dataset's column names and display names.
    Columns(ColumnsArgs),
}

#[derive(Parser)]
pub struct PivotArgs {
    /// CSV export of the sample collection.
    #[arg(value_name = "SAMPLES_CSV")]
    pub samples: PathBuf,

    /// CSV export of the analysis collection.
    #[arg(value_name = "ANALYSES_CSV")]
    pub analyses: PathBuf,

    /// Output rendering.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// CSV export to inspect.
    #[arg(value_name = "CSV")]
    pub dataset: PathBuf,
}

/// Pivot output renderings.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
