//! Library components for the sample analysis pivot CLI.

pub mod logging;
pub mod pipeline;
pub mod summary;
