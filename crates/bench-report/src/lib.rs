// File: crates/bench-report/src/lib.rs
// Summary: Library side of the report binary: timing datasets, configuration and chart assembly.

pub mod config;
pub mod dataset;
pub mod error;
pub mod report;

pub use config::Config;
pub use dataset::{BenchResults, Operation, Record, Series};
pub use error::{RecordError, ReportError};
pub use report::{build_chart, run};
