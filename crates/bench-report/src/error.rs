// File: crates/bench-report/src/error.rs
// Summary: Report error taxonomy (missing input, bad record, I/O, rendering).

use std::path::PathBuf;

use thiserror::Error;

/// Why a single non-blank line could not become a record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected 2 comma-separated fields, found {0}")]
    FieldCount(usize),

    #[error("{field} `{value}` is not an integer")]
    NotAnInteger { field: &'static str, value: String },

    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("input file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("{}:{line}: {reason}", path.display())]
    Parse {
        path: PathBuf,
        /// 1-based physical line of the offending record.
        line: u64,
        reason: RecordError,
    },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Render(#[from] bench_chart::RenderError),
}
