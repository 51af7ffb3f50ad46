use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// RecordError – why a single line could not be turned into a sample
// ---------------------------------------------------------------------------

/// Failure of the record parser on one line, without file context.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("expected {expected} comma-separated fields, got {found}")]
    FieldCount { found: usize, expected: usize },

    #[error("failed to parse floats for sample '{name}': field {field} ({text:?}): {error}")]
    InvalidNumber {
        name: String,
        /// 1-based coordinate position.
        field: usize,
        text: String,
        error: ParseFloatError,
    },
}

// ---------------------------------------------------------------------------
// G25Error – everything that can abort a run
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum G25Error {
    /// Malformed line: wrong field count or non-numeric coordinate.
    #[error("{}:{line_no}: {reason}\nLine: {line}", .path.display())]
    Format {
        path: PathBuf,
        line_no: usize,
        line: String,
        reason: RecordError,
    },

    /// A coordinate parsed but is infinite or NaN.
    #[error(
        "{}:{line_no}: non-finite value {value} at coordinate {index} in vector for '{name}'",
        .path.display()
    )]
    Validation {
        path: PathBuf,
        line_no: usize,
        name: String,
        /// 1-based coordinate position.
        index: usize,
        value: f64,
    },

    #[error("vector has {found} dims, expected {expected}")]
    Dimension { found: usize, expected: usize },

    #[error("no vectors to average")]
    EmptyInput,

    #[error("no valid samples found in {}", .path.display())]
    NoSamples { path: PathBuf },

    #[error("reading {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, G25Error>;
