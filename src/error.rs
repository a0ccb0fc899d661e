//! Error type shared by every stage of an averaging run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::record::LineError;

/// Everything that can end an averaging run.
///
/// Every variant is fatal: a run either produces a summary file or fails
/// with exactly one of these.
#[derive(Error, Debug)]
pub enum AverageError {
    /// A required command-line path was not supplied.
    #[error("usage error: {0}")]
    Usage(String),

    /// The input could not be read or the output could not be written.
    #[error("I/O error for '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line did not have the five-field `label: value` shape.
    #[error("malformed record on line {line} ({source}): {text:?}")]
    Parse {
        /// 1-based line number within the input file.
        line: usize,
        text: String,
        #[source]
        source: LineError,
    },

    /// The input held no records, so no average exists.
    #[error("no records found in '{}'; averages are undefined", .path.display())]
    EmptyInput { path: PathBuf },
}

impl AverageError {
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AverageError::Io {
            path: path.into(),
            source,
        }
    }
}
