//! Averages per-run power-capping measurement records.
//!
//! Each input line carries five tab-separated `label: value` fields (runtime,
//! throughput, power, commits, error). The records are summed in one pass and
//! the per-field means are written as a single `Net_*` summary line.

use std::fmt;

pub mod accumulator;
pub mod error;
pub mod record;
pub mod run;
pub mod summary;

pub use accumulator::{Accumulator, EmptyInput};
pub use error::AverageError;
pub use record::{parse_line, LineError, Record};
pub use run::{run, Config};
pub use summary::{write_summary, Summary};

/// Number of measurement fields per record.
pub const FIELD_COUNT: usize = 5;

/// One measurement column, in input order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Runtime,
    Throughput,
    Power,
    Commits,
    Error,
}

impl Field {
    /// All fields in the order they appear on an input line.
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Runtime,
        Field::Throughput,
        Field::Power,
        Field::Commits,
        Field::Error,
    ];

    /// Zero-based position of the field on an input line.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase field name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Runtime => "runtime",
            Field::Throughput => "throughput",
            Field::Power => "power",
            Field::Commits => "commits",
            Field::Error => "error",
        }
    }

    /// Label used for the averaged value in the summary line.
    pub fn summary_label(&self) -> &'static str {
        match self {
            Field::Runtime => "Net_runtime",
            Field::Throughput => "Net_throughput",
            Field::Power => "Net_power",
            Field::Commits => "Net_commits",
            Field::Error => "Net_error",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
