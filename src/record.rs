//! Parsing of a single measurement line.
//!
//! A line looks like
//!
//! ```text
//! Runtime: 10.0<TAB>Throughput: 100.0<TAB>Power: 5.0<TAB>Commits: 2.0<TAB>Error: 0.0
//! ```
//!
//! Fields are separated by runs of one or more tabs. Only the position of a
//! field matters; the label before the colon is not checked. Anything after
//! the fifth field is ignored.

use thiserror::Error;

use crate::{Field, FIELD_COUNT};

/// Why a line could not be turned into a [`Record`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineError {
    #[error("expected {expected} tab-separated fields, found {found}")]
    MissingField { expected: usize, found: usize },

    #[error("{field} field has no ':' separator")]
    MissingColon { field: Field },

    #[error("{field} value {value:?} is not a number")]
    InvalidNumber { field: Field, value: String },
}

/// The five measurements of one run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Record {
    pub runtime: f64,
    pub throughput: f64,
    pub power: f64,
    pub commits: f64,
    pub error: f64,
}

impl Record {
    /// Build a record from values in [`Field::ALL`] order.
    pub fn from_values(values: [f64; FIELD_COUNT]) -> Self {
        let [runtime, throughput, power, commits, error] = values;
        Self {
            runtime,
            throughput,
            power,
            commits,
            error,
        }
    }

    /// Values in [`Field::ALL`] order.
    pub fn values(&self) -> [f64; FIELD_COUNT] {
        [
            self.runtime,
            self.throughput,
            self.power,
            self.commits,
            self.error,
        ]
    }

    /// Value of a single field.
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Runtime => self.runtime,
            Field::Throughput => self.throughput,
            Field::Power => self.power,
            Field::Commits => self.commits,
            Field::Error => self.error,
        }
    }
}

/// Parse one input line into a [`Record`].
///
/// A trailing `\n` or `\r\n` is tolerated, as is whitespace around each
/// value.
pub fn parse_line(line: &str) -> Result<Record, LineError> {
    let line = line.trim_end_matches(|c| c == '\n' || c == '\r');
    let mut fields = split_tab_runs(line);

    let mut values = [0.0; FIELD_COUNT];
    for (found, field) in Field::ALL.into_iter().enumerate() {
        let raw = fields.next().ok_or(LineError::MissingField {
            expected: FIELD_COUNT,
            found,
        })?;
        values[field.index()] = parse_value(field, raw)?;
    }

    Ok(Record::from_values(values))
}

/// Split on runs of tabs. A leading tab still yields an empty first field.
fn split_tab_runs(line: &str) -> impl Iterator<Item = &str> {
    line.split('\t')
        .enumerate()
        .filter(|(i, part)| *i == 0 || !part.is_empty())
        .map(|(_, part)| part)
}

fn parse_value(field: Field, raw: &str) -> Result<f64, LineError> {
    let (_label, value) = raw
        .split_once(':')
        .ok_or(LineError::MissingColon { field })?;
    let value = value.trim();
    value.parse::<f64>().map_err(|_| LineError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
