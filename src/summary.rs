//! The averaged summary and its one-line text form.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::AverageError;
use crate::record::Record;
use crate::Field;

/// Per-field means over `records` input lines.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    averages: Record,
    records: u64,
}

impl Summary {
    pub fn new(averages: Record, records: u64) -> Self {
        Self { averages, records }
    }

    pub fn averages(&self) -> &Record {
        &self.averages
    }

    pub fn get(&self, field: Field) -> f64 {
        self.averages.get(field)
    }

    /// Number of records the averages were computed from.
    pub fn records(&self) -> u64 {
        self.records
    }

    /// The summary line, without a trailing newline.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Values use the shortest text that parses back to the same `f64`, so
/// integral values keep a `.0` suffix (`15.0`, not `15`).
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in Field::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str("\t")?;
            }
            write!(f, "{}: {:?}", field.summary_label(), self.get(*field))?;
        }
        Ok(())
    }
}

/// Create or truncate `path` and write the summary line to it.
pub fn write_summary<P: AsRef<Path>>(path: P, summary: &Summary) -> Result<(), AverageError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| AverageError::io_error(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(summary.render().as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| AverageError::io_error(path, e))
}
