//! Running per-field sums and the final mean.

use thiserror::Error;

use crate::record::Record;
use crate::summary::Summary;
use crate::FIELD_COUNT;

/// Returned by [`Accumulator::finalize`] when no record was added.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cannot average zero records")]
pub struct EmptyInput;

/// Five running sums plus the number of records folded into them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Accumulator {
    sums: [f64; FIELD_COUNT],
    count: u64,
}

impl Accumulator {
    /// An empty accumulator: zero sums, zero records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add each field of `record` to its sum and count one more record.
    pub fn add(&mut self, record: &Record) {
        for (sum, value) in self.sums.iter_mut().zip(record.values()) {
            *sum += value;
        }
        self.count += 1;
    }

    /// Fold another accumulator into this one.
    ///
    /// Merging the accumulators of two inputs yields the same totals as
    /// accumulating their concatenation.
    pub fn merge(&mut self, other: &Accumulator) {
        for (sum, value) in self.sums.iter_mut().zip(other.sums) {
            *sum += value;
        }
        self.count += other.count;
    }

    /// Number of records added so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// True until the first record is added.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Running totals in [`Field::ALL`](crate::Field::ALL) order.
    pub fn sums(&self) -> Record {
        Record::from_values(self.sums)
    }

    /// Divide every sum by the record count.
    pub fn finalize(&self) -> Result<Summary, EmptyInput> {
        if self.is_empty() {
            return Err(EmptyInput);
        }
        let n = self.count as f64;
        let averages = self.sums.map(|sum| sum / n);
        Ok(Summary::new(Record::from_values(averages), self.count))
    }
}

impl<'a> Extend<&'a Record> for Accumulator {
    fn extend<I: IntoIterator<Item = &'a Record>>(&mut self, iter: I) {
        for record in iter {
            self.add(record);
        }
    }
}

impl<'a> FromIterator<&'a Record> for Accumulator {
    fn from_iter<I: IntoIterator<Item = &'a Record>>(iter: I) -> Self {
        let mut acc = Accumulator::new();
        acc.extend(iter);
        acc
    }
}
