//! Serialization seam between the engine and export formats.

use std::convert::Infallible;

use crate::enumerator::Combination;

/// Destination for surviving combinations, one row per combination.
pub trait RowSink {
    type Error;

    fn write_row(&mut self, row: &[i64]) -> Result<(), Self::Error>;

    /// Called once after the last row.
    fn finish(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl RowSink for Vec<Combination> {
    type Error = Infallible;

    fn write_row(&mut self, row: &[i64]) -> Result<(), Self::Error> {
        self.push(row.to_vec());
        Ok(())
    }
}

impl<S: RowSink + ?Sized> RowSink for &mut S {
    type Error = S::Error;

    fn write_row(&mut self, row: &[i64]) -> Result<(), Self::Error> {
        (**self).write_row(row)
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        (**self).finish()
    }
}

/// Writes every row to `sink` and finishes it.
pub fn write_rows<S, R>(sink: &mut S, rows: &[R]) -> Result<(), S::Error>
where
    S: RowSink + ?Sized,
    R: AsRef<[i64]>,
{
    for row in rows {
        sink.write_row(row.as_ref())?;
    }
    sink.finish()
}
