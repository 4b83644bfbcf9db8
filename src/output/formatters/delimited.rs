// src/output/formatters/delimited.rs
use std::io::Write;

use combo_filter_engine::sink::RowSink;

use crate::error::{AppError, Result};

/// CSV/TSV rows: one line per combination, no header row.
pub struct DelimitedSink<W: Write> {
    out: W,
    sep: char,
}

impl<W: Write> DelimitedSink<W> {
    pub fn new(out: W, sep: char) -> Self {
        Self { out, sep }
    }

    pub fn csv(out: W) -> Self {
        Self::new(out, ',')
    }

    pub fn tsv(out: W) -> Self {
        Self::new(out, '\t')
    }
}

impl<W: Write> RowSink for DelimitedSink<W> {
    type Error = AppError;

    fn write_row(&mut self, row: &[i64]) -> Result<()> {
        let mut first = true;
        for value in row {
            if !first {
                write!(self.out, "{}", self.sep)?;
            }
            write!(self.out, "{value}")?;
            first = false;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
