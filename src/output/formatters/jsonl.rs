// src/output/formatters/jsonl.rs
use std::io::Write;

use combo_filter_engine::sink::RowSink;

use crate::error::{AppError, Result};

/// One JSON array per line.
pub struct JsonlSink<W: Write> {
    out: W,
}

impl<W: Write> JsonlSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> RowSink for JsonlSink<W> {
    type Error = AppError;

    fn write_row(&mut self, row: &[i64]) -> Result<()> {
        serde_json::to_writer(&mut self.out, row)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
