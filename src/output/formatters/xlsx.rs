// src/output/formatters/xlsx.rs
use std::io::Write;

use combo_filter_engine::sink::RowSink;
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::error::{AppError, Result};

/// Worksheet name used by the spreadsheet export.
pub const SHEET_NAME: &str = "Combinations";

/// Single-sheet workbook, values starting at A1, no header row.
pub struct XlsxSink<W: Write> {
    out: W,
    sheet: Worksheet,
    next_row: u32,
}

impl<W: Write> XlsxSink<W> {
    /// # Errors
    ///
    /// Fails if the sheet name is rejected by the writer.
    pub fn new(out: W) -> Result<Self> {
        let mut sheet = Worksheet::new();
        sheet.set_name(SHEET_NAME)?;
        Ok(Self {
            out,
            sheet,
            next_row: 0,
        })
    }
}

impl<W: Write> RowSink for XlsxSink<W> {
    type Error = AppError;

    #[allow(clippy::cast_precision_loss)]
    fn write_row(&mut self, row: &[i64]) -> Result<()> {
        for (col, value) in row.iter().enumerate() {
            let col = u16::try_from(col)
                .map_err(|_| AppError::Config(format!("combination too wide for a worksheet: {} values", row.len())))?;
            // cells hold f64; values beyond 2^53 lose precision
            self.sheet.write_number(self.next_row, col, *value as f64)?;
        }
        self.next_row = self
            .next_row
            .checked_add(1)
            .ok_or_else(|| AppError::Config("too many rows for a worksheet".to_string()))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let mut workbook = Workbook::new();
        workbook.push_worksheet(std::mem::replace(&mut self.sheet, Worksheet::new()));
        let bytes = workbook.save_to_buffer()?;
        self.out.write_all(&bytes)?;
        self.out.flush()?;
        Ok(())
    }
}
