// src/output/formatters/table.rs
use std::io::Write;

use combo_filter_engine::sink::RowSink;
use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL};

use crate::error::{AppError, Result};

/// Boxed terminal table, rendered once every row is known.
pub struct TableSink<W: Write> {
    out: W,
    table: Table,
    rows: usize,
}

impl<W: Write> TableSink<W> {
    pub fn new(out: W, width: usize) -> Self {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        let header: Vec<Cell> = std::iter::once(Cell::new("no."))
            .chain((1..=width).map(|position| Cell::new(format!("#{position}"))))
            .collect();
        table.set_header(header);
        Self { out, table, rows: 0 }
    }
}

impl<W: Write> RowSink for TableSink<W> {
    type Error = AppError;

    fn write_row(&mut self, row: &[i64]) -> Result<()> {
        self.rows += 1;
        let cells: Vec<Cell> = std::iter::once(Cell::new(self.rows))
            .chain(row.iter().map(|value| Cell::new(value).set_alignment(CellAlignment::Right)))
            .collect();
        self.table.add_row(cells);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.out, "{}", self.table)?;
        writeln!(self.out, "{} combinations", self.rows)?;
        self.out.flush()?;
        Ok(())
    }
}
