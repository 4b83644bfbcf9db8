// src/output/formatters/markdown.rs
use std::io::Write;

use combo_filter_engine::sink::RowSink;

use crate::error::{AppError, Result};

/// Markdown table with one `#n` column per position.
pub struct MarkdownSink<W: Write> {
    out: W,
    width: usize,
    header_written: bool,
}

impl<W: Write> MarkdownSink<W> {
    pub fn new(out: W, width: usize) -> Self {
        Self {
            out,
            width,
            header_written: false,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        if self.header_written {
            return Ok(());
        }
        self.header_written = true;
        if self.width == 0 {
            writeln!(self.out, "| combination |\n|:---|")?;
            return Ok(());
        }
        let mut header = String::from("|");
        let mut separator = String::from("|");
        for position in 1..=self.width {
            header.push_str(&format!(" #{position} |"));
            separator.push_str("---:|");
        }
        writeln!(self.out, "{header}\n{separator}")?;
        Ok(())
    }
}

impl<W: Write> RowSink for MarkdownSink<W> {
    type Error = AppError;

    fn write_row(&mut self, row: &[i64]) -> Result<()> {
        self.write_header()?;
        if row.is_empty() {
            writeln!(self.out, "|  |")?;
            return Ok(());
        }
        let cells: Vec<String> = row.iter().map(i64::to_string).collect();
        writeln!(self.out, "| {} |", cells.join(" | "))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.write_header()?;
        self.out.flush()?;
        Ok(())
    }
}
