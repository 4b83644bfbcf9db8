// src/output/formatters/structured.rs
use std::io::Write;

use combo_filter_engine::config::RunConfig;
use combo_filter_engine::sink::RowSink;
use combo_filter_engine::stats::RunStats;
use combo_filter_engine::Combination;
use serde::Serialize;

use crate::error::{AppError, Result};

/// Document written by the `json` and `yaml` formats.
#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    pub version: &'static str,
    pub parameters: &'a RunConfig,
    pub combinations: Vec<Combination>,
    pub summary: &'a RunStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Structured {
    Json,
    Yaml,
}

/// Buffers rows and writes a single document on finish.
pub struct StructuredSink<'a, W: Write> {
    out: W,
    kind: Structured,
    document: ExportDocument<'a>,
}

impl<'a, W: Write> StructuredSink<'a, W> {
    pub fn new(out: W, kind: Structured, parameters: &'a RunConfig, summary: &'a RunStats) -> Self {
        Self {
            out,
            kind,
            document: ExportDocument {
                version: crate::VERSION,
                parameters,
                combinations: Vec::new(),
                summary,
            },
        }
    }
}

impl<W: Write> RowSink for StructuredSink<'_, W> {
    type Error = AppError;

    fn write_row(&mut self, row: &[i64]) -> Result<()> {
        self.document.combinations.push(row.to_vec());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        match self.kind {
            Structured::Json => {
                serde_json::to_writer_pretty(&mut self.out, &self.document)?;
                writeln!(self.out)?;
            }
            Structured::Yaml => write_yaml(&mut self.out, &self.document)?,
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(feature = "yaml")]
fn write_yaml(out: &mut impl Write, document: &ExportDocument<'_>) -> Result<()> {
    let yaml = serde_yaml::to_string(document)?;
    out.write_all(yaml.as_bytes())?;
    Ok(())
}

#[cfg(not(feature = "yaml"))]
fn write_yaml(_out: &mut impl Write, _document: &ExportDocument<'_>) -> Result<()> {
    Err(AppError::Unsupported {
        format: "yaml",
        reason: "built without the `yaml` feature",
    })
}
