// src/output.rs
use std::io::Write;

use combo_filter_engine::sink::{RowSink, write_rows};
use combo_filter_engine::stats::RunResult;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::options::ExportFormat;

pub mod formatters;
pub mod writer;

use formatters::{DelimitedSink, JsonlSink, MarkdownSink, Structured, StructuredSink, TableSink};
pub use writer::OutputWriter;

/// Writes the surviving combinations into `writer`, opened beforehand with
/// [`OutputWriter::create`]. A file target is only replaced once every row
/// has been written.
///
/// # Errors
///
/// Fails when a sink fails to write or the staged file cannot be committed.
pub fn emit(result: &RunResult, config: &Config, mut writer: OutputWriter) -> Result<()> {
    export_to(result, config, &mut writer)?;
    writer.commit()?;
    Ok(())
}

/// Formats `result` into `out` using `config.format`.
///
/// # Errors
///
/// Propagates sink failures.
pub fn export_to(result: &RunResult, config: &Config, out: &mut impl Write) -> Result<()> {
    let rows = &result.combinations;
    let width = config.run.size;
    match config.format {
        ExportFormat::Csv => drain(&mut DelimitedSink::csv(out), rows),
        ExportFormat::Tsv => drain(&mut DelimitedSink::tsv(out), rows),
        ExportFormat::Jsonl => drain(&mut JsonlSink::new(out), rows),
        ExportFormat::Md => drain(&mut MarkdownSink::new(out, width), rows),
        ExportFormat::Table => drain(&mut TableSink::new(out, width), rows),
        ExportFormat::Json => drain(
            &mut StructuredSink::new(out, Structured::Json, &config.run, &result.stats),
            rows,
        ),
        ExportFormat::Yaml => drain(
            &mut StructuredSink::new(out, Structured::Yaml, &config.run, &result.stats),
            rows,
        ),
        ExportFormat::Xlsx => export_xlsx(out, rows),
    }
}

fn drain<S>(sink: &mut S, rows: &[Vec<i64>]) -> Result<()>
where
    S: RowSink<Error = AppError>,
{
    write_rows(sink, rows)
}

#[cfg(feature = "xlsx")]
fn export_xlsx(out: &mut impl Write, rows: &[Vec<i64>]) -> Result<()> {
    drain(&mut formatters::XlsxSink::new(out)?, rows)
}

#[cfg(not(feature = "xlsx"))]
fn export_xlsx(_out: &mut impl Write, _rows: &[Vec<i64>]) -> Result<()> {
    Err(AppError::Unsupported {
        format: "xlsx",
        reason: "built without the `xlsx` feature",
    })
}
