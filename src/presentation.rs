// src/presentation.rs
use std::io::Write;

use combo_filter_engine::filters::CATALOGUE;
use combo_filter_engine::stats::RunStats;

use crate::config::{Config, OutputTarget};

/// Prints the rule catalogue for `--list-filters`.
///
/// # Errors
///
/// Fails when `out` cannot be written.
pub fn print_filter_catalogue(out: &mut impl Write) -> std::io::Result<()> {
    let name_width = CATALOGUE
        .iter()
        .map(|spec| spec.id.cli_name().len())
        .max()
        .unwrap_or(0);

    writeln!(out, "{:<name_width$}  IDENTIFIER / DESCRIPTION", "NAME")?;
    writeln!(out, "{}", "-".repeat(name_width + 40))?;
    for spec in &CATALOGUE {
        writeln!(out, "{:<name_width$}  {}", spec.id.cli_name(), spec.id)?;
        writeln!(out, "{:<name_width$}  {}", "", spec.description)?;
    }
    Ok(())
}

/// Prints run counters for `--summary`.
///
/// # Errors
///
/// Fails when `out` cannot be written.
pub fn print_summary(stats: &RunStats, config: &Config, out: &mut impl Write) -> std::io::Result<()> {
    let run = &config.run;
    writeln!(
        out,
        "[combo_filter v{}] range [{}, {}], size {}",
        crate::VERSION,
        run.start,
        run.end,
        run.size
    )?;
    writeln!(out, "{:>12}  generated", stats.generated)?;
    for rule in &stats.rejected_by {
        writeln!(out, "{:>12}  rejected by {}", rule.rejected, rule.rule)?;
    }
    writeln!(out, "{:>12}  kept", stats.kept)?;
    match &config.target {
        OutputTarget::File(path) => writeln!(
            out,
            "written to {} ({})",
            path.display(),
            config.format.mime_type()
        )?,
        OutputTarget::Stdout => {}
    }
    Ok(())
}
