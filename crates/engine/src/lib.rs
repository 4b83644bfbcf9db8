// crates/engine/src/lib.rs
use log::{debug, info, warn};

pub mod config;
pub mod enumerator;
pub mod error;
pub mod filters;
pub mod pipeline;
pub mod selection;
pub mod sink;
pub mod stats;

pub use crate::enumerator::{Combination, generate};
pub use crate::pipeline::{admit, filter_combinations};

use crate::config::RunConfig;
use crate::error::{EngineError, Result};
use crate::pipeline::Pipeline;
use crate::sink::RowSink;
use crate::stats::{RunResult, RunStats};

/// Refuses runs that would materialize more than `config.max_combinations`.
///
/// # Errors
///
/// Returns [`EngineError::TooManyCombinations`] when the guard trips.
pub fn check_size(config: &RunConfig) -> Result<u128> {
    let requested = enumerator::count_combinations(config.start, config.end, config.size);
    if let Some(limit) = config.max_combinations {
        if requested > u128::from(limit) {
            warn!("refusing to enumerate {requested} combinations (limit {limit})");
            return Err(EngineError::TooManyCombinations { requested, limit });
        }
    }
    Ok(requested)
}

/// Enumerate and filter in one pass over the configured range.
///
/// # Errors
///
/// Fails only when the size guard refuses the run; enumeration and filtering
/// themselves are total.
pub fn run(config: &RunConfig) -> Result<RunResult> {
    let requested = check_size(config)?;
    debug!(
        "enumerating C({}, {}) = {requested} combinations over [{}, {}]",
        enumerator::range_len(config.start, config.end),
        config.size,
        config.start,
        config.end
    );

    let pipeline = Pipeline::new(&config.selection, config.excluded_number);
    debug!(
        "active rules: [{}]",
        pipeline.rule_names().collect::<Vec<_>>().join(", ")
    );

    let candidates = generate(config.start, config.end, config.size);
    let (combinations, stats) = pipeline.apply_with_stats(candidates);
    info!(
        "kept {} of {} combinations ({} rejected)",
        stats.kept,
        stats.generated,
        stats.rejected()
    );

    Ok(RunResult { combinations, stats })
}

/// Runs the engine and streams the survivors into `sink`.
///
/// # Errors
///
/// Returns the size-guard error or whatever `sink` reports.
pub fn run_into<S>(config: &RunConfig, sink: &mut S) -> std::result::Result<RunStats, S::Error>
where
    S: RowSink + ?Sized,
    S::Error: From<EngineError>,
{
    let result = run(config)?;
    crate::sink::write_rows(sink, &result.combinations)?;
    Ok(result.stats)
}
