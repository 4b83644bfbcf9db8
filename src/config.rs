// src/config.rs
use std::path::PathBuf;

use combo_filter_engine::config::{RunConfig, RunConfigBuilder};
use combo_filter_engine::selection::FilterSelection;
use derive_builder::Builder;

use crate::args::Args;
use crate::error::{AppError, Result};
use crate::options::ExportFormat;
use crate::profile::Profile;

/// Where exported rows go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputTarget {
    #[default]
    Stdout,
    File(PathBuf),
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub run: RunConfig,
    #[builder(default)]
    pub format: ExportFormat,
    #[builder(default)]
    pub target: OutputTarget,
    #[builder(default)]
    pub summary: bool,
}

impl Config {
    /// Resolves CLI arguments, loading `--profile` first so explicit flags
    /// win over profile values.
    ///
    /// # Errors
    ///
    /// Fails when the profile cannot be loaded or the output target does not
    /// suit the format.
    pub fn from_args(args: &Args) -> Result<Self> {
        let profile = args
            .profile
            .as_deref()
            .map(Profile::load)
            .transpose()?
            .unwrap_or_default();
        Self::resolve(args, profile)
    }

    /// Merges `args` over `profile`.
    ///
    /// # Errors
    ///
    /// See [`Config::from_args`].
    pub fn resolve(args: &Args, profile: Profile) -> Result<Self> {
        let defaults = RunConfig::default();

        let mut selection = if args.all_filters {
            FilterSelection::all()
        } else {
            profile.filters
        };
        selection.merge(&args.filters.iter().copied().collect());

        let max_combinations = (!args.no_limit).then_some(args.max_combinations);

        let run = RunConfigBuilder::default()
            .start(args.start.or(profile.start).unwrap_or(defaults.start))
            .end(args.end.or(profile.end).unwrap_or(defaults.end))
            .size(args.size.or(profile.size).unwrap_or(defaults.size))
            .excluded_number(args.exclude_number.or(profile.excluded_number))
            .selection(selection)
            .max_combinations(max_combinations)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        let target = match (&args.output, args.save) {
            (Some(path), _) => OutputTarget::File(path.clone()),
            (None, true) => OutputTarget::File(PathBuf::from(args.format.default_file_name())),
            (None, false) => OutputTarget::Stdout,
        };
        if args.format.is_binary() && target == OutputTarget::Stdout {
            return Err(AppError::Config(format!(
                "{} output needs a file; pass --output or --save",
                args.format.extension()
            )));
        }
        if let Some(reason) = args.format.missing_feature() {
            return Err(AppError::Unsupported {
                format: args.format.extension(),
                reason,
            });
        }

        ConfigBuilder::default()
            .run(run)
            .format(args.format)
            .target(target)
            .summary(args.summary)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}
