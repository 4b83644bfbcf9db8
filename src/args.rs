// src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use combo_filter_engine::config::DEFAULT_MAX_COMBINATIONS;
use combo_filter_engine::filters::FilterId;

use crate::options::ExportFormat;
use crate::parsers::{parse_filter, parse_limit};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "combo_filter",
    version = crate::VERSION,
    about = "Enumerate k-combinations of an integer range, drop unwanted ones, export the rest",
    long_about = Some(include_str!("../usage.txt"))
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// First value of the range, inclusive [default: 1]
    #[arg(long, allow_negative_numbers = true, help_heading = "Range")]
    pub start: Option<i64>,

    /// Last value of the range, inclusive [default: 20]
    #[arg(long, allow_negative_numbers = true, help_heading = "Range")]
    pub end: Option<i64>,

    /// Number of values per combination [default: 3]
    #[arg(long, short = 'k', help_heading = "Range")]
    pub size: Option<usize>,

    /// Drop every combination containing this value
    #[arg(long, short = 'x', allow_negative_numbers = true, help_heading = "Filters")]
    pub exclude_number: Option<i64>,

    /// Exclusion rules to enable (comma separated, repeatable)
    #[arg(
        long = "filter",
        short = 'f',
        value_delimiter = ',',
        value_parser = parse_filter,
        help_heading = "Filters"
    )]
    pub filters: Vec<FilterId>,

    /// Enable every exclusion rule
    #[arg(long, help_heading = "Filters")]
    pub all_filters: bool,

    /// Print the rule catalogue and exit
    #[arg(long, help_heading = "Filters")]
    pub list_filters: bool,

    /// Export format
    #[arg(long, value_enum, default_value = "csv", help_heading = "Output")]
    pub format: ExportFormat,

    /// Write to this file instead of stdout
    #[arg(long, short = 'o', value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// Write to the format's download name (filtered_combinations.<ext>)
    #[arg(long, conflicts_with = "output", help_heading = "Output")]
    pub save: bool,

    /// Print generated/kept/rejected counts to stderr
    #[arg(long, help_heading = "Output")]
    pub summary: bool,

    /// Refuse runs that would enumerate more combinations than this
    #[arg(
        long,
        value_parser = parse_limit,
        default_value_t = DEFAULT_MAX_COMBINATIONS,
        help_heading = "Limits"
    )]
    pub max_combinations: u64,

    /// Enumerate without a ceiling
    #[arg(long, help_heading = "Limits")]
    pub no_limit: bool,

    /// JSON or YAML file with start, end, size, excludedNumber and filters
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub profile: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count, help_heading = "Logging")]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', conflicts_with = "verbose", help_heading = "Logging")]
    pub quiet: bool,
}
