use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Base name of every exported file.
pub const EXPORT_STEM: &str = "filtered_combinations";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma separated, one row per combination, no header
    #[default]
    Csv,
    /// Tab separated, one row per combination, no header
    Tsv,
    /// Single JSON document with parameters, rows and summary
    Json,
    /// One JSON array per line
    Jsonl,
    /// Same document as `json`, in YAML
    Yaml,
    /// Markdown table
    Md,
    /// Boxed table for terminals
    Table,
    /// Excel workbook with a single `Combinations` sheet
    Xlsx,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Json => "json",
            Self::Jsonl => "jsonl",
            Self::Yaml => "yaml",
            Self::Md => "md",
            Self::Table => "txt",
            Self::Xlsx => "xlsx",
        }
    }

    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv;charset=utf-8",
            Self::Tsv => "text/tab-separated-values;charset=utf-8",
            Self::Json => "application/json",
            Self::Jsonl => "application/x-ndjson",
            Self::Yaml => "application/yaml",
            Self::Md => "text/markdown;charset=utf-8",
            Self::Table => "text/plain;charset=utf-8",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }

    /// Fixed download name, e.g. `filtered_combinations.csv`.
    #[must_use]
    pub fn default_file_name(self) -> String {
        format!("{EXPORT_STEM}.{}", self.extension())
    }

    /// Why the format cannot be produced by this build, if it cannot.
    #[must_use]
    pub const fn missing_feature(self) -> Option<&'static str> {
        match self {
            Self::Yaml if !cfg!(feature = "yaml") => Some("built without the `yaml` feature"),
            Self::Xlsx if !cfg!(feature = "xlsx") => Some("built without the `xlsx` feature"),
            _ => None,
        }
    }

    /// Formats that must not be written to a terminal.
    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(self, Self::Xlsx)
    }
}
