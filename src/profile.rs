//! Saved run parameters.
//!
//! A profile mirrors the saved state of the input form: `start`, `end`,
//! `size` (alias `combinationSize`), `excludedNumber` and a `filters` map.
//! `excludedNumber` may be a number, a numeric string, an empty string or
//! null; the last two mean "no exclusion".

use std::fs;
use std::path::Path;

use combo_filter_engine::selection::FilterSelection;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Profile {
    #[serde(default)]
    pub start: Option<i64>,
    #[serde(default)]
    pub end: Option<i64>,
    #[serde(default, alias = "combinationSize")]
    pub size: Option<usize>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub excluded_number: Option<i64>,
    #[serde(default)]
    pub filters: FilterSelection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProfileFormat {
    Json,
    Yaml,
}

impl ProfileFormat {
    fn detect(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

impl Profile {
    /// Reads a profile, choosing JSON or YAML by file extension.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| AppError::Profile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        log::debug!("loading profile {}", path.display());
        Self::parse(&contents, ProfileFormat::detect(path)).map_err(|reason| AppError::Profile {
            path: path.to_path_buf(),
            reason,
        })
    }

    fn parse(contents: &str, format: ProfileFormat) -> std::result::Result<Self, String> {
        match format {
            ProfileFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            ProfileFormat::Yaml => parse_yaml(contents),
        }
    }
}

#[cfg(feature = "yaml")]
fn parse_yaml(contents: &str) -> std::result::Result<Profile, String> {
    serde_yaml::from_str(contents).map_err(|e| e.to_string())
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(_contents: &str) -> std::result::Result<Profile, String> {
    Err("YAML profiles need the `yaml` feature".to_string())
}

fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("excludedNumber is not an integer: {s:?}"))),
    }
}
