use derive_builder::Builder;
use serde::Serialize;

use crate::selection::FilterSelection;

/// Default ceiling on how many candidates a run may materialize.
pub const DEFAULT_MAX_COMBINATIONS: u64 = 10_000_000;

/// Parameters of one engine run.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct RunConfig {
    #[builder(default = "1")]
    pub start: i64,
    #[builder(default = "20")]
    pub end: i64,
    #[builder(default = "3")]
    pub size: usize,
    #[builder(default)]
    pub excluded_number: Option<i64>,
    #[builder(default)]
    #[serde(rename = "filters")]
    pub selection: FilterSelection,
    /// `None` enumerates without a ceiling.
    #[builder(default = "Some(DEFAULT_MAX_COMBINATIONS)")]
    #[serde(skip)]
    pub max_combinations: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            start: 1,
            end: 20,
            size: 3,
            excluded_number: None,
            selection: FilterSelection::default(),
            max_combinations: Some(DEFAULT_MAX_COMBINATIONS),
        }
    }
}
