use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::filters::FilterId;

/// Which catalogue rules are switched on.
///
/// Serializes as a plain `{ "<identifier>": bool }` map. Rules missing from
/// the map are disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSelection(BTreeMap<FilterId, bool>);

impl FilterSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every catalogue rule enabled.
    #[must_use]
    pub fn all() -> Self {
        FilterId::ALL.into_iter().collect()
    }

    pub fn set(&mut self, id: FilterId, enabled: bool) -> &mut Self {
        self.0.insert(id, enabled);
        self
    }

    pub fn enable(&mut self, id: FilterId) -> &mut Self {
        self.set(id, true)
    }

    #[must_use]
    pub fn is_enabled(&self, id: FilterId) -> bool {
        self.0.get(&id).copied().unwrap_or(false)
    }

    /// Enabled rules in catalogue order.
    pub fn enabled(&self) -> impl Iterator<Item = FilterId> + '_ {
        self.0.iter().filter(|(_, on)| **on).map(|(id, _)| *id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enabled().next().is_none()
    }

    /// Enables every rule `other` enables. Nothing is disabled.
    pub fn merge(&mut self, other: &Self) {
        for id in other.enabled() {
            self.enable(id);
        }
    }
}

impl FromIterator<FilterId> for FilterSelection {
    fn from_iter<I: IntoIterator<Item = FilterId>>(iter: I) -> Self {
        Self(iter.into_iter().map(|id| (id, true)).collect())
    }
}

impl FromIterator<(FilterId, bool)> for FilterSelection {
    fn from_iter<I: IntoIterator<Item = (FilterId, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
