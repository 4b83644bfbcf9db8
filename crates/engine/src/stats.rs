use serde::Serialize;

use crate::enumerator::Combination;

/// Rejections attributed to one pipeline rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleRejections {
    pub rule: String,
    pub rejected: usize,
}

/// Counters collected while filtering.
///
/// A rejected combination is charged to the first rule, in pipeline order,
/// that rejected it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub generated: usize,
    pub kept: usize,
    pub rejected_by: Vec<RuleRejections>,
}

impl RunStats {
    #[must_use]
    pub fn rejected(&self) -> usize {
        self.generated - self.kept
    }

    #[must_use]
    pub fn rejected_by_rule(&self, rule: &str) -> Option<usize> {
        self.rejected_by
            .iter()
            .find(|r| r.rule == rule)
            .map(|r| r.rejected)
    }
}

/// Output of a single engine run.
#[derive(Debug, Clone, Default)]
pub struct RunResult {
    pub combinations: Vec<Combination>,
    pub stats: RunStats,
}
