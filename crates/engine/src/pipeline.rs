//! Composition of exclusion rules into a single keep/drop decision.

use std::borrow::Cow;
use std::fmt;

use crate::enumerator::Combination;
use crate::filters::FilterId;
use crate::selection::FilterSelection;
use crate::stats::{RuleRejections, RunStats};

/// Rule name used for the excluded literal value.
pub const EXCLUDED_NUMBER_RULE: &str = "excludedNumber";

type Predicate = Box<dyn Fn(&[i64]) -> bool + Send + Sync>;

/// A named predicate; `true` drops the combination.
pub struct Rule {
    name: Cow<'static, str>,
    predicate: Predicate,
}

impl Rule {
    pub fn new<F>(name: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&[i64]) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Box::new(predicate),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn excludes(&self, combination: &[i64]) -> bool {
        (self.predicate)(combination)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish_non_exhaustive()
    }
}

impl From<FilterId> for Rule {
    fn from(id: FilterId) -> Self {
        let predicate = id.spec().predicate;
        Self::new(id.as_str(), predicate)
    }
}

/// Ordered set of active rules. A combination is kept when no rule fires.
#[derive(Debug, Default)]
pub struct Pipeline {
    rules: Vec<Rule>,
}

impl Pipeline {
    /// Builds the pipeline for `selection`.
    ///
    /// The excluded literal, when present, is checked first and regardless of
    /// the selection; enabled catalogue rules follow in catalogue order.
    #[must_use]
    pub fn new(selection: &FilterSelection, excluded_number: Option<i64>) -> Self {
        let mut rules = Vec::new();
        if let Some(excluded) = excluded_number {
            rules.push(Rule::new(EXCLUDED_NUMBER_RULE, move |c: &[i64]| {
                c.contains(&excluded)
            }));
        }
        rules.extend(selection.enabled().map(Rule::from));
        Self { rules }
    }

    /// Appends a caller-defined rule after the built-in ones.
    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(Rule::name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Index of the first rule that drops `combination`.
    fn first_rejection(&self, combination: &[i64]) -> Option<usize> {
        self.rules.iter().position(|rule| rule.excludes(combination))
    }

    /// Name of the first rule that drops `combination`, if any.
    #[must_use]
    pub fn rejecting_rule(&self, combination: &[i64]) -> Option<&str> {
        self.first_rejection(combination)
            .map(|index| self.rules[index].name())
    }

    #[must_use]
    pub fn admits(&self, combination: &[i64]) -> bool {
        self.first_rejection(combination).is_none()
    }

    /// Keeps the admitted combinations, preserving their order.
    pub fn apply<I>(&self, combinations: I) -> Vec<Combination>
    where
        I: IntoIterator<Item = Combination>,
    {
        combinations.into_iter().filter(|c| self.admits(c)).collect()
    }

    /// Like [`Pipeline::apply`] but also counts rejections per rule.
    pub fn apply_with_stats<I>(&self, combinations: I) -> (Vec<Combination>, RunStats)
    where
        I: IntoIterator<Item = Combination>,
    {
        let mut counts = vec![0usize; self.rules.len()];
        let mut generated = 0usize;
        let mut kept = Vec::new();

        for combination in combinations {
            generated += 1;
            match self.first_rejection(&combination) {
                Some(index) => counts[index] += 1,
                None => kept.push(combination),
            }
        }

        let rejected_by = self
            .rules
            .iter()
            .zip(counts)
            .map(|(rule, rejected)| RuleRejections {
                rule: rule.name().to_string(),
                rejected,
            })
            .collect();
        let stats = RunStats {
            generated,
            kept: kept.len(),
            rejected_by,
        };
        (kept, stats)
    }
}

/// Whether `combination` survives `selection` and the optional excluded literal.
#[must_use]
pub fn admit(combination: &[i64], selection: &FilterSelection, excluded_number: Option<i64>) -> bool {
    if excluded_number.is_some_and(|n| combination.contains(&n)) {
        return false;
    }
    selection.enabled().all(|id| !id.excludes(combination))
}

/// Drops every combination rejected by `selection` or containing `excluded_number`.
pub fn filter_combinations<I>(
    combinations: I,
    selection: &FilterSelection,
    excluded_number: Option<i64>,
) -> Vec<Combination>
where
    I: IntoIterator<Item = Combination>,
{
    Pipeline::new(selection, excluded_number).apply(combinations)
}
