//! The catalogue of built-in exclusion rules.
//!
//! Each predicate returns `true` when the combination must be dropped. Rules
//! are looked up through [`CATALOGUE`], which keeps the order the rules were
//! introduced in; that order also decides which rule a rejection is
//! attributed to in run statistics.

use std::fmt;
use std::str::FromStr;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// How many members a rule needs to see before it fires.
pub const THRESHOLD: usize = 3;

/// Width of the sliding window used by [`three_in_range_of_five`].
pub const WINDOW_WIDTH: u64 = 5;

/// Identifier of a built-in exclusion rule.
///
/// The serialized names are the historical identifiers and are kept verbatim,
/// including the lowercase `n` in `excludeThreenumbersInRangeBetween10to19`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FilterId {
    #[serde(rename = "excludeAllEvenNumbers")]
    AllEven,
    /// Fires on *any* odd member, not only on all-odd combinations.
    #[serde(rename = "excludeAllOddNumbers")]
    AllOdd,
    #[serde(rename = "excludeThreeConsecutiveNumbers")]
    ThreeConsecutive,
    #[serde(rename = "excludeThreeNumbersInRangeBetween1to9")]
    ThreeIn1To9,
    #[serde(rename = "excludeThreenumbersInRangeBetween10to19")]
    ThreeIn10To19,
    #[serde(rename = "excludeThreeNumbersInRangeBetween20to29")]
    ThreeIn20To29,
    #[serde(rename = "excludeThreeNumbersInRangeBetween30to39")]
    ThreeIn30To39,
    #[serde(rename = "excludeSameOnesDigit")]
    SameOnesDigit,
    #[serde(rename = "excludeThreeNumbersInRangeOfFive")]
    ThreeInRangeOfFive,
}

impl FilterId {
    pub const ALL: [Self; 9] = [
        Self::AllEven,
        Self::AllOdd,
        Self::ThreeConsecutive,
        Self::ThreeIn1To9,
        Self::ThreeIn10To19,
        Self::ThreeIn20To29,
        Self::ThreeIn30To39,
        Self::SameOnesDigit,
        Self::ThreeInRangeOfFive,
    ];

    /// Historical identifier, as used in profiles and JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllEven => "excludeAllEvenNumbers",
            Self::AllOdd => "excludeAllOddNumbers",
            Self::ThreeConsecutive => "excludeThreeConsecutiveNumbers",
            Self::ThreeIn1To9 => "excludeThreeNumbersInRangeBetween1to9",
            Self::ThreeIn10To19 => "excludeThreenumbersInRangeBetween10to19",
            Self::ThreeIn20To29 => "excludeThreeNumbersInRangeBetween20to29",
            Self::ThreeIn30To39 => "excludeThreeNumbersInRangeBetween30to39",
            Self::SameOnesDigit => "excludeSameOnesDigit",
            Self::ThreeInRangeOfFive => "excludeThreeNumbersInRangeOfFive",
        }
    }

    /// Short kebab-case name for command lines.
    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::AllEven => "all-even",
            Self::AllOdd => "all-odd",
            Self::ThreeConsecutive => "three-consecutive",
            Self::ThreeIn1To9 => "three-in-1-9",
            Self::ThreeIn10To19 => "three-in-10-19",
            Self::ThreeIn20To29 => "three-in-20-29",
            Self::ThreeIn30To39 => "three-in-30-39",
            Self::SameOnesDigit => "same-ones-digit",
            Self::ThreeInRangeOfFive => "three-in-range-of-five",
        }
    }

    /// The catalogue entry for this rule.
    #[must_use]
    pub fn spec(self) -> &'static FilterSpec {
        // CATALOGUE is declared in the same order as the enum
        &CATALOGUE[self as usize]
    }

    /// Whether this rule rejects `combination`.
    #[must_use]
    pub fn excludes(self, combination: &[i64]) -> bool {
        (self.spec().predicate)(combination)
    }
}

impl fmt::Display for FilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s || id.cli_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown filter: {s}"))
    }
}

/// A named exclusion predicate.
#[derive(Debug)]
pub struct FilterSpec {
    pub id: FilterId,
    pub description: &'static str,
    pub predicate: fn(&[i64]) -> bool,
}

/// Built-in rules in declaration order.
pub static CATALOGUE: [FilterSpec; 9] = [
    FilterSpec {
        id: FilterId::AllEven,
        description: "Exclude combinations that are all even numbers",
        predicate: all_even,
    },
    FilterSpec {
        id: FilterId::AllOdd,
        description: "Exclude combinations that contain any odd number",
        predicate: any_odd,
    },
    FilterSpec {
        id: FilterId::ThreeConsecutive,
        description: "Exclude combinations that contain 3 or more consecutive numbers",
        predicate: three_consecutive,
    },
    FilterSpec {
        id: FilterId::ThreeIn1To9,
        description: "Exclude combinations that contain 3 or more numbers between 1 and 9",
        predicate: three_in_1_to_9,
    },
    FilterSpec {
        id: FilterId::ThreeIn10To19,
        description: "Exclude combinations that contain 3 or more numbers between 10 and 19",
        predicate: three_in_10_to_19,
    },
    FilterSpec {
        id: FilterId::ThreeIn20To29,
        description: "Exclude combinations that contain 3 or more numbers between 20 and 29",
        predicate: three_in_20_to_29,
    },
    FilterSpec {
        id: FilterId::ThreeIn30To39,
        description: "Exclude combinations that contain 3 or more numbers between 30 and 39",
        predicate: three_in_30_to_39,
    },
    FilterSpec {
        id: FilterId::SameOnesDigit,
        description: "Exclude combinations that contain 3 or more numbers with the same ones digit (e.g. 7, 17, 27)",
        predicate: same_ones_digit,
    },
    FilterSpec {
        id: FilterId::ThreeInRangeOfFive,
        description: "Exclude combinations that contain 3 numbers within any range of 5 consecutive numbers",
        predicate: three_in_range_of_five,
    },
];

/// Every member is even. Vacuously true for the empty combination.
#[must_use]
pub fn all_even(combination: &[i64]) -> bool {
    combination.iter().all(|n| n % 2 == 0)
}

/// At least one member is odd.
#[must_use]
pub fn any_odd(combination: &[i64]) -> bool {
    combination.iter().any(|n| n % 2 != 0)
}

/// Three adjacent members form a run `v, v+1, v+2`.
#[must_use]
pub fn three_consecutive(combination: &[i64]) -> bool {
    combination.windows(THRESHOLD).any(|w| {
        w[0].checked_add(1) == Some(w[1]) && w[0].checked_add(2) == Some(w[2])
    })
}

/// Number of members inside the inclusive band `[min, max]`.
#[must_use]
pub fn count_in(combination: &[i64], min: i64, max: i64) -> usize {
    combination.iter().filter(|&&n| (min..=max).contains(&n)).count()
}

#[must_use]
pub fn three_in_1_to_9(combination: &[i64]) -> bool {
    count_in(combination, 1, 9) >= THRESHOLD
}

#[must_use]
pub fn three_in_10_to_19(combination: &[i64]) -> bool {
    count_in(combination, 10, 19) >= THRESHOLD
}

#[must_use]
pub fn three_in_20_to_29(combination: &[i64]) -> bool {
    count_in(combination, 20, 29) >= THRESHOLD
}

#[must_use]
pub fn three_in_30_to_39(combination: &[i64]) -> bool {
    count_in(combination, 30, 39) >= THRESHOLD
}

/// Some ones digit (`value % 10`, sign kept) is shared by three members.
#[must_use]
pub fn same_ones_digit(combination: &[i64]) -> bool {
    let mut groups: HashMap<i64, usize> = HashMap::new();
    combination.iter().any(|n| {
        let count = groups.entry(n % 10).or_insert(0);
        *count += 1;
        *count >= THRESHOLD
    })
}

/// Some member `num` has three members in the half-open window `[num, num + 5)`.
#[must_use]
pub fn three_in_range_of_five(combination: &[i64]) -> bool {
    combination.iter().any(|&num| {
        combination
            .iter()
            .filter(|&&v| v >= num && v.abs_diff(num) < WINDOW_WIDTH)
            .count()
            >= THRESHOLD
    })
}
