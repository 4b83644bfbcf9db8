//! Depth-first enumeration of k-combinations over an inclusive integer range.
//!
//! Every combination is materialized before anything downstream sees it, so
//! memory grows with C(n, k) * k. Callers that accept user input should check
//! [`count_combinations`] first (see `RunConfig::max_combinations`).

/// A strictly increasing selection of distinct values from the range.
pub type Combination = Vec<i64>;

/// Number of integers in `[start, end]`, zero when `start > end`.
#[must_use]
pub fn range_len(start: i64, end: i64) -> u128 {
    if start > end {
        0
    } else {
        u128::from(end.abs_diff(start)) + 1
    }
}

/// C(n, size) for the range `[start, end]`, saturating at `u128::MAX`.
#[must_use]
pub fn count_combinations(start: i64, end: i64, size: usize) -> u128 {
    let n = range_len(start, end);
    let k = size as u128;
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc == C(n, i) here, so the division is exact
        match acc.checked_mul(n - i) {
            Some(v) => acc = v / (i + 1),
            None => return u128::MAX,
        }
    }
    acc
}

/// Every `size`-combination of `[start, end]` in lexicographic order.
///
/// `size == 0` yields a single empty combination; an empty range or a size
/// larger than the range yields nothing.
#[must_use]
pub fn generate(start: i64, end: i64, size: usize) -> Vec<Combination> {
    let mut results = Vec::new();
    if size as u128 > range_len(start, end) {
        return results;
    }
    let mut path = Vec::with_capacity(size);
    combine(start, end, size, &mut path, &mut results);
    results
}

fn combine(next: i64, end: i64, size: usize, path: &mut Combination, out: &mut Vec<Combination>) {
    if path.len() == size {
        out.push(path.clone());
        return;
    }

    // Highest value that still leaves room for the picks after this one.
    let still_needed = size - path.len() - 1;
    let Some(last) = i64::try_from(still_needed)
        .ok()
        .and_then(|n| end.checked_sub(n))
    else {
        return;
    };

    for value in next..=last {
        path.push(value);
        combine(value.saturating_add(1), end, size, path, out);
        path.pop();
    }
}
