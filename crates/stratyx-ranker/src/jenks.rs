//! Natural-breaks tier partitioning.
//!
//! One-dimensional optimal grouping: split a sorted score sequence into k
//! contiguous groups minimising the total within-group squared deviation,
//! via the classic O(n²·k) dynamic programme (Jenks natural breaks).
//! See ARCHITECTURE.md §4.

use stratyx_common::error::{Result, StratyxError};
use tracing::{debug, warn};

/// Two scores closer than this are treated as the same value.
const SCORE_EPS: f64 = 1e-9;

/// Partition `scores` (descending) into at most `k` contiguous tiers.
///
/// Returns the start index of each tier in the descending sequence; the
/// first entry is always 0 and tier 1 holds the highest scores. `k` is
/// clamped into `[1, distinct]` where `distinct` is the number of distinct
/// score values, so every tier is non-empty. When the optimal search is
/// infeasible (fewer distinct values or records than requested tiers) the
/// partitioner falls back to equal-count binning instead of failing.
///
/// Fully deterministic for identical `(scores, k)` input; fails only on
/// empty input.
pub fn partition(scores: &[f64], k: usize) -> Result<Vec<usize>> {
    if scores.is_empty() {
        return Err(StratyxError::EmptyInput);
    }

    // Work on the ascending sequence internally; direction does not affect
    // optimality, only which end tier 1 sits at.
    let mut ascending: Vec<f64> = scores.to_vec();
    ascending.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = ascending.len();
    let distinct = distinct_values(&ascending);
    let groups = k.clamp(1, distinct);
    if groups < k {
        warn!(
            "requested {} tiers but only {} distinct scores; using {}",
            k, distinct, groups
        );
    }

    let sizes = if groups == 1 {
        vec![n]
    } else if n < k || distinct < k {
        debug!("optimal search infeasible for k={}, n={}; equal-count fallback", k, n);
        equal_count_sizes(n, groups)
    } else {
        natural_break_sizes(&ascending, groups)
    };

    // Ascending group sizes, lowest scores first; the descending sequence
    // walks the same groups from the other end.
    let mut starts = Vec::with_capacity(groups);
    let mut pos = 0;
    for size in sizes.iter().rev() {
        starts.push(pos);
        pos += size;
    }
    Ok(starts)
}

/// Number of distinct values in an ascending slice, within `SCORE_EPS`.
fn distinct_values(ascending: &[f64]) -> usize {
    let mut count = 1;
    for pair in ascending.windows(2) {
        if (pair[1] - pair[0]).abs() > SCORE_EPS {
            count += 1;
        }
    }
    count
}

/// Spread n values over `groups` bins of near-equal size; earlier
/// (lower-score) bins absorb the remainder.
fn equal_count_sizes(n: usize, groups: usize) -> Vec<usize> {
    let base = n / groups;
    let extra = n % groups;
    (0..groups).map(|i| base + usize::from(i < extra)).collect()
}

/// Optimal group sizes (ascending order) minimising total within-group
/// squared deviation.
///
/// `cost[j][i]` is the minimal total SSD when the first `i` values form
/// `j + 1` groups; `cost[j][i] = min over m of cost[j-1][m] + ssd(m, i)`.
/// Running sums make each `ssd(m, i)` O(1), so the whole table is O(n²·k).
fn natural_break_sizes(ascending: &[f64], groups: usize) -> Vec<usize> {
    let n = ascending.len();

    let mut prefix = vec![0.0; n + 1];
    let mut prefix_sq = vec![0.0; n + 1];
    for (i, &v) in ascending.iter().enumerate() {
        prefix[i + 1] = prefix[i] + v;
        prefix_sq[i + 1] = prefix_sq[i] + v * v;
    }
    // Sum of squared deviations from the mean over [lo, hi).
    let ssd = |lo: usize, hi: usize| -> f64 {
        let len = (hi - lo) as f64;
        let sum = prefix[hi] - prefix[lo];
        let sum_sq = prefix_sq[hi] - prefix_sq[lo];
        (sum_sq - sum * sum / len).max(0.0)
    };

    let mut cost = vec![vec![f64::INFINITY; n + 1]; groups];
    let mut choice = vec![vec![0usize; n + 1]; groups];
    for i in 1..=n {
        cost[0][i] = ssd(0, i);
    }
    for j in 1..groups {
        // Each of the first j groups needs at least one value.
        for i in (j + 1)..=n {
            for m in j..i {
                let candidate = cost[j - 1][m] + ssd(m, i);
                if candidate < cost[j][i] {
                    cost[j][i] = candidate;
                    choice[j][i] = m;
                }
            }
        }
    }

    // Backtrack the argmin choices into group sizes.
    let mut sizes = vec![0usize; groups];
    let mut end = n;
    for j in (1..groups).rev() {
        let start = choice[j][end];
        sizes[j] = end - start;
        end = start;
    }
    sizes[0] = end;
    sizes
}
