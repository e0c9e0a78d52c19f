//! Longest-common-subsequence and substring length computation.

use crate::table::DpTable;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Selects which length `compare_many` computes per candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Common subsequence: order preserved, gaps allowed.
    Subsequence,
    /// Common substring: contiguous run only.
    Substring,
}

/// Configuration options that govern batch comparison.
#[derive(Debug, Clone, Copy)]
pub struct BatchConfig {
    /// Enable a threaded implementation (requires the `parallel` feature).
    pub use_threads: bool,
    /// Desired worker count when threading is enabled.
    pub max_workers: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            use_threads: false,
            max_workers: 1,
        }
    }
}

/// Return the length of the longest common subsequence of two strings,
/// compared per `char`.
///
/// A subsequence keeps the relative order of the original elements but need
/// not be contiguous. Returns 0 when either input is empty.
pub fn longest_common_subsequence(a: &str, b: &str) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    generic_longest_common_subsequence(&a, &b)
}

/// Return the length of the longest common substring of two strings,
/// compared per `char`.
///
/// Unlike a subsequence, a substring is a contiguous run. Returns 0 when
/// either input is empty.
pub fn longest_common_substring(a: &str, b: &str) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    generic_longest_common_substring(&a, &b)
}

/// Longest common subsequence length over generic element slices.
///
/// `len[i][j]` holds the answer for the first `i` elements of `a` against
/// the first `j` of `b`; a match extends the diagonal, a mismatch carries
/// the better of dropping one trailing element from either side.
pub fn generic_longest_common_subsequence<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut len = DpTable::new(a.len() + 1, b.len() + 1);
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cell = if a[i - 1] == b[j - 1] {
                len.get(i - 1, j - 1) + 1
            } else {
                len.get(i, j - 1).max(len.get(i - 1, j))
            };
            len.set(i, j, cell);
        }
    }
    len.get(a.len(), b.len())
}

/// Longest common substring length over generic element slices.
///
/// Same table shape as the subsequence recurrence, but a mismatch resets
/// the cell to 0 since contiguity breaks; the answer is the running maximum
/// rather than the final cell.
pub fn generic_longest_common_substring<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut max_len = 0;
    let mut len = DpTable::new(a.len() + 1, b.len() + 1);
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cell = if a[i - 1] == b[j - 1] {
                len.get(i - 1, j - 1) + 1
            } else {
                0
            };
            len.set(i, j, cell);
            if cell > max_len {
                max_len = cell;
            }
        }
    }
    max_len
}

/// Score one query against every candidate, returning one length per
/// candidate in input order.
///
/// Each candidate is scored independently, so with the `parallel` feature
/// enabled and `config.use_threads` set the work runs on a bounded rayon
/// pool. Results are identical in either mode.
pub fn compare_many(
    query: &str,
    candidates: &[String],
    comparison: Comparison,
    config: BatchConfig,
) -> Vec<usize> {
    #[cfg(not(feature = "parallel"))]
    if config.use_threads {
        use log::warn;
        warn!(
            "Threaded batch comparison requested, but the 'parallel' feature is not enabled; falling back to sequential mode"
        );
    }

    log::debug!(
        "Scoring {} candidate sequences against a {}-element query",
        candidates.len(),
        query.chars().count()
    );

    let query_elems: Vec<char> = query.chars().collect();
    let score_candidate = |candidate: &String| -> usize {
        let candidate_elems: Vec<char> = candidate.chars().collect();
        match comparison {
            Comparison::Subsequence => {
                generic_longest_common_subsequence(&query_elems, &candidate_elems)
            }
            Comparison::Substring => {
                generic_longest_common_substring(&query_elems, &candidate_elems)
            }
        }
    };

    if config.use_threads {
        #[cfg(feature = "parallel")]
        {
            use rayon::ThreadPoolBuilder;
            let pool = ThreadPoolBuilder::new()
                .num_threads(config.max_workers)
                .build()
                .expect("Failed to build rayon thread pool");
            return pool.install(|| candidates.par_iter().map(score_candidate).collect());
        }
    }
    candidates.iter().map(score_candidate).collect()
}
