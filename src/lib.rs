//! seqcmp library
//!
//! Comparison primitives for pairs of sequences: longest-common-subsequence
//! and longest-common-substring lengths over strings or generic element
//! slices, a batch helper for scoring one query against many candidates,
//! and an explicitly-seeded Fisher–Yates shuffle.

pub mod compare;
pub mod shuffle;
pub mod table;

pub use compare::{
    compare_many, generic_longest_common_subsequence, generic_longest_common_substring,
    longest_common_subsequence, longest_common_substring, BatchConfig, Comparison,
};
pub use shuffle::fisher_yates;
pub use table::DpTable;
