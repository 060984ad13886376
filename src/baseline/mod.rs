// src/baseline/mod.rs

//! Classical linear search, the comparison point for the quantum runs.
//!
//! This is deliberately the naive scan: probe `0, 1, 2, …` in order and
//! count every probe. On average a present target costs N/2 probes and a
//! missing one costs N, which is the O(N) the amplification side gets to
//! beat with its O(√N) oracle calls.

/// What a linear scan found and what it cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaselineOutcome {
    /// The matching index, or `None` if the target lies outside the space.
    pub found: Option<usize>,
    /// Number of equality probes performed.
    pub comparisons: u64,
}

/// Scans indices `0..space` in order for `target`, counting one comparison
/// per probe and stopping at the first hit.
pub fn linear_search(space: usize, target: usize) -> BaselineOutcome {
    let mut comparisons = 0u64;
    for candidate in 0..space {
        comparisons += 1;
        if candidate == target {
            return BaselineOutcome { found: Some(candidate), comparisons };
        }
    }
    BaselineOutcome { found: None, comparisons }
}
