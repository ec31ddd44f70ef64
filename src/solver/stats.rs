//! Solver statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one solver call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States evaluated from scratch (cache misses).
    pub nodes_expanded: u64,

    /// States answered from the memo table.
    pub cache_hits: u64,

    /// Terminal states reached (winner decided or a hand exhausted).
    pub terminal_leaves: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fraction of non-terminal lookups answered by the memo table.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.nodes_expanded + self.cache_hits;
        if lookups == 0 {
            0.0
        } else {
            self.cache_hits as f64 / lookups as f64
        }
    }

    /// Calculate expanded nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_expanded as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
