//! Errors surfaced by a bounded search.
//!
//! An unbounded search never fails: size mismatches and dead ends both end
//! in an empty (or shorter) result. Errors only appear when the caller asked
//! for a step budget or a deadline and the search ran past it.

use std::time::Duration;

use thiserror::Error;

/// Why a search stopped before exploring its whole search space.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The configured frame budget ran out.
    #[error("search exceeded its budget of {limit} steps after finding {found} embeddings")]
    StepBudgetExhausted {
        /// Configured budget.
        limit: u64,
        /// Embeddings collected before aborting.
        found: usize,
    },

    /// The configured deadline passed.
    #[error("search timed out after {elapsed:?} having found {found} embeddings")]
    Timeout {
        /// Time spent before aborting.
        elapsed: Duration,
        /// Embeddings collected before aborting.
        found: usize,
    },
}

impl MatchError {
    /// Embeddings found before the search was aborted.
    pub fn found(&self) -> usize {
        match self {
            Self::StepBudgetExhausted { found, .. } | Self::Timeout { found, .. } => *found,
        }
    }
}
