use std::time::{Duration, Instant};

use crate::embedding::SearchStats;
use crate::error::MatchError;

/// How often (in frames) the deadline is checked.
const CLOCK_INTERVAL: u64 = 256;

/// Work counters for one search, plus the optional bounds on that work.
#[derive(Debug)]
pub(crate) struct Progress {
    frames: u64,
    scanned: u64,
    pruned: u64,
    started: Instant,
    max_steps: Option<u64>,
    timeout: Option<Duration>,
}

impl Progress {
    pub(crate) fn new(max_steps: Option<u64>, timeout: Option<Duration>) -> Self {
        Progress {
            frames: 0,
            scanned: 0,
            pruned: 0,
            started: Instant::now(),
            max_steps,
            timeout,
        }
    }

    /// Count one search frame and enforce the configured bounds.
    ///
    /// `found` is only used to report how far the search got.
    pub(crate) fn enter_frame(&mut self, found: usize) -> Result<(), MatchError> {
        self.frames += 1;

        if let Some(limit) = self.max_steps.filter(|&limit| self.frames > limit) {
            return Err(MatchError::StepBudgetExhausted { limit, found });
        }

        let on_clock = (self.frames - 1).is_multiple_of(CLOCK_INTERVAL);
        if let Some(timeout) = self.timeout.filter(|_| on_clock) {
            let elapsed = self.started.elapsed();
            if elapsed >= timeout {
                return Err(MatchError::Timeout { elapsed, found });
            }
        }

        Ok(())
    }

    /// Count candidates that were looked at.
    pub(crate) fn inc_scanned(&mut self, by: u64) {
        self.scanned += by;
    }

    /// Count candidates that were rejected.
    pub(crate) fn inc_pruned(&mut self, by: u64) {
        self.pruned += by;
    }

    pub(crate) fn snapshot(&self) -> SearchStats {
        SearchStats {
            frames: self.frames,
            candidates_scanned: self.scanned,
            pruned: self.pruned,
            elapsed: self.started.elapsed(),
        }
    }
}
