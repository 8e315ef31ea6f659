//! Fixed-period simulated clock

use serde::{Deserialize, Serialize};

/// Counts simulated milliseconds in steps of a fixed period.
///
/// The host calls [`Clock::advance`] once per timer callback; spawn decisions
/// are derived from the returned elapsed time, never from wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    period_ms: u64,
    elapsed_ms: u64,
}

impl Clock {
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            elapsed_ms: 0,
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Step one period and return the new elapsed time
    pub fn advance(&mut self) -> u64 {
        self.elapsed_ms += self.period_ms;
        self.elapsed_ms
    }

    /// True when the current elapsed time lands exactly on `interval_ms`
    pub fn is_multiple_of(&self, interval_ms: u64) -> bool {
        interval_ms != 0 && self.elapsed_ms.is_multiple_of(interval_ms)
    }
}
