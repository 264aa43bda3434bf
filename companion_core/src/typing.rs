//! Typing delay - the pause before Root's reply appears.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Uniform delay range in milliseconds, `min_ms` inclusive, `max_ms` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingDelay {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for TypingDelay {
    fn default() -> Self {
        Self {
            min_ms: 700,
            max_ms: 1500,
        }
    }
}

impl TypingDelay {
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// A delay that always waits exactly `ms`.
    pub fn fixed(ms: u64) -> Self {
        Self::new(ms, ms)
    }

    /// Draw a delay with the thread-local RNG.
    pub fn sample(&self) -> Duration {
        self.sample_with(&mut rand::thread_rng())
    }

    /// Draw a delay with the given RNG.
    pub fn sample_with<R: Rng>(&self, rng: &mut R) -> Duration {
        let ms = if self.max_ms > self.min_ms {
            rng.gen_range(self.min_ms..self.max_ms)
        } else {
            self.min_ms
        };
        Duration::from_millis(ms)
    }
}
