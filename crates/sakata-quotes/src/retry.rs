//! Retry policy for the quote upstream.
//!
//! The policy is a plain value whose delay computations are pure, so the
//! schedule can be unit-tested without sleeping. The backoff exists for
//! upstream politeness, not correctness: the upstream drops or garbles
//! responses routinely and a short pause before the next attempt is
//! usually enough.

use std::time::Duration;

/// Retry schedule for one quote fetch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Minimum 1.
    pub max_attempts: u32,
    /// Pause between consecutive attempts.
    pub backoff: Duration,
    /// Apply ±50% random jitter to the backoff.
    pub jitter: bool,
    /// Upper bound of the randomized delay before the first attempt.
    /// Decorrelates concurrent workers hitting the same upstream; zero
    /// disables it.
    pub initial_jitter: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_millis(700),
            jitter: true,
            initial_jitter: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries and never sleeps. Intended for tests.
    #[must_use]
    pub const fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            backoff: Duration::ZERO,
            jitter: false,
            initial_jitter: Duration::ZERO,
        }
    }

    /// Delay to sleep after a failed attempt, before attempt `attempt + 1`.
    ///
    /// Without jitter this is exactly `backoff`; with jitter it is a
    /// uniform draw from 50%..=150% of `backoff`.
    #[must_use]
    pub fn delay_after_attempt(&self, _attempt: u32) -> Duration {
        if !self.jitter {
            return self.backoff;
        }
        let base_ms = self.backoff.as_millis() as u64;
        let half = base_ms / 2;
        Duration::from_millis(half + fastrand::u64(0..=base_ms))
    }

    /// Randomized pre-fetch delay, or `None` when disabled.
    #[must_use]
    pub fn initial_delay(&self) -> Option<Duration> {
        let bound_ms = self.initial_jitter.as_millis() as u64;
        if bound_ms == 0 {
            return None;
        }
        Some(Duration::from_millis(fastrand::u64(0..=bound_ms)))
    }
}
