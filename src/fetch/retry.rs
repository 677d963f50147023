//! Retry and pacing policies
//!
//! Both delay schedules are plain values so the paginators can be exercised
//! in tests with zeroed delays.

use std::time::Duration;

/// Retry policy for page fetches: attempt budget plus exponential backoff.
///
/// The backoff after a failed attempt is `backoff_base_secs ^ attempt`
/// seconds, where attempts are numbered from 1. With the default base of 15
/// that is 15s after the first failure and 225s after the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts per page before giving up
    pub max_attempts: u32,

    /// Base of the exponential backoff, in seconds
    pub backoff_base_secs: u64,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff_base_secs: u64) -> Self {
        Self {
            max_attempts,
            backoff_base_secs,
        }
    }

    /// Returns the sleep duration after the given failed attempt (1-based)
    pub fn backoff(&self, attempt: u32) -> Duration {
        Duration::from_secs(self.backoff_base_secs.saturating_pow(attempt))
    }

    /// Returns true if another attempt is allowed after `attempt` failures
    pub fn allows_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, 15)
    }
}

/// Fixed delay between successfully processed pages of one thread.
///
/// Deliberate backpressure toward the remote server, not a retry mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub page_delay: Duration,
}

impl Pacing {
    pub fn new(page_delay: Duration) -> Self {
        Self { page_delay }
    }

    /// A pacing policy with no delay, for tests
    pub fn none() -> Self {
        Self {
            page_delay: Duration::ZERO,
        }
    }

    /// Sleeps for the configured inter-page delay
    pub async fn pause(&self) {
        if !self.page_delay.is_zero() {
            tokio::time::sleep(self.page_delay).await;
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::new(Duration::from_secs(32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_backoff_schedule() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff(1), Duration::from_secs(15));
        assert_eq!(policy.backoff(2), Duration::from_secs(225));
    }

    #[test]
    fn test_retry_budget() {
        let policy = RetryPolicy::default();
        assert!(policy.allows_retry(1));
        assert!(policy.allows_retry(2));
        assert!(!policy.allows_retry(3));
    }

    #[test]
    fn test_zero_base_for_tests() {
        let policy = RetryPolicy::new(3, 0);
        assert_eq!(policy.backoff(1), Duration::ZERO);
        assert_eq!(policy.backoff(2), Duration::ZERO);
    }

    #[test]
    fn test_backoff_saturates() {
        let policy = RetryPolicy::new(100, u64::MAX);
        // Must not panic on overflow
        let _ = policy.backoff(99);
    }

    #[test]
    fn test_pacing_none_is_zero() {
        assert!(Pacing::none().page_delay.is_zero());
        assert_eq!(Pacing::default().page_delay, Duration::from_secs(32));
    }
}
