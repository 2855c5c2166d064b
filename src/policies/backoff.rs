//! # Backoff policy for retrying setup attempts.
//!
//! [`BackoffPolicy`] controls how long the supervisor waits between
//! attempts. The delay before retry `n` is `multiplier_secs ^ n` seconds
//! (integer exponentiation), where `n` is the 1-based count of attempts
//! already made. The sequence is evaluated lazily, one attempt at a time.
//!
//! A multiplier of 0 yields zero-length waits (retry immediately); a
//! multiplier of 1 yields a constant one-second wait.
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use prepvisor::BackoffPolicy;
//!
//! let backoff = BackoffPolicy::new(3);
//! assert_eq!(backoff.delay_for(1), Duration::from_secs(3));
//! assert_eq!(backoff.delay_for(2), Duration::from_secs(9));
//! assert_eq!(backoff.delay_for(3), Duration::from_secs(27));
//! ```

use std::time::Duration;

/// Exponential backoff over a single integer knob.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BackoffPolicy {
    /// Base of the exponential, in seconds.
    pub multiplier_secs: u64,
}

impl BackoffPolicy {
    /// Creates a policy with the given multiplier.
    pub fn new(multiplier_secs: u64) -> Self {
        Self { multiplier_secs }
    }

    /// Computes the delay after the given attempt (1-based).
    ///
    /// `attempt = 0` is a contract violation: `0^0` has no meaning here, and
    /// the first wait always follows a completed attempt. Overflowing the
    /// exponentiation saturates to [`Duration::MAX`].
    pub fn delay_for(&self, attempt: u32) -> Duration {
        debug_assert!(attempt >= 1, "attempt indices are 1-based");
        self.multiplier_secs
            .checked_pow(attempt)
            .map(Duration::from_secs)
            .unwrap_or(Duration::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_sequence() {
        let policy = BackoffPolicy::new(3);
        assert_eq!(policy.delay_for(1), Duration::from_secs(3));
        assert_eq!(policy.delay_for(2), Duration::from_secs(9));
        assert_eq!(policy.delay_for(3), Duration::from_secs(27));
        assert_eq!(policy.delay_for(4), Duration::from_secs(81));
    }

    #[test]
    fn test_zero_multiplier_waits_nothing() {
        let policy = BackoffPolicy::new(0);
        for attempt in 1..=5 {
            assert_eq!(
                policy.delay_for(attempt),
                Duration::ZERO,
                "attempt {attempt} should not wait"
            );
        }
    }

    #[test]
    fn test_one_multiplier_is_constant() {
        let policy = BackoffPolicy::new(1);
        for attempt in 1..=5 {
            assert_eq!(policy.delay_for(attempt), Duration::from_secs(1));
        }
    }

    #[test]
    fn test_overflow_saturates() {
        let policy = BackoffPolicy::new(u64::MAX);
        assert_eq!(policy.delay_for(2), Duration::MAX);
    }
}
