//! # Supervisor configuration.
//!
//! Provides [`PrepConfig`], the knobs for one supervised setup invocation.
//!
//! The numeric knobs are deliberately signed: values typically arrive from a
//! config-loading layer as raw integers, and [`PrepConfig::validate`] — not
//! the type system — is the gate that rejects negative values before any
//! attempt runs.
//!
//! ## Sentinel values
//! - `setup_timeout_millis = 0` → the attempt runs unbounded (no deadline)
//! - `LivenessPolicy::Disabled` → failures never consult the target

use std::time::Duration;

use crate::error::PrepError;
use crate::policies::LivenessPolicy;

/// Configuration for a [`RetryingPreparer`](crate::RetryingPreparer).
///
/// ## Field semantics
/// - `max_retries`: additional attempts permitted after the first (`0` = run once)
/// - `backoff_multiplier_secs`: wait `multiplier^attempt` seconds between attempts
/// - `setup_timeout_millis`: per-attempt deadline (`0` = unbounded; applies to
///   each attempt separately, never to the whole invocation)
/// - `liveness`: how to decide, after a failure, whether retrying is worthwhile
/// - `bus_capacity`: lifecycle event ring buffer size (min 1; clamped)
#[derive(Clone, Debug)]
pub struct PrepConfig {
    /// Max number of retries upon a setup failure or timeout.
    pub max_retries: i32,

    /// Exponential backoff multiplier in seconds.
    ///
    /// A value `n` means the supervisor waits `n^attempt` seconds before
    /// retrying, where `attempt` counts the failures so far (from 1).
    pub backoff_multiplier_secs: i32,

    /// Deadline for a single setup attempt, in milliseconds.
    ///
    /// Not a global limit: each retry gets a fresh deadline. `0` disables
    /// the deadline entirely.
    pub setup_timeout_millis: i64,

    /// Liveness policy consulted after each failed attempt.
    pub liveness: LivenessPolicy,

    /// Capacity of the lifecycle event channel.
    pub bus_capacity: usize,
}

impl PrepConfig {
    /// Rejects negative knobs before any attempt runs.
    ///
    /// # Example
    /// ```
    /// use prepvisor::PrepConfig;
    ///
    /// let mut config = PrepConfig::default();
    /// config.max_retries = -1;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), PrepError> {
        check_non_negative(i64::from(self.max_retries), "max_retries")?;
        check_non_negative(
            i64::from(self.backoff_multiplier_secs),
            "backoff_multiplier_secs",
        )?;
        check_non_negative(self.setup_timeout_millis, "setup_timeout_millis")?;
        Ok(())
    }

    /// Returns the per-attempt deadline as an `Option`.
    ///
    /// - `None` → no deadline
    /// - `Some(d)` → deadline applied per attempt
    #[inline]
    pub fn setup_timeout(&self) -> Option<Duration> {
        match self.setup_timeout_millis {
            ms if ms > 0 => Some(Duration::from_millis(ms as u64)),
            _ => None,
        }
    }

    /// Returns a bus capacity clamped to a minimum of 1.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }
}

impl Default for PrepConfig {
    /// Default configuration:
    ///
    /// - `max_retries = 0` (run once)
    /// - `backoff_multiplier_secs = 0` (retry immediately)
    /// - `setup_timeout_millis = 600_000` (10 minutes per attempt)
    /// - `liveness = LivenessPolicy::Disabled`
    /// - `bus_capacity = 1024`
    fn default() -> Self {
        Self {
            max_retries: 0,
            backoff_multiplier_secs: 0,
            setup_timeout_millis: 600_000,
            liveness: LivenessPolicy::Disabled,
            bus_capacity: 1024,
        }
    }
}

fn check_non_negative(value: i64, option: &'static str) -> Result<(), PrepError> {
    if value < 0 {
        Err(PrepError::InvalidOption { option, value })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PrepConfig::default();
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.backoff_multiplier_secs, 0);
        assert_eq!(config.setup_timeout_millis, 600_000);
        assert_eq!(config.liveness, LivenessPolicy::Disabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_max_retries() {
        let mut config = PrepConfig::default();
        config.max_retries = -1;
        match config.validate() {
            Err(PrepError::InvalidOption { option, value }) => {
                assert_eq!(option, "max_retries");
                assert_eq!(value, -1);
            }
            other => panic!("expected InvalidOption, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_negative_backoff_multiplier() {
        let mut config = PrepConfig::default();
        config.backoff_multiplier_secs = -3;
        match config.validate() {
            Err(PrepError::InvalidOption { option, .. }) => {
                assert_eq!(option, "backoff_multiplier_secs");
            }
            other => panic!("expected InvalidOption, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_negative_timeout() {
        let mut config = PrepConfig::default();
        config.setup_timeout_millis = -600_000;
        match config.validate() {
            Err(PrepError::InvalidOption { option, .. }) => {
                assert_eq!(option, "setup_timeout_millis");
            }
            other => panic!("expected InvalidOption, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_timeout_means_unbounded() {
        let mut config = PrepConfig::default();
        config.setup_timeout_millis = 0;
        assert_eq!(config.setup_timeout(), None);
    }

    #[test]
    fn test_timeout_converts_to_duration() {
        let mut config = PrepConfig::default();
        config.setup_timeout_millis = 1_500;
        assert_eq!(config.setup_timeout(), Some(Duration::from_millis(1_500)));
    }

    #[test]
    fn test_bus_capacity_clamps_to_one() {
        let mut config = PrepConfig::default();
        config.bus_capacity = 0;
        assert_eq!(config.bus_capacity_clamped(), 1);
    }
}
