//! Error types used by the setup supervisor and its collaborators.
//!
//! This module defines three error types:
//!
//! - [`PrepError`] — terminal outcomes surfaced by the retry orchestration.
//! - [`SetupError`] — the domain error of the wrapped setup action.
//! - [`TargetError`] — failures reported by the device under test.
//!
//! [`PrepError`] provides helper methods (`as_label`, `attempt`) for
//! logging/metrics and [`PrepError::is_retryable`] for classifying which
//! outcomes the orchestrator recovers from.

use std::time::Duration;
use thiserror::Error;

/// # Terminal outcomes of one supervised setup invocation.
///
/// Every runtime variant records the attempt number it occurred on, and the
/// variants that wrap a lower-level failure chain it via `source`, so a log
/// line distinguishes "ran out of retries" from "target went away" from
/// "setup explicitly rejected".
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum PrepError {
    /// A configuration knob was negative. No attempt was made.
    #[error("{option} ({value}) must not be negative")]
    InvalidOption {
        /// Name of the rejected configuration field.
        option: &'static str,
        /// The offending value.
        value: i64,
    },

    /// The setup action failed with its own domain error (retryable).
    #[error("setup failed on attempt {attempt}: {source}")]
    Setup {
        /// Attempt the failure occurred on (1-based).
        attempt: u32,
        /// The setup action's error, unchanged.
        #[source]
        source: SetupError,
    },

    /// The attempt exceeded its per-attempt deadline (retryable).
    #[error("setup attempt {attempt} timed out after {timeout:?}")]
    Timeout {
        /// Attempt the deadline expired on (1-based).
        attempt: u32,
        /// The deadline that was exceeded.
        timeout: Duration,
    },

    /// The target is no longer reachable; retrying was abandoned.
    #[error("target unreachable after attempt {attempt}: {source}")]
    TargetUnreachable {
        /// Attempt whose failure triggered the liveness check.
        attempt: u32,
        /// The liveness failure (replaces the attempt's own cause).
        #[source]
        source: TargetError,
    },

    /// The backoff wait was cancelled; the invocation is over.
    #[error("interrupted while backing off after attempt {attempt}")]
    Interrupted {
        /// Attempt after which the wait was cancelled.
        attempt: u32,
    },
}

impl PrepError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use prepvisor::PrepError;
    ///
    /// let err = PrepError::Interrupted { attempt: 2 };
    /// assert_eq!(err.as_label(), "prep_interrupted");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            PrepError::InvalidOption { .. } => "prep_invalid_option",
            PrepError::Setup { .. } => "prep_setup_failed",
            PrepError::Timeout { .. } => "prep_timeout",
            PrepError::TargetUnreachable { .. } => "prep_target_unreachable",
            PrepError::Interrupted { .. } => "prep_interrupted",
        }
    }

    /// Returns the attempt number the error occurred on, if any attempt ran.
    ///
    /// [`PrepError::InvalidOption`] is produced before the first attempt and
    /// has no attempt number.
    pub fn attempt(&self) -> Option<u32> {
        match self {
            PrepError::InvalidOption { .. } => None,
            PrepError::Setup { attempt, .. }
            | PrepError::Timeout { attempt, .. }
            | PrepError::TargetUnreachable { attempt, .. }
            | PrepError::Interrupted { attempt } => Some(*attempt),
        }
    }

    /// Indicates whether the orchestrator recovers from this error kind.
    ///
    /// Returns `true` for [`PrepError::Setup`] and [`PrepError::Timeout`];
    /// both consume retry budget the same way. Everything else ends the
    /// invocation on first occurrence.
    ///
    /// # Example
    /// ```
    /// use prepvisor::{PrepError, SetupError};
    ///
    /// let retryable = PrepError::Setup {
    ///     attempt: 1,
    ///     source: SetupError::new("install rejected"),
    /// };
    /// assert!(retryable.is_retryable());
    ///
    /// let fatal = PrepError::Interrupted { attempt: 1 };
    /// assert!(!fatal.is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        matches!(self, PrepError::Setup { .. } | PrepError::Timeout { .. })
    }
}

/// # Domain error of the wrapped setup action.
///
/// Produced by [`Preparer`](crate::Preparer) implementations; carries a
/// message and an optional underlying cause.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct SetupError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SetupError {
    /// Creates a setup error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a setup error wrapping an underlying cause.
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// # Failures reported by the device under test.
///
/// Returned by [`Target`](crate::Target) operations and by the liveness
/// probe's interpretation of their results.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum TargetError {
    /// A property query returned no value at all.
    #[error("property query returned no value; connection to the target may be lost")]
    NoResponse,

    /// The target did not become reachable within the bounded wait.
    #[error("target did not become reachable within {timeout:?}")]
    Unresponsive {
        /// The wait limit that elapsed.
        timeout: Duration,
    },

    /// The transport to the target failed outright.
    #[error("transport failure: {reason}")]
    Transport {
        /// Human-readable description of the transport failure.
        reason: String,
    },
}
