//! # Lifecycle events emitted by the setup supervisor.
//!
//! [`EventKind`] classifies the stages of one supervised invocation:
//! attempt start, per-attempt outcome, liveness verdict, backoff
//! scheduling, and interruption. [`Event`] carries the metadata each kind
//! sets (target serial, attempt number, reason text, durations).
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically; use it to restore order when events are observed from
//! multiple receivers.

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of supervisor events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// An attempt is starting.
    ///
    /// Sets: `target`, `attempt`.
    AttemptStarting,

    /// The attempt completed successfully; the invocation is over.
    ///
    /// Sets: `target`, `attempt`.
    SetupSucceeded,

    /// The attempt failed with the setup action's own error.
    ///
    /// Sets: `target`, `attempt`, `reason`.
    SetupFailed,

    /// The attempt exceeded its deadline and was abandoned.
    ///
    /// Sets: `target`, `attempt`, `timeout_ms`.
    TimeoutHit,

    /// The liveness check decided the target is gone; retrying stops.
    ///
    /// Sets: `target`, `attempt`, `reason`.
    TargetLost,

    /// A retry is scheduled after the current failure.
    ///
    /// Sets: `target`, `attempt` (the failed one), `delay_ms`, `reason`.
    BackoffScheduled,

    /// The backoff wait was cancelled; the invocation is over.
    ///
    /// Sets: `target`, `attempt`.
    Interrupted,
}

/// Supervisor event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,

    /// Serial of the device under test.
    pub target: Option<Arc<str>>,
    /// Attempt count (starting from 1).
    pub attempt: Option<u32>,
    /// Human-readable reason (failure messages, liveness verdicts).
    pub reason: Option<Arc<str>>,
    /// Per-attempt deadline in milliseconds (compact).
    pub timeout_ms: Option<u32>,
    /// Backoff delay before the next attempt in milliseconds (compact).
    pub delay_ms: Option<u32>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next
    /// sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            target: None,
            attempt: None,
            reason: None,
            timeout_ms: None,
            delay_ms: None,
        }
    }

    /// Attaches the target serial.
    #[inline]
    pub fn with_target(mut self, target: impl Into<Arc<str>>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Attaches an attempt count.
    #[inline]
    pub fn with_attempt(mut self, n: u32) -> Self {
        self.attempt = Some(n);
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attaches a per-attempt deadline (stored as milliseconds).
    #[inline]
    pub fn with_timeout(mut self, d: Duration) -> Self {
        let ms = d.as_millis().min(u128::from(u32::MAX)) as u32;
        self.timeout_ms = Some(ms);
        self
    }

    /// Attaches a backoff delay (stored as milliseconds).
    #[inline]
    pub fn with_delay(mut self, d: Duration) -> Self {
        let ms = d.as_millis().min(u128::from(u32::MAX)) as u32;
        self.delay_ms = Some(ms);
        self
    }
}
