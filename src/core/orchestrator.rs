//! # RetryingPreparer: supervised setup with retries.
//!
//! Supervises one setup invocation against a device under test:
//! - per-attempt deadline via [`run_attempt`](crate::core::attempt),
//! - exponential pauses per [`BackoffPolicy`],
//! - liveness checks per [`LivenessPolicy`],
//! - cooperative interruption via [`CancellationToken`] during backoff.
//!
//! ## Lifecycle
//! ```text
//! RetryingPreparer::set_up(target, build, interrupt)
//!
//! validate config (reject negative knobs, no attempt made)
//! loop {
//!   ├─► attempt += 1
//!   ├─► publish AttemptStarting{ target, attempt }
//!   ├─► run_attempt(preparer, deadline)
//!   │       │
//!   │       ├─ Success ──► return Ok(())
//!   │       └─ Failure/Timeout ──► record cause
//!   │
//!   ├─► liveness.verify(target)
//!   │       └─ unreachable ──► publish TargetLost, return TargetUnreachable
//!   │
//!   ├─► attempt > max_retries ──► return recorded cause
//!   │
//!   └─► publish BackoffScheduled, sleep multiplier^attempt seconds
//!           └─ interrupted ──► publish Interrupted, return Interrupted
//! }
//! ```
//!
//! ## Rules
//! - Attempts run **strictly sequentially**; attempt N+1 never starts before
//!   attempt N's outcome (liveness check and backoff included) has resolved
//! - Liveness is checked **before** the budget check, so an unreachable
//!   target aborts even on what would have been the last permitted retry
//! - Exactly **one terminal outcome** per invocation; no cause is dropped

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::select;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

use crate::config::PrepConfig;
use crate::core::attempt::{run_attempt, AttemptOutcome};
use crate::core::sleeper::{Sleeper, TokioSleeper};
use crate::error::{PrepError, SetupError};
use crate::events::{Bus, Event, EventKind};
use crate::policies::BackoffPolicy;
use crate::prepare::{BuildContext, PreparerRef};
use crate::subscribers::Subscribe;
use crate::target::TargetRef;

/// Supervises a [`Preparer`](crate::Preparer) with retries, per-attempt
/// deadlines, backoff, and liveness checks.
///
/// ### Responsibilities
/// - **Validation**: rejects invalid configuration before the first attempt
/// - **Execution**: runs attempts via [`run_attempt`], one at a time
/// - **Liveness**: stops retrying once the target is gone
/// - **Budget**: permits `max_retries` attempts beyond the first
/// - **Event publishing**: reports the full lifecycle to the bus
pub struct RetryingPreparer {
    config: PrepConfig,
    inner: PreparerRef,
    sleeper: Arc<dyn Sleeper>,
    bus: Bus,
    subscribers: Vec<Arc<dyn Subscribe>>,
    listener_started: AtomicBool,
}

impl RetryingPreparer {
    /// Creates a supervisor around `inner` with the given configuration.
    pub fn new(config: PrepConfig, inner: PreparerRef) -> Self {
        let bus = Bus::new(config.bus_capacity_clamped());
        Self {
            config,
            inner,
            sleeper: Arc::new(TokioSleeper),
            bus,
            subscribers: Vec::new(),
            listener_started: AtomicBool::new(false),
        }
    }

    /// Replaces the sleep strategy used for backoff waits.
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Attaches subscribers that observe lifecycle events.
    ///
    /// The listener driving them starts with the first `set_up` call and
    /// stops when the supervisor is dropped.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Creates a receiver observing this supervisor's lifecycle events.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.bus.subscribe()
    }

    /// Runs the setup action until success, budget exhaustion, liveness
    /// abort, or interruption.
    ///
    /// Exactly one terminal outcome is produced per invocation:
    /// - `Ok(())` — some attempt succeeded
    /// - [`PrepError::InvalidOption`] — configuration rejected, nothing ran
    /// - [`PrepError::Setup`] / [`PrepError::Timeout`] — the last attempt's
    ///   own failure, after the budget ran out
    /// - [`PrepError::TargetUnreachable`] — the target went away; this
    ///   replaces the in-flight cause
    /// - [`PrepError::Interrupted`] — `interrupt` fired during a backoff wait
    ///
    /// `interrupt` is only observed while backing off; an attempt that is
    /// already running is never cancelled by it.
    pub async fn set_up(
        &self,
        target: TargetRef,
        build: Arc<BuildContext>,
        interrupt: CancellationToken,
    ) -> Result<(), PrepError> {
        self.config.validate()?;
        self.start_listener();

        let deadline = self.config.setup_timeout();
        let max_retries = self.config.max_retries as u32;
        let backoff = BackoffPolicy::new(self.config.backoff_multiplier_secs as u64);

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            self.bus.publish(
                Event::new(EventKind::AttemptStarting)
                    .with_target(target.serial())
                    .with_attempt(attempt),
            );

            let outcome =
                run_attempt(&self.inner, &target, &build, deadline, attempt, &self.bus).await;
            let cause = match outcome {
                AttemptOutcome::Success => return Ok(()),
                AttemptOutcome::Failure(source) => PrepError::Setup { attempt, source },
                AttemptOutcome::Timeout(timeout) => PrepError::Timeout { attempt, timeout },
            };

            if let Err(source) = self.config.liveness.verify(&target).await {
                self.bus.publish(
                    Event::new(EventKind::TargetLost)
                        .with_target(target.serial())
                        .with_attempt(attempt)
                        .with_reason(source.to_string()),
                );
                return Err(PrepError::TargetUnreachable { attempt, source });
            }

            if attempt > max_retries {
                return Err(cause);
            }

            self.back_off(&target, &interrupt, &backoff, attempt, &cause)
                .await?;
        }
    }

    /// Tears down whatever the inner setup action did. Pass-through, never
    /// retried.
    pub async fn tear_down(
        &self,
        target: TargetRef,
        cause: Option<&PrepError>,
    ) -> Result<(), SetupError> {
        self.inner.tear_down(target, cause).await
    }

    /// Waits `multiplier^attempt` seconds before the next attempt.
    ///
    /// Cancellation during the wait is fatal for the invocation; it is the
    /// only point at which `interrupt` is observed.
    async fn back_off(
        &self,
        target: &TargetRef,
        interrupt: &CancellationToken,
        backoff: &BackoffPolicy,
        attempt: u32,
        cause: &PrepError,
    ) -> Result<(), PrepError> {
        let delay = backoff.delay_for(attempt);
        self.bus.publish(
            Event::new(EventKind::BackoffScheduled)
                .with_target(target.serial())
                .with_attempt(attempt)
                .with_delay(delay)
                .with_reason(cause.to_string()),
        );

        select! {
            _ = self.sleeper.sleep(delay) => Ok(()),
            _ = interrupt.cancelled() => {
                self.bus.publish(
                    Event::new(EventKind::Interrupted)
                        .with_target(target.serial())
                        .with_attempt(attempt),
                );
                Err(PrepError::Interrupted { attempt })
            }
        }
    }

    /// Starts the subscriber listener once, on first use.
    ///
    /// The listener exits when the bus closes along with its supervisor.
    fn start_listener(&self) {
        if self.subscribers.is_empty() || self.listener_started.swap(true, Ordering::SeqCst) {
            return;
        }
        let mut rx = self.bus.subscribe();
        let subscribers = self.subscribers.clone();
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(ev) => {
                        for sub in &subscribers {
                            sub.on_event(&ev).await;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });
    }
}
