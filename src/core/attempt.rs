//! # Run a single setup attempt under a deadline.
//!
//! Executes one attempt of a [`Preparer`](crate::Preparer) with an optional
//! deadline, publishes the attempt's terminal event, and classifies the
//! result into an [`AttemptOutcome`].
//!
//! The work runs on its own spawned task so the caller can bound the wait
//! independently of the work itself. A deadline expiry abandons the wait:
//! the spawned task is detached, not aborted, and may keep running in the
//! background until it finishes on its own.
//!
//! ## Rules
//! - Publishes **exactly one** terminal event per attempt:
//!   `SetupSucceeded`, `SetupFailed`, or `TimeoutHit`
//! - A deadline of `None` waits for the work without limit
//! - A panicking setup pass is reported as a failure, not propagated

use std::sync::Arc;
use std::time::Duration;

use tokio::time;

use crate::error::SetupError;
use crate::events::{Bus, Event, EventKind};
use crate::prepare::{BuildContext, PreparerRef};
use crate::target::TargetRef;

/// Result of one attempt, consumed immediately by the retry loop.
#[derive(Debug)]
pub(crate) enum AttemptOutcome {
    /// The setup pass completed.
    Success,
    /// The setup pass returned its own error.
    Failure(SetupError),
    /// The deadline elapsed; the pass was abandoned mid-flight.
    Timeout(Duration),
}

/// Executes a single attempt of `preparer`, publishing its terminal event.
///
/// ### Flow
/// 1. Spawn the setup pass with its own clones of the work inputs
/// 2. Wait for it, bounded by `deadline` when one is configured
/// 3. Publish the terminal event and classify the result
pub(crate) async fn run_attempt(
    preparer: &PreparerRef,
    target: &TargetRef,
    build: &Arc<BuildContext>,
    deadline: Option<Duration>,
    attempt: u32,
    bus: &Bus,
) -> AttemptOutcome {
    let work = {
        let preparer = Arc::clone(preparer);
        let target = Arc::clone(target);
        let build = Arc::clone(build);
        tokio::spawn(async move { preparer.set_up(target, build).await })
    };

    let joined = match deadline {
        Some(limit) => match time::timeout(limit, work).await {
            Ok(joined) => joined,
            Err(_elapsed) => {
                // The expired pass is detached, not aborted; whatever it was
                // doing may still finish in the background.
                publish_timeout(bus, target.serial(), limit, attempt);
                return AttemptOutcome::Timeout(limit);
            }
        },
        None => work.await,
    };

    match joined {
        Ok(Ok(())) => {
            publish_succeeded(bus, target.serial(), attempt);
            AttemptOutcome::Success
        }
        Ok(Err(source)) => {
            publish_failed(bus, target.serial(), attempt, &source);
            AttemptOutcome::Failure(source)
        }
        Err(join) => {
            let source = SetupError::new(format!("setup task aborted: {join}"));
            publish_failed(bus, target.serial(), attempt, &source);
            AttemptOutcome::Failure(source)
        }
    }
}

/// Publishes `SetupSucceeded`.
fn publish_succeeded(bus: &Bus, serial: &str, attempt: u32) {
    bus.publish(
        Event::new(EventKind::SetupSucceeded)
            .with_target(serial)
            .with_attempt(attempt),
    );
}

/// Publishes `SetupFailed` with the failure message.
fn publish_failed(bus: &Bus, serial: &str, attempt: u32, err: &SetupError) {
    bus.publish(
        Event::new(EventKind::SetupFailed)
            .with_target(serial)
            .with_attempt(attempt)
            .with_reason(err.to_string()),
    );
}

/// Publishes `TimeoutHit`.
fn publish_timeout(bus: &Bus, serial: &str, limit: Duration, attempt: u32) {
    bus.publish(
        Event::new(EventKind::TimeoutHit)
            .with_target(serial)
            .with_attempt(attempt)
            .with_timeout(limit),
    );
}
