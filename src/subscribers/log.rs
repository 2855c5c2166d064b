//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] prints supervisor events to stdout in a human-readable
//! format.
//!
//! ## Output format
//! ```text
//! [starting]    target=bench-01 attempt=1
//! [failed]      target=bench-01 attempt=1 err="install rejected"
//! [backoff]     target=bench-01 delay=3000ms after_attempt=1
//! [timeout]     target=bench-01 attempt=2 limit=600000ms
//! [target-lost] target=bench-01 err="property query returned no value..."
//! [succeeded]   target=bench-01 attempt=3
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Simple stdout logging subscriber.
///
/// Enabled via the `logging` feature. Not intended for production use —
/// implement a custom [`Subscribe`] for structured logging or metrics.
pub struct LogWriter;

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::AttemptStarting => {
                if let (Some(target), Some(att)) = (&e.target, e.attempt) {
                    println!("[starting]    target={target} attempt={att}");
                }
            }
            EventKind::SetupSucceeded => {
                if let (Some(target), Some(att)) = (&e.target, e.attempt) {
                    println!("[succeeded]   target={target} attempt={att}");
                }
            }
            EventKind::SetupFailed => {
                println!(
                    "[failed]      target={:?} attempt={:?} err={:?}",
                    e.target, e.attempt, e.reason
                );
            }
            EventKind::TimeoutHit => {
                println!(
                    "[timeout]     target={:?} attempt={:?} limit={:?}ms",
                    e.target, e.attempt, e.timeout_ms
                );
            }
            EventKind::TargetLost => {
                println!(
                    "[target-lost] target={:?} err={:?}",
                    e.target, e.reason
                );
            }
            EventKind::BackoffScheduled => {
                println!(
                    "[backoff]     target={:?} delay={:?}ms after_attempt={:?}",
                    e.target, e.delay_ms, e.attempt
                );
            }
            EventKind::Interrupted => {
                println!(
                    "[interrupted] target={:?} after_attempt={:?}",
                    e.target, e.attempt
                );
            }
        }
    }

    fn name(&self) -> &'static str {
        "log_writer"
    }
}
