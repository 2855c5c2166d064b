//! # Injectable sleep strategy.
//!
//! The backoff wait goes through [`Sleeper`] so tests can substitute a
//! recording fake that captures requested durations instead of actually
//! sleeping. [`TokioSleeper`] is the default.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time;

/// Strategy for suspending the retry loop between attempts.
#[async_trait]
pub trait Sleeper: Send + Sync + 'static {
    /// Suspends the caller for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Default sleeper backed by the tokio timer.
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        time::sleep(duration).await;
    }
}
