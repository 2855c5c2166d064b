//! # prepvisor
//!
//! **Prepvisor** supervises a fallible, time-bounded setup action against a
//! device under test: it retries failures with exponential backoff, enforces
//! a per-attempt deadline, and optionally probes the target's liveness to
//! stop retrying once the device is gone.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌────────────────┐     ┌───────────────┐
//!     │   PrepConfig   │     │ Preparer impl │ (install artifacts, ...)
//!     │ (retry knobs)  │     │ (unit of work)│
//!     └───────┬────────┘     └───────┬───────┘
//!             ▼                      ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │  RetryingPreparer (retry orchestrator)                  │
//! │  - validates config before the first attempt            │
//! │  - runs attempts sequentially under a deadline          │
//! │  - probes target liveness after each failure            │
//! │  - paces retries with multiplier^attempt backoff        │
//! └──────┬──────────────────┬──────────────────┬────────────┘
//!        ▼                  ▼                  ▼
//!   run_attempt       LivenessPolicy      Sleeper strategy
//!   (spawned work,    (property probe /   (interruptible via
//!    bounded wait)     bounded wait)       CancellationToken)
//!        │
//!        │ Publishes Events: AttemptStarting, SetupFailed,
//!        │ TimeoutHit, BackoffScheduled, TargetLost, ...
//!        ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                Bus (broadcast channel)                  │
//! └──────────────────────────┬──────────────────────────────┘
//!                            ▼
//!                 subscribers (Subscribe impls)
//! ```
//!
//! ### Lifecycle
//! ```text
//! RetryingPreparer::set_up(target, build, interrupt)
//!
//! validate config ──► InvalidOption (no attempt runs)
//! loop {
//!   ├─► attempt += 1
//!   ├─► run_attempt(preparer, deadline)
//!   │       ├─ Ok      ──► return Ok(())
//!   │       ├─ Err     ──► cause = Setup{attempt}
//!   │       └─ expired ──► cause = Timeout{attempt}   (work detached)
//!   ├─► liveness check ──► unreachable ─► return TargetUnreachable
//!   ├─► attempt > max_retries ──► return cause
//!   └─► sleep multiplier^attempt ──► interrupted ─► return Interrupted
//! }
//! ```
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use async_trait::async_trait;
//! use tokio_util::sync::CancellationToken;
//! use prepvisor::{
//!     BuildContext, LivenessPolicy, PrepConfig, PreparerFn, PreparerRef,
//!     RetryingPreparer, SetupError, Target, TargetError, TargetRef,
//! };
//!
//! struct BenchDevice;
//!
//! #[async_trait]
//! impl Target for BenchDevice {
//!     fn serial(&self) -> &str { "bench-01" }
//!
//!     async fn property(&self, _key: &str) -> Result<Option<String>, TargetError> {
//!         Ok(Some("ready".into()))
//!     }
//!
//!     async fn wait_until_reachable(&self, _timeout: Duration) -> Result<(), TargetError> {
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let install: PreparerRef = PreparerFn::arc(
//!         "install-app",
//!         |_target: TargetRef, _build: Arc<BuildContext>| async move {
//!             // locate artifacts, push them, run the installer...
//!             Ok::<_, SetupError>(())
//!         },
//!     );
//!
//!     let mut config = PrepConfig::default();
//!     config.max_retries = 3;
//!     config.backoff_multiplier_secs = 2;
//!     config.liveness = LivenessPolicy::WaitFor { seconds: 30 };
//!
//!     let supervisor = RetryingPreparer::new(config, install);
//!
//!     let target: TargetRef = Arc::new(BenchDevice);
//!     let build = Arc::new(BuildContext::new());
//!     supervisor.set_up(target, build, CancellationToken::new()).await?;
//!     Ok(())
//! }
//! ```

mod config;
mod core;
mod error;
mod events;
mod policies;
mod prepare;
mod subscribers;
mod target;

// ---- Public re-exports ----

pub use self::config::PrepConfig;
pub use self::core::{wait_for_interrupt, RetryingPreparer, Sleeper, TokioSleeper};
pub use self::error::{PrepError, SetupError, TargetError};
pub use self::events::{Bus, Event, EventKind};
pub use self::policies::{BackoffPolicy, LivenessPolicy};
pub use self::prepare::{BuildContext, Preparer, PreparerFn, PreparerRef};
pub use self::subscribers::Subscribe;
pub use self::target::{Target, TargetRef};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use self::subscribers::LogWriter;
