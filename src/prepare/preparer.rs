//! # Setup-action abstraction.
//!
//! [`Preparer`] is the unit of work the supervisor retries: one fallible
//! setup pass against a device under test. The common handle type is
//! [`PreparerRef`], an `Arc<dyn Preparer>` suitable for handing to the
//! spawned attempt.
//!
//! A preparer may block indefinitely; the per-attempt deadline is enforced
//! from outside, and a timed-out pass is abandoned rather than cancelled.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{PrepError, SetupError};
use crate::prepare::build::BuildContext;
use crate::target::TargetRef;

/// Shared handle to a setup action.
pub type PreparerRef = Arc<dyn Preparer>;

/// # One fallible setup pass against a device under test.
///
/// Implementations do the actual work — locating artifacts, pushing them,
/// invoking the device's install routine. The supervisor only cares about
/// the `Result`.
#[async_trait]
pub trait Preparer: Send + Sync + 'static {
    /// Returns a stable, human-readable name for this setup action.
    fn name(&self) -> &str;

    /// Performs one setup pass.
    ///
    /// Called once per attempt; a fresh call must be safe after a previous
    /// one failed, timed out, or is still running in the background.
    async fn set_up(&self, target: TargetRef, build: Arc<BuildContext>)
        -> Result<(), SetupError>;

    /// Undoes whatever `set_up` did.
    ///
    /// Invoked once, never retried, with the invocation's terminal error (if
    /// any) for context. The default does nothing.
    async fn tear_down(
        &self,
        target: TargetRef,
        cause: Option<&PrepError>,
    ) -> Result<(), SetupError> {
        let _ = (target, cause);
        Ok(())
    }
}
