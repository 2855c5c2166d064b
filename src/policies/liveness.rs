//! # Liveness policy: is retrying this target worthwhile?
//!
//! [`LivenessPolicy`] decides, after a failed attempt, whether the target is
//! still there to retry against. Retrying an unreachable device is useless
//! work, so an unreachable verdict ends the invocation immediately.
//!
//! - [`LivenessPolicy::Disabled`] — never consult the target (default).
//! - [`LivenessPolicy::Probe`] — one property query; no response means the
//!   device is gone.
//! - [`LivenessPolicy::WaitFor`] — block until the device is reachable
//!   again, up to a configured number of seconds. A negative value skips
//!   the check entirely.
//!
//! The three modes are mutually exclusive by construction.

use std::time::Duration;

use crate::error::TargetError;
use crate::target::TargetRef;

/// Any property works here; only the presence of a response matters.
const PROBE_PROPERTY: &str = "any_key";

/// Policy for checking target reachability after a failed attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LivenessPolicy {
    /// Never check; every failure proceeds to the budget check.
    Disabled,

    /// Issue a single property query and require any response.
    Probe,

    /// Wait until the target is reachable, up to `seconds`.
    ///
    /// `seconds < 0` skips the check (treated as reachable).
    WaitFor {
        /// Wait limit in seconds; negative disables the check.
        seconds: i64,
    },
}

impl Default for LivenessPolicy {
    /// Returns [`LivenessPolicy::Disabled`].
    fn default() -> Self {
        LivenessPolicy::Disabled
    }
}

impl LivenessPolicy {
    /// Resolves the raw configuration pair into a single policy.
    ///
    /// The single-query probe takes precedence over the bounded wait when
    /// both are requested; `wait_for_reachable_secs < 0` with no probe means
    /// disabled.
    pub fn from_options(legacy_probe: bool, wait_for_reachable_secs: i64) -> Self {
        if legacy_probe {
            LivenessPolicy::Probe
        } else if wait_for_reachable_secs >= 0 {
            LivenessPolicy::WaitFor {
                seconds: wait_for_reachable_secs,
            }
        } else {
            LivenessPolicy::Disabled
        }
    }

    /// Checks whether the target is still worth retrying against.
    ///
    /// Returns `Err` when the target is unreachable; the error replaces the
    /// failure that triggered the check.
    pub(crate) async fn verify(&self, target: &TargetRef) -> Result<(), TargetError> {
        match self {
            LivenessPolicy::Disabled => Ok(()),
            LivenessPolicy::Probe => match target.property(PROBE_PROPERTY).await? {
                Some(_) => Ok(()),
                None => Err(TargetError::NoResponse),
            },
            LivenessPolicy::WaitFor { seconds } if *seconds < 0 => Ok(()),
            LivenessPolicy::WaitFor { seconds } => {
                target
                    .wait_until_reachable(Duration::from_secs(*seconds as u64))
                    .await
            }
        }
    }
}
