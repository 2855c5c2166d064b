//! # Device-under-test abstraction.
//!
//! [`Target`] is the supervisor's view of the remote device: an identity, a
//! property query (the cheapest round-trip the transport offers), and a
//! bounded wait for the device to come back. The common handle type is
//! [`TargetRef`], an `Arc<dyn Target>` suitable for sharing with the
//! spawned attempt.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::TargetError;

/// Shared handle to a device under test.
pub type TargetRef = Arc<dyn Target>;

/// # Remote device surface used by the supervisor.
///
/// Implementations wrap whatever transport reaches the device (adb, ssh, a
/// lab scheduler). The liveness prober only interprets results; it never
/// assumes anything about the transport.
#[async_trait]
pub trait Target: Send + Sync + 'static {
    /// Returns the device serial (stable identity for logs/events).
    fn serial(&self) -> &str;

    /// Queries a single device property.
    ///
    /// Returns `Ok(None)` when the device answers with no value at all. An
    /// `Err` means the transport itself failed.
    async fn property(&self, key: &str) -> Result<Option<String>, TargetError>;

    /// Blocks until the device is reachable, up to `timeout`.
    ///
    /// Returns [`TargetError::Unresponsive`] (or a transport error) when the
    /// wait elapses without the device coming back.
    async fn wait_until_reachable(&self, timeout: Duration) -> Result<(), TargetError>;
}
