//! # Core subscriber trait
//!
//! `Subscribe` is the extension point for plugging event handlers into the
//! supervisor: logging, metrics, lab dashboards. Subscribers attached via
//! [`RetryingPreparer::with_subscribers`](crate::RetryingPreparer::with_subscribers)
//! are driven by a listener task fed from the event bus.
//!
//! One invocation publishes a handful of events, so subscribers are awaited
//! directly; a slow subscriber delays later events, not the retry loop
//! itself.

use async_trait::async_trait;

use crate::events::Event;

/// Contract for event subscribers.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Handles a single event.
    ///
    /// # Parameters
    /// - `event`: Reference to the event (does not transfer ownership)
    async fn on_event(&self, event: &Event);

    /// Human-readable name (for logs/metrics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
