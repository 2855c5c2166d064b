//! # Event bus for broadcasting supervisor lifecycle events.
//!
//! [`Bus`] is a thin wrapper around [`tokio::sync::broadcast`]. The
//! supervisor publishes from the retry loop and the attempt runner;
//! receivers are the optional subscriber listener plus anything the caller
//! attaches via [`Bus::subscribe`].
//!
//! ## Rules
//! - **Non-blocking publish**: `publish()` never waits for receivers.
//! - **Bounded capacity**: a single ring buffer holds recent events; slow
//!   receivers observe `RecvError::Lagged(n)` and skip the `n` oldest items.
//! - **No persistence**: events published with no active receiver are lost.

use tokio::sync::broadcast;

use super::event::Event;

/// Broadcast channel for supervisor events.
///
/// Cheap to clone (internally holds an `Arc`-backed sender); every receiver
/// observes its own copy of each event published after it subscribed.
#[derive(Clone, Debug)]
pub struct Bus {
    tx: broadcast::Sender<Event>,
}

impl Bus {
    /// Creates a new bus with the given channel capacity (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, _rx) = broadcast::channel::<Event>(capacity);
        Self { tx }
    }

    /// Publishes an event to all active receivers.
    ///
    /// Returns immediately; with no receivers the event is dropped.
    pub fn publish(&self, ev: Event) {
        let _ = self.tx.send(ev);
    }

    /// Creates a new receiver observing subsequent events.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}
