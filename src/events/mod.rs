//! Lifecycle events and the broadcast bus that carries them.
//!
//! - [`Event`] / [`EventKind`] — what happened, with per-kind metadata
//! - [`Bus`] — bounded broadcast channel for publishing/observing events

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
