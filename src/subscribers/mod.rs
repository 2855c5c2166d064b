//! Event consumers.
//!
//! - [`Subscribe`] — trait for custom event handlers
//! - [`LogWriter`] — built-in stdout subscriber (feature `logging`)

mod subscribe;

pub use subscribe::Subscribe;

#[cfg(feature = "logging")]
mod log;
#[cfg(feature = "logging")]
pub use log::LogWriter;
