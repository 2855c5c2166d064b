//! Setup-action abstractions.
//!
//! - [`Preparer`] - trait for the retried setup pass (and its teardown)
//! - [`PreparerFn`] - closure-backed implementation
//! - [`PreparerRef`] - shared reference (`Arc<dyn Preparer>`)
//! - [`BuildContext`] - build attributes handed to each attempt

mod build;
mod preparer;
mod preparer_fn;

pub use build::BuildContext;
pub use preparer::{Preparer, PreparerRef};
pub use preparer_fn::PreparerFn;
