//! Supervisor core: orchestration and attempt execution.
//!
//! Internal modules:
//! - [`attempt`]: executes one attempt under a deadline, publishes its event;
//! - [`orchestrator`]: the retry loop (validate, attempt, probe, back off);
//! - [`sleeper`]: injectable sleep strategy for the backoff wait;
//! - [`shutdown`]: OS signal helper for wiring interruption.

mod attempt;
mod orchestrator;
mod shutdown;
mod sleeper;

pub use orchestrator::RetryingPreparer;
pub use shutdown::wait_for_interrupt;
pub use sleeper::{Sleeper, TokioSleeper};
