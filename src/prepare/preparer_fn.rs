//! # Function-backed setup action (`PreparerFn`)
//!
//! [`PreparerFn`] wraps a closure `F: Fn(TargetRef, Arc<BuildContext>) -> Fut`,
//! producing a fresh future per attempt. Each attempt owns its own state;
//! shared state goes through an explicit `Arc` inside the closure.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use prepvisor::{BuildContext, Preparer, PreparerFn, PreparerRef, SetupError, TargetRef};
//!
//! let install: PreparerRef = PreparerFn::arc(
//!     "install-app",
//!     |_target: TargetRef, _build: Arc<BuildContext>| async move {
//!         // push artifacts, run the installer...
//!         Ok::<_, SetupError>(())
//!     },
//! );
//!
//! assert_eq!(install.name(), "install-app");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SetupError;
use crate::prepare::build::BuildContext;
use crate::prepare::preparer::Preparer;
use crate::target::TargetRef;

/// Function-backed setup action.
///
/// Wraps a closure that *creates* a new future per attempt.
#[derive(Debug)]
pub struct PreparerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> PreparerFn<F> {
    /// Creates a new function-backed setup action.
    ///
    /// Prefer [`PreparerFn::arc`] when you immediately need a
    /// [`PreparerRef`](crate::PreparerRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the action and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<F, Fut> Preparer for PreparerFn<F>
where
    F: Fn(TargetRef, Arc<BuildContext>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), SetupError>> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn set_up(
        &self,
        target: TargetRef,
        build: Arc<BuildContext>,
    ) -> Result<(), SetupError> {
        (self.f)(target, build).await
    }
}
