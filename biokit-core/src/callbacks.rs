//! Fire-and-forget variants of the façade calls for hosts that use completion
//! handlers instead of `async`.
//!
//! The request is spawned on the caller's tokio runtime when there is one,
//! otherwise on a small background runtime owned by `BioKit`. The outcome is
//! delivered later from that runtime.

use std::future::Future;
use std::sync::{Arc, OnceLock};

use log::error;
use tokio::runtime::{Builder, Handle, Runtime};

use crate::{AuthenticationFailure, BiometricError};

/// Completion handlers for one façade call. Exactly one of them is invoked,
/// exactly once.
#[uniffi::export(with_foreign)]
pub trait AuthenticationCallbacks: Send + Sync {
    /// The operation succeeded.
    fn on_success(&self);

    /// The operation failed with `failure`.
    fn on_failure(&self, failure: AuthenticationFailure);
}

/// Runtime for requests issued outside any tokio context (e.g. from the
/// Swift main thread). Never dropped.
static CALLBACK_RUNTIME: OnceLock<Option<Runtime>> = OnceLock::new();

fn callback_runtime() -> Option<Handle> {
    if let Ok(handle) = Handle::try_current() {
        return Some(handle);
    }
    CALLBACK_RUNTIME
        .get_or_init(|| {
            Builder::new_multi_thread()
                .worker_threads(1)
                .thread_name("biokit-callbacks")
                .enable_all()
                .build()
                .inspect_err(|err| error!("failed to start callback runtime: {err}"))
                .ok()
        })
        .as_ref()
        .map(|runtime| runtime.handle().clone())
}

/// Hands `result` to exactly one of the callbacks.
pub(crate) fn deliver(result: Result<(), BiometricError>, callbacks: &dyn AuthenticationCallbacks) {
    match result {
        Ok(()) => callbacks.on_success(),
        Err(error) => callbacks.on_failure(AuthenticationFailure::from(&error)),
    }
}

/// Spawns `operation` and returns immediately; its outcome goes to `callbacks`.
pub(crate) fn spawn_with_callbacks<F>(operation: F, callbacks: Arc<dyn AuthenticationCallbacks>)
where
    F: Future<Output = Result<(), BiometricError>> + Send + 'static,
{
    match callback_runtime() {
        Some(handle) => {
            handle.spawn(async move {
                deliver(operation.await, callbacks.as_ref());
            });
        }
        None => deliver(
            Err(BiometricError::Dispatch(
                "no runtime available to run the request".to_string(),
            )),
            callbacks.as_ref(),
        ),
    }
}
