//! Common test utilities shared across integration tests.
#![allow(missing_docs)]

use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

use biokit_core::flags::memory::{MemoryBlobStore, MemoryFeatureFlagStore};
use biokit_core::platform::memory::MemoryAuthenticator;
use biokit_core::{AuthenticationCallbacks, AuthenticationFailure, BiometricAuthenticationFacade};

/// Records every callback invocation in order.
#[derive(Default)]
pub struct RecordingCallbacks {
    events: Mutex<Vec<Result<(), AuthenticationFailure>>>,
    delivered: Condvar,
}

impl RecordingCallbacks {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<Result<(), AuthenticationFailure>> {
        self.events.lock().expect("events lock").clone()
    }

    /// Blocks until at least `count` callbacks fired, or five seconds passed.
    pub fn wait_for_events(&self, count: usize) -> Vec<Result<(), AuthenticationFailure>> {
        let guard = self.events.lock().expect("events lock");
        let (guard, _) = self
            .delivered
            .wait_timeout_while(guard, Duration::from_secs(5), |events| {
                events.len() < count
            })
            .expect("events lock");
        guard.clone()
    }
}

impl AuthenticationCallbacks for RecordingCallbacks {
    fn on_success(&self) {
        self.events.lock().expect("events lock").push(Ok(()));
        self.delivered.notify_all();
    }

    fn on_failure(&self, failure: AuthenticationFailure) {
        self.events.lock().expect("events lock").push(Err(failure));
        self.delivered.notify_all();
    }
}

pub struct Harness {
    pub facade: Arc<BiometricAuthenticationFacade>,
    pub authenticator: Arc<MemoryAuthenticator>,
    pub flags: Arc<MemoryFeatureFlagStore>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_authenticator(MemoryAuthenticator::new())
    }

    pub fn unavailable() -> Self {
        Self::with_authenticator(MemoryAuthenticator::unavailable())
    }

    fn with_authenticator(authenticator: MemoryAuthenticator) -> Self {
        let authenticator = Arc::new(authenticator);
        let flags = Arc::new(MemoryFeatureFlagStore::new());
        let facade = Arc::new(BiometricAuthenticationFacade::new(
            authenticator.clone(),
            flags.clone(),
        ));
        Self {
            facade,
            authenticator,
            flags,
        }
    }
}

/// Builds a façade over `blobs`, as the host would on every app launch.
pub fn blob_backed_facade(
    authenticator: Arc<MemoryAuthenticator>,
    blobs: Arc<MemoryBlobStore>,
) -> BiometricAuthenticationFacade {
    BiometricAuthenticationFacade::with_blob_store(authenticator, blobs)
}
