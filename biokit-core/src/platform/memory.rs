//! In-memory platform authenticator for testing.
//!
//! Lets tests and simulator builds script the outcome of every challenge
//! without a biometric sensor.

// Allow certain clippy lints for test-only code
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::significant_drop_tightening)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::BiometricError;

use super::PlatformAuthenticator;

/// `LAError.authenticationFailed`: the presented biometric did not match.
pub const AUTHENTICATION_FAILED_CODE: i64 = -1;

/// `LAError.userCancel`: the user dismissed the prompt.
pub const USER_CANCEL_CODE: i64 = -2;

/// Scriptable authenticator.
///
/// - availability is a toggle (available by default),
/// - each challenge pops the next scripted outcome, succeeding when the
///   script is empty,
/// - every reason it was challenged with is recorded in order.
pub struct MemoryAuthenticator {
    available: AtomicBool,
    outcomes: Mutex<VecDeque<Result<(), BiometricError>>>,
    challenges: Mutex<Vec<String>>,
}

impl MemoryAuthenticator {
    /// Creates an available authenticator that accepts every challenge.
    #[must_use]
    pub fn new() -> Self {
        Self {
            available: AtomicBool::new(true),
            outcomes: Mutex::new(VecDeque::new()),
            challenges: Mutex::new(Vec::new()),
        }
    }

    /// Creates an authenticator reporting that biometrics are unavailable.
    #[must_use]
    pub fn unavailable() -> Self {
        let authenticator = Self::new();
        authenticator.set_available(false);
        authenticator
    }

    /// Toggles availability, e.g. to simulate the user disabling biometrics.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Queues the outcome of the next unscripted challenge.
    pub fn push_outcome(&self, outcome: Result<(), BiometricError>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    /// Queues a failed match for the next challenge.
    pub fn push_failed_match(&self) {
        self.push_outcome(Err(BiometricError::platform(
            AUTHENTICATION_FAILED_CODE,
            "Application retry limit exceeded.",
        )));
    }

    /// Queues a user cancellation for the next challenge.
    pub fn push_user_cancel(&self) {
        self.push_outcome(Err(BiometricError::platform(
            USER_CANCEL_CODE,
            "Canceled by user.",
        )));
    }

    /// Reasons shown for every challenge so far, oldest first.
    #[must_use]
    pub fn challenges(&self) -> Vec<String> {
        self.challenges.lock().unwrap().clone()
    }

    /// Number of challenges dispatched so far.
    #[must_use]
    pub fn challenge_count(&self) -> usize {
        self.challenges.lock().unwrap().len()
    }
}

impl Default for MemoryAuthenticator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl PlatformAuthenticator for MemoryAuthenticator {
    fn can_evaluate(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    async fn evaluate(&self, reason: String) -> Result<(), BiometricError> {
        self.challenges.lock().unwrap().push(reason);
        self.outcomes.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unscripted_challenge_succeeds() {
        let authenticator = MemoryAuthenticator::new();
        assert!(authenticator.can_evaluate());
        authenticator
            .evaluate("Unlock".to_string())
            .await
            .expect("default outcome is success");
        assert_eq!(authenticator.challenges(), vec!["Unlock".to_string()]);
    }

    #[tokio::test]
    async fn test_scripted_outcomes_are_consumed_in_order() {
        let authenticator = MemoryAuthenticator::new();
        authenticator.push_failed_match();
        authenticator.push_user_cancel();

        let first = authenticator.evaluate("a".to_string()).await.unwrap_err();
        let second = authenticator.evaluate("b".to_string()).await.unwrap_err();
        let third = authenticator.evaluate("c".to_string()).await;

        assert_eq!(first.code(), AUTHENTICATION_FAILED_CODE);
        assert_eq!(second.code(), USER_CANCEL_CODE);
        assert!(third.is_ok());
        assert_eq!(authenticator.challenge_count(), 3);
    }

    #[test]
    fn test_availability_toggle() {
        let authenticator = MemoryAuthenticator::unavailable();
        assert!(!authenticator.can_evaluate());
        authenticator.set_available(true);
        assert!(authenticator.can_evaluate());
    }
}
