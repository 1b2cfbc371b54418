//! Platform abstraction for the host's biometric authentication service.
//!
//! The sensor, the secure matching and the prompt UI all belong to the host
//! operating system. `BioKit` only needs two capabilities from it, captured by
//! [`PlatformAuthenticator`]:
//!
//! - whether a biometric challenge can currently be evaluated, and
//! - evaluating one challenge with a user-facing reason.
//!
//! # Platform Implementations
//!
//! ## iOS (Swift)
//! - `can_evaluate`: `LAContext.canEvaluatePolicy(.deviceOwnerAuthenticationWithBiometrics)`
//! - `evaluate`: `LAContext.evaluatePolicy(_:localizedReason:)`, mapping
//!   `LAError.code` to [`BiometricError::Platform`]
//!
//! ## Android (Kotlin)
//! - `can_evaluate`: `BiometricManager.canAuthenticate(BIOMETRIC_STRONG) == BIOMETRIC_SUCCESS`
//! - `evaluate`: `BiometricPrompt` with the reason as subtitle, mapping
//!   `onAuthenticationError(errorCode, errString)` to [`BiometricError::Platform`]

use crate::BiometricError;

pub mod memory;

/// The host's biometric authentication service.
#[uniffi::export(with_foreign)]
#[async_trait::async_trait]
pub trait PlatformAuthenticator: Send + Sync {
    /// Returns `true` when a biometric challenge can be evaluated right now.
    ///
    /// Must reflect the current device state (sensor present, at least one
    /// biometric enrolled, not locked out). Callers do not cache the answer.
    fn can_evaluate(&self) -> bool;

    /// Presents one biometric challenge showing `reason` to the user.
    ///
    /// Resolves once the platform has a final answer.
    ///
    /// # Errors
    ///
    /// Returns [`BiometricError::Platform`] carrying the platform's own code
    /// when the match fails, the user or system cancels, or biometry locks out.
    async fn evaluate(&self, reason: String) -> Result<(), BiometricError>;
}
