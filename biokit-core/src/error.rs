use thiserror::Error;

/// Namespace scoping every error produced by `BioKit`.
pub const BIOMETRICS_ERROR_DOMAIN: &str = "BiometricsErrorDomain";

/// Biometric authentication is not available on this device.
pub const UNAVAILABLE_ERROR_CODE: i64 = 1000;

/// The caller supplied an invalid argument (e.g. an empty feature name).
pub const INVALID_INPUT_ERROR_CODE: i64 = 1001;

/// The feature flag could not be read or persisted.
pub const FLAG_STORE_ERROR_CODE: i64 = 1002;

/// A foreign callback failed with an error it did not declare.
pub const UNEXPECTED_CALLBACK_ERROR_CODE: i64 = 1003;

/// A callback-style request could not be scheduled.
pub const DISPATCH_ERROR_CODE: i64 = 1004;

/// Error outputs from `BioKit`
#[derive(Debug, Clone, PartialEq, Eq, Error, uniffi::Error)]
pub enum BiometricError {
    /// Biometric hardware or enrollment is absent, or biometry is locked out.
    #[error("biometric authentication is unavailable on this device")]
    Unavailable,
    /// The presented input is not valid for the requested operation
    #[error("invalid_input_{attribute}: {reason}")]
    InvalidInput {
        /// The name of the offending argument.
        attribute: String,
        /// Why the argument was rejected.
        reason: String,
    },
    /// The feature flag could not be persisted
    #[error("flag_store_error: {0}")]
    FlagStore(String),
    /// The platform authentication service rejected or aborted the challenge.
    ///
    /// `code` is the platform's own error code, passed through unchanged
    /// (e.g. `LAError.userCancel` on iOS).
    #[error("platform_error_{code}: {reason}")]
    Platform {
        /// Platform-defined error code.
        code: i64,
        /// Human-readable reason reported by the platform.
        reason: String,
    },
    /// Unexpected `UniFFI` callback error.
    #[error("unexpected uniffi callback error: {0}")]
    UnexpectedUniFFICallbackError(String),
    /// No runtime was available to run a callback-style request.
    #[error("dispatch_error: {0}")]
    Dispatch(String),
}

impl BiometricError {
    /// Builds a [`BiometricError::Platform`] from a platform code and reason.
    #[must_use]
    pub fn platform(code: i64, reason: impl Into<String>) -> Self {
        Self::Platform {
            code,
            reason: reason.into(),
        }
    }

    /// The fixed error namespace, see [`BIOMETRICS_ERROR_DOMAIN`].
    #[must_use]
    pub const fn domain(&self) -> &'static str {
        BIOMETRICS_ERROR_DOMAIN
    }

    /// Numeric error code. Platform failures keep the platform's code.
    #[must_use]
    pub const fn code(&self) -> i64 {
        match self {
            Self::Unavailable => UNAVAILABLE_ERROR_CODE,
            Self::InvalidInput { .. } => INVALID_INPUT_ERROR_CODE,
            Self::FlagStore(_) => FLAG_STORE_ERROR_CODE,
            Self::Platform { code, .. } => *code,
            Self::UnexpectedUniFFICallbackError(_) => UNEXPECTED_CALLBACK_ERROR_CODE,
            Self::Dispatch(_) => DISPATCH_ERROR_CODE,
        }
    }

    /// Human-readable reason. Platform failures keep the platform's text.
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            Self::Platform { reason, .. } => reason.clone(),
            other => other.to_string(),
        }
    }
}

impl From<uniffi::UnexpectedUniFFICallbackError> for BiometricError {
    fn from(error: uniffi::UnexpectedUniFFICallbackError) -> Self {
        Self::UnexpectedUniFFICallbackError(error.reason)
    }
}

impl From<FlagStoreError> for BiometricError {
    fn from(error: FlagStoreError) -> Self {
        Self::FlagStore(error.to_string())
    }
}

/// Result type for feature flag storage operations.
pub type FlagStoreResult<T> = Result<T, FlagStoreError>;

/// Errors raised by feature flag storage.
#[derive(Debug, Error, uniffi::Error)]
pub enum FlagStoreError {
    /// Errors coming from the blob store.
    #[error("blob store error: {0}")]
    BlobStore(String),

    /// Serialization/deserialization failures.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The persisted flag record was written by an unknown format version.
    #[error("unsupported flag record version: {0}")]
    UnsupportedRecordVersion(u8),

    /// Unexpected `UniFFI` callback error.
    #[error("unexpected uniffi callback error: {0}")]
    UnexpectedUniFFICallbackError(String),
}

impl From<uniffi::UnexpectedUniFFICallbackError> for FlagStoreError {
    fn from(error: uniffi::UnexpectedUniFFICallbackError) -> Self {
        Self::UnexpectedUniFFICallbackError(error.reason)
    }
}

/// Flattened view of a [`BiometricError`] handed to foreign failure callbacks.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct AuthenticationFailure {
    /// Always [`BIOMETRICS_ERROR_DOMAIN`].
    pub domain: String,
    /// See [`BiometricError::code`].
    pub code: i64,
    /// See [`BiometricError::reason`].
    pub reason: String,
}

impl From<&BiometricError> for AuthenticationFailure {
    fn from(error: &BiometricError) -> Self {
        Self {
            domain: error.domain().to_string(),
            code: error.code(),
            reason: error.reason(),
        }
    }
}

/// Returns the error namespace shared by all `BioKit` errors.
#[uniffi::export]
#[must_use]
pub fn biometrics_error_domain() -> String {
    BIOMETRICS_ERROR_DOMAIN.to_string()
}

/// Returns the code reported when biometric authentication is unavailable.
#[uniffi::export]
#[must_use]
#[allow(clippy::missing_const_for_fn)]
pub fn unavailable_error_code() -> i64 {
    UNAVAILABLE_ERROR_CODE
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(BiometricError::Unavailable, UNAVAILABLE_ERROR_CODE ; "unavailable")]
    #[test_case(BiometricError::FlagStore("disk full".to_string()), FLAG_STORE_ERROR_CODE ; "flag store")]
    #[test_case(BiometricError::platform(-2, "user cancel"), -2 ; "platform passthrough")]
    #[test_case(BiometricError::UnexpectedUniFFICallbackError("boom".to_string()), UNEXPECTED_CALLBACK_ERROR_CODE ; "callback")]
    #[test_case(BiometricError::Dispatch("no runtime".to_string()), DISPATCH_ERROR_CODE ; "dispatch")]
    fn test_error_codes(error: BiometricError, expected: i64) {
        assert_eq!(error.code(), expected);
        assert_eq!(error.domain(), BIOMETRICS_ERROR_DOMAIN);
    }

    #[test]
    fn test_platform_reason_is_passed_through() {
        let error = BiometricError::platform(-1, "Application retry limit exceeded.");
        let failure = AuthenticationFailure::from(&error);
        assert_eq!(failure.code, -1);
        assert_eq!(failure.reason, "Application retry limit exceeded.");
        assert_eq!(failure.domain, BIOMETRICS_ERROR_DOMAIN);
    }

    #[test]
    fn test_flag_store_error_maps_to_flag_store_code() {
        let error: BiometricError =
            FlagStoreError::BlobStore("write failed".to_string()).into();
        assert_eq!(error.code(), FLAG_STORE_ERROR_CODE);
        assert!(error.reason().contains("write failed"));
    }
}
