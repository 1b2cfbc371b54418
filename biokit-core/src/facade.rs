//! The façade through which applications gate features behind biometrics.

use std::fmt;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::callbacks::{spawn_with_callbacks, AuthenticationCallbacks};
use crate::flags::{AtomicBlobStore, BlobFeatureFlagStore, FeatureFlagStore};
use crate::platform::PlatformAuthenticator;
use crate::BiometricError;

/// Prompt text used when enabling authentication for a feature.
pub const DEFAULT_ENABLE_REASON: &str = "Confirm your identity to enable authentication";

/// Gates named application features behind the platform's biometric prompt.
///
/// Create one at application start and share it. Every call is an
/// independent request to the platform; the façade keeps no session state.
///
/// Calls that challenge the user first check availability and fail with
/// [`BiometricError::Unavailable`] without prompting when biometrics cannot
/// be evaluated. Challenge failures are forwarded with the platform's own
/// code. Flags only change after a successful challenge.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
///
/// use biokit_core::flags::memory::MemoryFeatureFlagStore;
/// use biokit_core::platform::memory::MemoryAuthenticator;
/// use biokit_core::BiometricAuthenticationFacade;
///
/// let facade = BiometricAuthenticationFacade::new(
///     Arc::new(MemoryAuthenticator::new()),
///     Arc::new(MemoryFeatureFlagStore::new()),
/// );
///
/// tokio_test::block_on(async {
///     facade.enable_authentication_for_feature("wallet".to_string()).await.unwrap();
/// });
/// assert!(facade.is_authentication_enabled_for_feature("wallet"));
/// ```
#[derive(uniffi::Object)]
pub struct BiometricAuthenticationFacade {
    authenticator: Arc<dyn PlatformAuthenticator>,
    flags: Arc<dyn FeatureFlagStore>,
}

impl fmt::Debug for BiometricAuthenticationFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BiometricAuthenticationFacade")
            .finish_non_exhaustive()
    }
}

impl BiometricAuthenticationFacade {
    fn ensure_available(&self) -> Result<(), BiometricError> {
        if self.authenticator.can_evaluate() {
            Ok(())
        } else {
            debug!("biometric authentication unavailable, skipping challenge");
            Err(BiometricError::Unavailable)
        }
    }

    fn validate_feature_name(feature_name: &str) -> Result<(), BiometricError> {
        if feature_name.trim().is_empty() {
            return Err(BiometricError::InvalidInput {
                attribute: "feature_name".to_string(),
                reason: "feature name must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Availability is checked before the name so that an unavailable device
    /// reports `Unavailable` for every input.
    fn preflight(&self, feature_name: &str) -> Result<(), BiometricError> {
        self.ensure_available()?;
        Self::validate_feature_name(feature_name)
    }

    async fn challenge(&self, reason: String) -> Result<(), BiometricError> {
        debug!("dispatching biometric challenge");
        self.authenticator.evaluate(reason).await.inspect_err(|err| {
            debug!("biometric challenge failed with code {}", err.code());
        })
    }

    async fn set_flag_with_challenge(
        &self,
        feature_name: String,
        enabled: bool,
        reason: String,
    ) -> Result<(), BiometricError> {
        self.preflight(&feature_name)?;
        self.challenge(reason).await?;
        self.flags.set(feature_name.clone(), enabled)?;
        info!("authentication for feature {feature_name} set to {enabled}");
        Ok(())
    }
}

#[uniffi::export(async_runtime = "tokio")]
impl BiometricAuthenticationFacade {
    /// Creates a façade over the platform authenticator and a flag store.
    #[uniffi::constructor]
    #[must_use]
    pub fn new(
        authenticator: Arc<dyn PlatformAuthenticator>,
        flags: Arc<dyn FeatureFlagStore>,
    ) -> Self {
        Self {
            authenticator,
            flags,
        }
    }

    /// Creates a façade persisting flags through an [`AtomicBlobStore`].
    #[uniffi::constructor]
    #[must_use]
    pub fn with_blob_store(
        authenticator: Arc<dyn PlatformAuthenticator>,
        blob_store: Arc<dyn AtomicBlobStore>,
    ) -> Self {
        Self::new(
            authenticator,
            Arc::new(BlobFeatureFlagStore::new(blob_store)),
        )
    }

    /// Whether a biometric challenge can be evaluated right now.
    ///
    /// The answer can change at any time (e.g. the user removes their
    /// fingerprints), so do not cache it.
    #[must_use]
    pub fn is_authentication_available(&self) -> bool {
        self.authenticator.can_evaluate()
    }

    /// Whether `feature_name` currently requires biometric confirmation.
    ///
    /// Returns `false` for empty names, for features never enabled, and when
    /// the flag store cannot be read.
    #[must_use]
    pub fn is_authentication_enabled_for_feature(&self, feature_name: &str) -> bool {
        if Self::validate_feature_name(feature_name).is_err() {
            return false;
        }
        match self.flags.get(feature_name.to_string()) {
            Ok(enabled) => enabled.unwrap_or(false),
            Err(err) => {
                warn!("failed to read authentication flag for {feature_name}: {err}");
                false
            }
        }
    }

    /// Requires biometric confirmation for `feature_name` from now on.
    ///
    /// Challenges the user with [`DEFAULT_ENABLE_REASON`] and stores the flag
    /// once the challenge succeeds.
    ///
    /// # Errors
    ///
    /// - [`BiometricError::Unavailable`] when biometrics cannot be evaluated.
    /// - [`BiometricError::InvalidInput`] when `feature_name` is empty.
    /// - [`BiometricError::Platform`] when the challenge fails or is cancelled.
    /// - [`BiometricError::FlagStore`] when the flag cannot be persisted.
    pub async fn enable_authentication_for_feature(
        &self,
        feature_name: String,
    ) -> Result<(), BiometricError> {
        self.set_flag_with_challenge(feature_name, true, DEFAULT_ENABLE_REASON.to_string())
            .await
    }

    /// Stops requiring biometric confirmation for `feature_name`.
    ///
    /// Turning protection off also needs a successful challenge, so an
    /// unattended unlocked device cannot silently drop it. `reason` is shown
    /// in the prompt.
    ///
    /// # Errors
    ///
    /// Same as [`Self::enable_authentication_for_feature`].
    pub async fn disable_authentication_for_feature(
        &self,
        feature_name: String,
        reason: String,
    ) -> Result<(), BiometricError> {
        self.set_flag_with_challenge(feature_name, false, reason).await
    }

    /// Confirms the user may access `feature_name`.
    ///
    /// Features without authentication enabled succeed without a prompt.
    /// Otherwise exactly one challenge showing `reason` decides the outcome.
    /// Flags are never changed.
    ///
    /// # Errors
    ///
    /// - [`BiometricError::Unavailable`] when biometrics cannot be evaluated.
    /// - [`BiometricError::InvalidInput`] when `feature_name` is empty.
    /// - [`BiometricError::Platform`] when the challenge fails or is cancelled.
    /// - [`BiometricError::FlagStore`] when the flag cannot be read.
    pub async fn authenticate_for_access_to_feature(
        &self,
        feature_name: String,
        reason: String,
    ) -> Result<(), BiometricError> {
        self.preflight(&feature_name)?;
        // An unreadable flag must not open the gate.
        if !self.flags.get(feature_name.clone())?.unwrap_or(false) {
            debug!("authentication not enabled for {feature_name}, granting access");
            return Ok(());
        }
        self.challenge(reason).await
    }

    /// Starts [`Self::enable_authentication_for_feature`] and returns immediately.
    ///
    /// The outcome is later delivered to exactly one of `callbacks`, from a
    /// runtime thread rather than the calling one.
    pub fn enable_authentication_for_feature_with_callbacks(
        self: Arc<Self>,
        feature_name: String,
        callbacks: Arc<dyn AuthenticationCallbacks>,
    ) {
        spawn_with_callbacks(
            async move { self.enable_authentication_for_feature(feature_name).await },
            callbacks,
        );
    }

    /// Starts [`Self::disable_authentication_for_feature`] and returns immediately.
    ///
    /// See [`Self::enable_authentication_for_feature_with_callbacks`].
    pub fn disable_authentication_for_feature_with_callbacks(
        self: Arc<Self>,
        feature_name: String,
        reason: String,
        callbacks: Arc<dyn AuthenticationCallbacks>,
    ) {
        spawn_with_callbacks(
            async move {
                self.disable_authentication_for_feature(feature_name, reason)
                    .await
            },
            callbacks,
        );
    }

    /// Starts [`Self::authenticate_for_access_to_feature`] and returns immediately.
    ///
    /// See [`Self::enable_authentication_for_feature_with_callbacks`].
    pub fn authenticate_for_access_to_feature_with_callbacks(
        self: Arc<Self>,
        feature_name: String,
        reason: String,
        callbacks: Arc<dyn AuthenticationCallbacks>,
    ) {
        spawn_with_callbacks(
            async move {
                self.authenticate_for_access_to_feature(feature_name, reason)
                    .await
            },
            callbacks,
        );
    }
}
