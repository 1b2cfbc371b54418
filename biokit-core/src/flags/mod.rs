//! Per-feature "authentication required" flags.
//!
//! A flag maps a caller-defined feature name to a boolean. A feature that was
//! never written reads as `false`. The storage medium belongs to the host;
//! `BioKit` reaches it through one of two ports:
//!
//! - [`FeatureFlagStore`]: the host keeps the mapping itself
//!   (`UserDefaults`, `SharedPreferences`, Keychain, ...).
//! - [`AtomicBlobStore`]: the host only offers atomic blob persistence, and
//!   [`BlobFeatureFlagStore`] keeps the whole mapping in a single blob.

mod blob;
pub mod memory;
mod record;

pub use blob::{BlobFeatureFlagStore, FEATURE_FLAGS_FILENAME};

use crate::FlagStoreResult;

/// Durable `feature name → enabled` mapping.
#[uniffi::export(with_foreign)]
pub trait FeatureFlagStore: Send + Sync {
    /// Reads the flag for `feature_name`, `None` when it was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read.
    fn get(&self, feature_name: String) -> FlagStoreResult<Option<bool>>;

    /// Persists the flag for `feature_name`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn set(&self, feature_name: String, enabled: bool) -> FlagStoreResult<()>;
}

/// Atomic blob store for small binary files (e.g., `feature_flags.bin`).
///
/// Writes MUST be atomic: a reader sees either the complete old content or
/// the complete new content, never a partial write.
#[uniffi::export(with_foreign)]
pub trait AtomicBlobStore: Send + Sync {
    /// Reads the blob named `name`, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn read(&self, name: String) -> FlagStoreResult<Option<Vec<u8>>>;

    /// Writes bytes atomically to `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn write_atomic(&self, name: String, bytes: Vec<u8>) -> FlagStoreResult<()>;
}
