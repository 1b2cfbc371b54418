use std::fmt;
use std::sync::{Arc, Mutex};

use super::record::FeatureFlagRecord;
use super::{AtomicBlobStore, FeatureFlagStore};
use crate::{FlagStoreError, FlagStoreResult};

/// Name of the blob holding the serialized flag mapping.
pub const FEATURE_FLAGS_FILENAME: &str = "feature_flags.bin";

/// [`FeatureFlagStore`] keeping every flag in one blob of an [`AtomicBlobStore`].
///
/// Updates are read-modify-write of the whole mapping; they are serialized
/// within this instance so concurrent writes to different features never
/// drop each other.
pub struct BlobFeatureFlagStore {
    blob_store: Arc<dyn AtomicBlobStore>,
    write_lock: Mutex<()>,
}

impl fmt::Debug for BlobFeatureFlagStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlobFeatureFlagStore").finish_non_exhaustive()
    }
}

impl BlobFeatureFlagStore {
    /// Wraps `blob_store`.
    #[must_use]
    pub fn new(blob_store: Arc<dyn AtomicBlobStore>) -> Self {
        Self {
            blob_store,
            write_lock: Mutex::new(()),
        }
    }

    fn load(&self) -> FlagStoreResult<FeatureFlagRecord> {
        match self.blob_store.read(FEATURE_FLAGS_FILENAME.to_string())? {
            Some(bytes) => FeatureFlagRecord::deserialize(&bytes),
            None => Ok(FeatureFlagRecord::new()),
        }
    }
}

impl FeatureFlagStore for BlobFeatureFlagStore {
    fn get(&self, feature_name: String) -> FlagStoreResult<Option<bool>> {
        Ok(self.load()?.flags.get(&feature_name).copied())
    }

    fn set(&self, feature_name: String, enabled: bool) -> FlagStoreResult<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| FlagStoreError::BlobStore("flag store lock poisoned".to_string()))?;
        let mut record = self.load()?;
        record.flags.insert(feature_name, enabled);
        self.blob_store
            .write_atomic(FEATURE_FLAGS_FILENAME.to_string(), record.serialize()?)
    }
}
