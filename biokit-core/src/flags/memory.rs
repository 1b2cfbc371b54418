//! In-memory implementations of the flag storage ports for testing.
//!
//! Nothing here outlives the process; use them in tests or in builds where
//! the host has no durable storage wired up yet.

// Allow certain clippy lints for test-only code
#![allow(clippy::missing_panics_doc)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use super::{AtomicBlobStore, FeatureFlagStore};
use crate::{FlagStoreError, FlagStoreResult};

// =============================================================================
// Memory Feature Flag Store
// =============================================================================

/// [`FeatureFlagStore`] backed by a `HashMap`.
pub struct MemoryFeatureFlagStore {
    flags: RwLock<HashMap<String, bool>>,
    fail_writes: AtomicBool,
}

impl MemoryFeatureFlagStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            flags: RwLock::new(HashMap::new()),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Makes every subsequent `set` fail, simulating a full or locked disk.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of features ever written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.read().unwrap().len()
    }

    /// Returns `true` if nothing was ever written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.read().unwrap().is_empty()
    }
}

impl Default for MemoryFeatureFlagStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureFlagStore for MemoryFeatureFlagStore {
    fn get(&self, feature_name: String) -> FlagStoreResult<Option<bool>> {
        Ok(self.flags.read().unwrap().get(&feature_name).copied())
    }

    fn set(&self, feature_name: String, enabled: bool) -> FlagStoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(FlagStoreError::BlobStore("simulated write failure".to_string()));
        }
        self.flags.write().unwrap().insert(feature_name, enabled);
        Ok(())
    }
}

// =============================================================================
// Memory Blob Store
// =============================================================================

/// In-memory atomic blob store backed by a `HashMap`.
pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    /// Creates a new empty memory blob store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            blobs: RwLock::new(HashMap::new()),
        }
    }

    /// Returns a list of all blob names.
    #[must_use]
    pub fn list(&self) -> Vec<String> {
        self.blobs.read().unwrap().keys().cloned().collect()
    }
}

impl Default for MemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AtomicBlobStore for MemoryBlobStore {
    fn read(&self, name: String) -> FlagStoreResult<Option<Vec<u8>>> {
        Ok(self.blobs.read().unwrap().get(&name).cloned())
    }

    fn write_atomic(&self, name: String, bytes: Vec<u8>) -> FlagStoreResult<()> {
        self.blobs.write().unwrap().insert(name, bytes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_store_write_failure_leaves_value() {
        let store = MemoryFeatureFlagStore::new();
        store.set("wallet".to_string(), true).expect("set");
        store.set_fail_writes(true);
        assert!(store.set("wallet".to_string(), false).is_err());
        assert_eq!(store.get("wallet".to_string()).expect("get"), Some(true));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_blob_store_overwrites() {
        let store = MemoryBlobStore::new();
        store.write_atomic("a".to_string(), vec![1]).expect("write");
        store.write_atomic("a".to_string(), vec![2]).expect("write");
        assert_eq!(store.read("a".to_string()).expect("read"), Some(vec![2]));
        assert_eq!(store.read("b".to_string()).expect("read"), None);
    }
}
