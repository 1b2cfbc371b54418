//! Versioned on-disk encoding of the feature flag mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{FlagStoreError, FlagStoreResult};

const FLAG_RECORD_VERSION: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct FeatureFlagRecord {
    pub(crate) version: u8,
    pub(crate) flags: BTreeMap<String, bool>,
}

impl FeatureFlagRecord {
    pub(crate) const fn new() -> Self {
        Self {
            version: FLAG_RECORD_VERSION,
            flags: BTreeMap::new(),
        }
    }

    pub(crate) fn serialize(&self) -> FlagStoreResult<Vec<u8>> {
        let mut bytes = Vec::new();
        ciborium::ser::into_writer(self, &mut bytes)
            .map_err(|err| FlagStoreError::Serialization(err.to_string()))?;
        Ok(bytes)
    }

    pub(crate) fn deserialize(bytes: &[u8]) -> FlagStoreResult<Self> {
        let record: Self = ciborium::de::from_reader(bytes)
            .map_err(|err| FlagStoreError::Serialization(err.to_string()))?;
        if record.version != FLAG_RECORD_VERSION {
            return Err(FlagStoreError::UnsupportedRecordVersion(record.version));
        }
        Ok(record)
    }
}
