//! Snapshot store implementations
//!
//! The browser build backs [`SnapshotStore`] with origin-local storage;
//! these in-memory adapters implement the same contract for native use
//! and tests, including the envelope format and the unavailable-store
//! failure mode.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use solis_common::InquirySnapshot;

use crate::ports::outbound::{SnapshotStore, StoreError};

/// Namespaced key the inquiry snapshot is stored under.
pub const STORAGE_KEY: &str = "solis-contact-form";

/// Envelope schema version. Bump when `InquirySnapshot`'s persisted shape
/// changes; a mismatched envelope reads as no saved data.
const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct StoredSnapshot {
    version: u32,
    form: InquirySnapshot,
}

/// In-memory key-value snapshot store.
pub struct InMemorySnapshotStore {
    entries: RwLock<HashMap<String, String>>,
    key: String,
}

impl InMemorySnapshotStore {
    /// Create a store using the default storage key.
    pub fn new() -> Self {
        Self::with_key(STORAGE_KEY)
    }

    /// Create a store under a custom key.
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            key: key.into(),
        }
    }

    /// Raw serialized entry, for tests and diagnostics.
    pub fn raw(&self) -> Option<String> {
        let entries = self.entries.read().unwrap();
        entries.get(&self.key).cloned()
    }

    /// Insert a raw serialized entry, bypassing the envelope.
    pub fn put_raw(&self, value: impl Into<String>) {
        let mut entries = self.entries.write().unwrap();
        entries.insert(self.key.clone(), value.into());
    }
}

impl Default for InMemorySnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn save(&self, snapshot: &InquirySnapshot) -> Result<(), StoreError> {
        let stored = StoredSnapshot {
            version: SNAPSHOT_VERSION,
            form: snapshot.clone(),
        };
        let encoded =
            serde_json::to_string(&stored).map_err(|e| StoreError::Serialization(e.to_string()))?;

        let mut entries = self.entries.write().unwrap();
        entries.insert(self.key.clone(), encoded);
        Ok(())
    }

    async fn load(&self) -> Result<Option<InquirySnapshot>, StoreError> {
        let encoded = {
            let entries = self.entries.read().unwrap();
            entries.get(&self.key).cloned()
        };
        let encoded = match encoded {
            Some(encoded) => encoded,
            None => return Ok(None),
        };

        // Unparsable or mismatched envelopes read as absent rather than
        // failing the restore path.
        match serde_json::from_str::<StoredSnapshot>(&encoded) {
            Ok(stored) if stored.version == SNAPSHOT_VERSION => Ok(Some(stored.form)),
            Ok(stored) => {
                tracing::warn!(version = stored.version, "discarding saved inquiry with stale schema");
                Ok(None)
            }
            Err(e) => {
                tracing::warn!(error = %e, "discarding unparsable saved inquiry");
                Ok(None)
            }
        }
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let mut entries = self.entries.write().unwrap();
        entries.remove(&self.key);
        Ok(())
    }
}

/// A store that always fails, mirroring storage disabled by browser
/// privacy mode.
pub struct UnavailableSnapshotStore;

#[async_trait]
impl SnapshotStore for UnavailableSnapshotStore {
    async fn save(&self, _snapshot: &InquirySnapshot) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("storage disabled".into()))
    }

    async fn load(&self) -> Result<Option<InquirySnapshot>, StoreError> {
        Err(StoreError::Unavailable("storage disabled".into()))
    }

    async fn clear(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("storage disabled".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solis_common::FieldName;

    #[tokio::test]
    async fn test_save_load_clear_round_trip() {
        let store = InMemorySnapshotStore::new();

        let mut snapshot = InquirySnapshot::new();
        snapshot.set(FieldName::Name, "Asha");
        snapshot.set(FieldName::Phone, "(555) 123-4567");

        store.save(&snapshot).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(snapshot));

        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_envelope_carries_schema_version() {
        let store = InMemorySnapshotStore::new();
        store.save(&InquirySnapshot::new()).await.unwrap();

        let raw = store.raw().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 1);
    }

    #[tokio::test]
    async fn test_stale_version_reads_as_absent() {
        let store = InMemorySnapshotStore::new();
        store.put_raw(r#"{"version":99,"form":{"name":"Asha"}}"#);
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unparsable_entry_reads_as_absent() {
        let store = InMemorySnapshotStore::new();
        store.put_raw("not json at all");
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unavailable_store_errors_on_every_operation() {
        let store = UnavailableSnapshotStore;
        assert!(store.save(&InquirySnapshot::new()).await.is_err());
        assert!(store.load().await.is_err());
        assert!(store.clear().await.is_err());
    }
}
