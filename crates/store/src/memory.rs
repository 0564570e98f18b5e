//! In-process document store
//!
//! Used by tests and offline runs. Implements the merge and
//! timestamp-if-absent contract natively: both happen under one lock, so
//! there is no race window between the existence check and the write.

use crate::error::{StoreError, StoreResult};
use crate::store::{Document, DocumentFields, DocumentStore, WriteOutcome};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Inner {
    documents: HashMap<(String, String), Document>,
    failing_keys: HashSet<String>,
}

/// In-memory [`DocumentStore`]. Cheap to clone; clones share state.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a document back. Test and inspection helper; the write path
    /// goes through [`DocumentStore::merge_set`] only.
    pub fn document(&self, collection: &str, key: &str) -> Option<Document> {
        let inner = self.inner.lock().expect("memory store lock poisoned");
        inner
            .documents
            .get(&(collection.to_string(), key.to_string()))
            .cloned()
    }

    /// Number of documents in a collection.
    pub fn len(&self, collection: &str) -> usize {
        let inner = self.inner.lock().expect("memory store lock poisoned");
        inner
            .documents
            .keys()
            .filter(|(c, _)| c == collection)
            .count()
    }

    /// Whether a collection is empty.
    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }

    /// Make writes to `key` fail with [`StoreError::Unavailable`]. Lets
    /// tests exercise per-record failure isolation.
    pub fn fail_key(&self, key: impl Into<String>) {
        let mut inner = self.inner.lock().expect("memory store lock poisoned");
        inner.failing_keys.insert(key.into());
    }

    /// Stop failing writes to `key`.
    pub fn heal_key(&self, key: &str) {
        let mut inner = self.inner.lock().expect("memory store lock poisoned");
        inner.failing_keys.remove(key);
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn merge_set(
        &self,
        collection: &str,
        key: &str,
        fields: DocumentFields,
    ) -> StoreResult<WriteOutcome> {
        let mut inner = self.inner.lock().expect("memory store lock poisoned");
        if inner.failing_keys.contains(key) {
            return Err(StoreError::Unavailable(format!(
                "injected failure for key {key}"
            )));
        }

        let map_key = (collection.to_string(), key.to_string());
        match inner.documents.get_mut(&map_key) {
            Some(existing) => {
                for (field, value) in fields {
                    existing.fields.insert(field, value);
                }
                Ok(WriteOutcome::Updated)
            }
            None => {
                inner.documents.insert(
                    map_key,
                    Document {
                        fields,
                        created_at: Utc::now(),
                    },
                );
                Ok(WriteOutcome::Created)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: serde_json::Value) -> DocumentFields {
        value.as_object().cloned().expect("object literal")
    }

    #[tokio::test]
    async fn test_create_then_update() {
        let store = MemoryStore::new();
        let outcome = store
            .merge_set("foods", "pho", fields(json!({"name": "Phở bò", "kcal_per_100g": 120.0})))
            .await
            .unwrap();
        assert_eq!(outcome, WriteOutcome::Created);

        let outcome = store
            .merge_set("foods", "pho", fields(json!({"kcal_per_100g": 130.0})))
            .await
            .unwrap();
        assert_eq!(outcome, WriteOutcome::Updated);

        let doc = store.document("foods", "pho").unwrap();
        assert_eq!(doc.fields["kcal_per_100g"], json!(130.0));
        // merge-write: unsupplied fields survive
        assert_eq!(doc.fields["name"], json!("Phở bò"));
    }

    #[tokio::test]
    async fn test_created_at_stable_across_merges() {
        let store = MemoryStore::new();
        store
            .merge_set("foods", "ga", fields(json!({"name": "Gà luộc"})))
            .await
            .unwrap();
        let first = store.document("foods", "ga").unwrap().created_at;

        store
            .merge_set("foods", "ga", fields(json!({"kcal_per_100g": 165.0})))
            .await
            .unwrap();
        let second = store.document("foods", "ga").unwrap().created_at;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let store = MemoryStore::new();
        store.fail_key("tom");
        let err = store
            .merge_set("foods", "tom", fields(json!({"name": "Tôm"})))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
        assert!(store.is_empty("foods"));

        store.heal_key("tom");
        assert!(store
            .merge_set("foods", "tom", fields(json!({"name": "Tôm"})))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_collections_isolated() {
        let store = MemoryStore::new();
        store
            .merge_set("foods", "pho", fields(json!({"name": "Phở bò"})))
            .await
            .unwrap();
        assert_eq!(store.len("foods"), 1);
        assert_eq!(store.len("users"), 0);
        assert!(store.document("users", "pho").is_none());
    }
}
