//! The document-store seam
//!
//! Everything that writes reference data goes through [`DocumentStore`], an
//! object-safe async trait injected into the upsert pipeline by the
//! surrounding application. No implementation holds process-global state;
//! construct a handle once and pass it in.

use crate::error::StoreResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The field map of a stored document.
pub type DocumentFields = serde_json::Map<String, serde_json::Value>;

/// Outcome of a merge write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteOutcome {
    /// The key did not exist; a new document was created.
    Created,
    /// The key existed; the supplied fields were merged in.
    Updated,
}

/// A document read back from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The stored fields, excluding the server-assigned timestamp.
    pub fields: DocumentFields,
    /// Server-assigned first-write timestamp. Never changes after creation.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Keyed document collection with merge-set semantics.
///
/// `merge_set` updates only the supplied fields, leaving unsupplied fields
/// untouched, and assigns the creation timestamp exactly once, on first
/// write of a key. Implementations must make a later merge of the same key
/// leave that timestamp alone.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Merge `fields` into the document at `collection/key`, creating it if
    /// absent. Returns whether the write created or updated the document.
    async fn merge_set(
        &self,
        collection: &str,
        key: &str,
        fields: DocumentFields,
    ) -> StoreResult<WriteOutcome>;
}
