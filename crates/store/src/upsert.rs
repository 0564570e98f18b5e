//! Bulk upsert pipeline for nutrition records
//!
//! Applies an ordered batch of [`NutritionRecord`]s as independent merge
//! writes and reports a per-record outcome. One bad record never blocks the
//! rest, and re-running the whole batch is safe: writes are idempotent
//! merges and the creation timestamp is fixed at first write by the store.

use crate::error::StoreError;
use crate::store::{DocumentFields, DocumentStore, WriteOutcome};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};
use vietcal_core::{NutritionRecord, ValidationError};

/// Collection holding the nutrition reference data.
pub const FOODS_COLLECTION: &str = "foods";

/// Why a record was not written.
#[derive(Error, Debug)]
pub enum UpsertError {
    /// The record failed local validation; no store call was made.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The store rejected or could not take the write.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Per-record upsert status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpsertStatus {
    /// The record was written for the first time.
    Created,
    /// An existing document was merged into.
    Updated,
    /// The record was not written; see the attached error.
    Failed,
}

/// Outcome of one record in a batch.
#[derive(Debug)]
pub struct UpsertOutcome {
    /// The record's key, echoed even when validation failed.
    pub id: String,
    /// What happened to the record.
    pub status: UpsertStatus,
    /// Failure cause; present exactly when `status` is `Failed`.
    pub error: Option<UpsertError>,
}

impl UpsertOutcome {
    fn written(id: &str, outcome: WriteOutcome) -> Self {
        Self {
            id: id.to_string(),
            status: match outcome {
                WriteOutcome::Created => UpsertStatus::Created,
                WriteOutcome::Updated => UpsertStatus::Updated,
            },
            error: None,
        }
    }

    fn failed(id: &str, error: UpsertError) -> Self {
        Self {
            id: id.to_string(),
            status: UpsertStatus::Failed,
            error: Some(error),
        }
    }

    /// Whether the record was written.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status != UpsertStatus::Failed
    }
}

/// Full per-record report for one batch.
#[derive(Debug, Default)]
pub struct UpsertReport {
    /// Outcomes in input order.
    pub outcomes: Vec<UpsertOutcome>,
}

impl UpsertReport {
    /// Whether every record in the batch was written.
    #[must_use]
    pub fn is_full_success(&self) -> bool {
        self.outcomes.iter().all(UpsertOutcome::is_success)
    }

    /// Records written for the first time.
    #[must_use]
    pub fn created(&self) -> usize {
        self.count(UpsertStatus::Created)
    }

    /// Records merged into existing documents.
    #[must_use]
    pub fn updated(&self) -> usize {
        self.count(UpsertStatus::Updated)
    }

    /// Records that were not written.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(UpsertStatus::Failed)
    }

    fn count(&self, status: UpsertStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    /// Machine-readable report for `--json` output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "total": self.outcomes.len(),
            "created": self.created(),
            "updated": self.updated(),
            "failed": self.failed(),
            "records": self
                .outcomes
                .iter()
                .map(|o| {
                    serde_json::json!({
                        "id": o.id,
                        "status": o.status,
                        "error": o.error.as_ref().map(ToString::to_string),
                    })
                })
                .collect::<Vec<_>>(),
        })
    }
}

/// Applies batches of nutrition records to a [`DocumentStore`].
///
/// The store handle is injected; the upserter holds no global state and can
/// run against production, an emulator, or an in-memory store unchanged.
pub struct BulkUpserter {
    store: Arc<dyn DocumentStore>,
    collection: String,
}

impl BulkUpserter {
    /// Create an upserter writing to the [`FOODS_COLLECTION`].
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            collection: FOODS_COLLECTION.to_string(),
        }
    }

    /// Target a different collection.
    #[must_use]
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Upsert every record in order, one independent merge write per valid
    /// record. Returns an outcome per record, in input order. Failures are
    /// collected, never thrown; the batch always runs to completion.
    ///
    /// Writes are issued sequentially. They carry no ordering requirement
    /// among themselves, so a caller may split a batch across tasks; each
    /// write stays an independent idempotent merge either way.
    pub async fn upsert_all(&self, records: &[NutritionRecord]) -> UpsertReport {
        let mut report = UpsertReport::default();
        for record in records {
            report.outcomes.push(self.upsert_one(record).await);
        }
        debug!(
            total = report.outcomes.len(),
            created = report.created(),
            updated = report.updated(),
            failed = report.failed(),
            "Batch upsert finished"
        );
        report
    }

    async fn upsert_one(&self, record: &NutritionRecord) -> UpsertOutcome {
        let record = record.clone().normalized();

        if let Some(error) = record.validate().into_first_error() {
            warn!(id = %record.id, error = %error, "Record failed validation, skipping write");
            return UpsertOutcome::failed(&record.id, error.into());
        }

        let write = self
            .store
            .merge_set(&self.collection, &record.id, record_fields(&record))
            .await;
        match write {
            Ok(outcome) => {
                debug!(id = %record.id, outcome = ?outcome, "Record upserted");
                UpsertOutcome::written(&record.id, outcome)
            }
            Err(error) => {
                warn!(id = %record.id, error = %error, "Store write failed, batch continues");
                UpsertOutcome::failed(&record.id, error.into())
            }
        }
    }
}

/// Serialize a record into the field map sent to the store.
///
/// The creation timestamp is server-assigned; strip it so a caller-supplied
/// value can never overwrite the stored one.
fn record_fields(record: &NutritionRecord) -> DocumentFields {
    let mut fields = match serde_json::to_value(record) {
        Ok(serde_json::Value::Object(map)) => map,
        _ => DocumentFields::new(),
    };
    fields.remove("createdAt");
    fields
}
