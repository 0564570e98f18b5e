//! Document-store client and bulk upsert pipeline for VietCal reference data
//!
//! The store side of the VietCal backend:
//!
//! - [`DocumentStore`]: the seam every store implementation sits behind.
//!   Writes are merge-sets with timestamp-if-absent semantics, so re-running
//!   a batch is safe by construction.
//! - [`MemoryStore`]: in-process implementation for tests and offline runs.
//! - [`HttpStore`]: client for the remote document store or a local emulator.
//! - [`BulkUpserter`]: applies an ordered batch of nutrition records and
//!   reports a per-record outcome without aborting on individual failures.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use vietcal_core::catalog;
//! use vietcal_store::{BulkUpserter, MemoryStore};
//!
//! # tokio_test::block_on(async {
//! let store = MemoryStore::new();
//! let upserter = BulkUpserter::new(Arc::new(store.clone()));
//! let report = upserter.upsert_all(&catalog::seed_foods()).await;
//! assert!(report.is_full_success());
//! # });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod http;
pub mod memory;
pub mod store;
pub mod upsert;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use http::HttpStore;
pub use memory::MemoryStore;
pub use store::{Document, DocumentFields, DocumentStore, WriteOutcome};
pub use upsert::{BulkUpserter, UpsertError, UpsertOutcome, UpsertReport, UpsertStatus};
