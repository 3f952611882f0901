//! tamiz-cli
//!
//! Batch front end: reads the subject spreadsheet export, drives one
//! report per subject, and reports what happened.
//!
//! Public API:
//! - `ingest::read_records()`: CSV rows → subject records keyed by schema keys
//! - `batch::run_batch()`: render every record, isolating per-subject failures

pub mod batch;
pub mod error;
pub mod ingest;

pub use crate::batch::{run_batch, BatchOptions, BatchSummary};
pub use crate::error::BatchError;
