//! # Command Layer
//!
//! The business logic of runsheet, one module per operation. Commands operate
//! on domain types through a [`crate::store::DocumentStore`] and return
//! structured report types — no stdout, no exit codes, no terminal concerns.
//! The CLI layer decides how to render a report.
//!
//! ## Failure discipline
//!
//! Single-record operations ([`update`], [`reset`]) abort on the first error,
//! before any write: a validation or lookup failure leaves the document file
//! and any would-be backup untouched.
//!
//! [`batch`] is the deliberate exception: per-item failures are captured as
//! [`BatchError`] entries alongside the successes, and the final persist
//! happens regardless, carrying whatever subset succeeded. Partial success is
//! the normal outcome of a batch, not an exceptional one.
//!
//! ## Testing strategy
//!
//! This is where the lion's share of testing lives. Command tests run against
//! `InMemoryStore` and verify report contents, store state after the
//! operation, and — via the store's persist counter — that failed operations
//! never wrote.

use std::path::PathBuf;

use serde::Deserialize;

use crate::model::{ExecutionField, ExecutionUpdate};

pub mod batch;
pub mod generate;
pub mod query;
pub mod reset;
pub mod update;

/// Options shared by the mutating commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateOptions {
    /// Snapshot the document to a timestamped backup before mutating.
    pub create_backup: bool,
}

impl UpdateOptions {
    pub fn with_backup() -> Self {
        Self {
            create_backup: true,
        }
    }
}

/// One field that an update actually wrote, with its value before and after.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    pub field: ExecutionField,
    pub previous: String,
    pub new: String,
}

/// Outcome of a single-record update.
#[derive(Debug, Clone)]
pub struct UpdateReport {
    pub sheet: String,
    pub id: String,
    /// Only the fields the payload set; omitted fields are absent here and
    /// retained their prior values in the record.
    pub changes: Vec<FieldChange>,
    pub backup: Option<PathBuf>,
}

impl UpdateReport {
    pub fn change(&self, field: ExecutionField) -> Option<&FieldChange> {
        self.changes.iter().find(|c| c.field == field)
    }
}

/// One requested update within a batch.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchItem {
    #[serde(rename = "sheetName")]
    pub sheet: String,
    #[serde(rename = "testCaseId")]
    pub id: String,
    #[serde(rename = "executionData")]
    pub update: ExecutionUpdate,
}

/// A failed batch item: which record, and why.
#[derive(Debug, Clone)]
pub struct BatchError {
    pub sheet: String,
    pub id: String,
    pub error: String,
}

/// Outcome of a batch run. Every attempted item lands in exactly one of
/// `results` or `errors`.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub results: Vec<UpdateReport>,
    pub errors: Vec<BatchError>,
    pub backup: Option<PathBuf>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.results.len() + self.errors.len()
    }

    pub fn success_count(&self) -> usize {
        self.results.len()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

/// Outcome of catalog generation: sheet names with their row counts, in
/// workbook order.
#[derive(Debug)]
pub struct GenerateReport {
    pub sheets: Vec<(String, usize)>,
    pub path: Option<PathBuf>,
}

impl GenerateReport {
    pub fn total_scenarios(&self) -> usize {
        self.sheets.iter().map(|(_, n)| n).sum()
    }
}
