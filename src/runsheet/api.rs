//! # API Facade
//!
//! A thin facade over the command layer, the single entry point for all
//! runsheet operations regardless of the UI driving them.
//!
//! The facade dispatches to the right command function and returns the
//! command's structured report. It deliberately holds no business logic, does
//! no I/O of its own, and formats nothing — rendering belongs to the caller.
//!
//! `RunsheetApi<S: DocumentStore>` is generic over the storage backend:
//! production uses `RunsheetApi<FileStore>`, tests use
//! `RunsheetApi<InMemoryStore>` and never touch the filesystem.

use crate::commands;
use crate::error::Result;
use crate::model::{ExecutionUpdate, Record};
use crate::store::DocumentStore;

/// The main API facade for runsheet operations.
pub struct RunsheetApi<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> RunsheetApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record an execution result against one test case.
    pub fn update(
        &mut self,
        sheet: &str,
        id: &str,
        update: &ExecutionUpdate,
        options: &commands::UpdateOptions,
    ) -> Result<commands::UpdateReport> {
        commands::update::run(&mut self.store, sheet, id, update, options)
    }

    /// Put one test case back to its never-executed state.
    pub fn reset(
        &mut self,
        sheet: &str,
        id: &str,
        options: &commands::UpdateOptions,
    ) -> Result<commands::UpdateReport> {
        commands::reset::run(&mut self.store, sheet, id, options)
    }

    /// Apply many updates in one load/persist cycle.
    pub fn batch(
        &mut self,
        items: &[commands::BatchItem],
        options: &commands::UpdateOptions,
    ) -> Result<commands::BatchReport> {
        commands::batch::run(&mut self.store, items, options)
    }

    /// Generate the catalog document. `force` allows overwriting an existing
    /// one, discarding recorded state.
    pub fn generate(&mut self, force: bool) -> Result<commands::GenerateReport> {
        commands::generate::run(&mut self.store, force)
    }

    pub fn sheets(&self) -> Result<Vec<String>> {
        commands::query::sheets(&self.store)
    }

    pub fn ids(&self, sheet: &str) -> Result<Vec<String>> {
        commands::query::ids(&self.store, sheet)
    }

    pub fn record(&self, sheet: &str, id: &str) -> Result<Option<Record>> {
        commands::query::record(&self.store, sheet, id)
    }
}
