//! # Storage Layer
//!
//! The [`DocumentStore`] trait abstracts where the workbook lives. The model
//! is deliberately crude: the whole document is loaded into memory, mutated,
//! and written back in one piece. There is no row-level durability and no
//! concurrency control — two processes updating the same file can clobber
//! each other, and a crash mid-persist can corrupt the file. That matches the
//! contract of the original catalog and is not mitigated here.
//!
//! What the trait does guarantee:
//!
//! - `load` fails with `DocumentNotFound` before anything is written, so a
//!   caller that errors out of validation or lookup leaves the file untouched.
//! - `create_backup` snapshots the *persisted* bytes, not the in-memory
//!   workbook, so a backup taken before mutation is byte-identical to the
//!   pre-update state.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production, pretty-printed JSON on disk.
//! - [`memory::InMemoryStore`]: testing, with persist counting so tests can
//!   assert that failed operations never wrote.

use std::path::PathBuf;

use crate::error::Result;
use crate::model::Workbook;

pub mod fs;
pub mod memory;

/// Abstract interface for workbook persistence.
pub trait DocumentStore {
    /// Load the whole document. Fails with `DocumentNotFound` if nothing has
    /// been persisted at this store's location.
    fn load(&self) -> Result<Workbook>;

    /// Overwrite the whole document.
    fn persist(&mut self, workbook: &Workbook) -> Result<()>;

    /// Snapshot the currently persisted document to a timestamped backup and
    /// return the backup's path. Backups are operator recovery artifacts;
    /// nothing in this system ever reads one back.
    fn create_backup(&mut self) -> Result<PathBuf>;

    /// Whether a document has been persisted at this store's location.
    fn exists(&self) -> bool;

    /// The document's filesystem path, for stores that have one.
    fn location(&self) -> Option<PathBuf> {
        None
    }
}
