use std::path::PathBuf;

use super::DocumentStore;
use crate::error::{Result, RunsheetError};
use crate::model::Workbook;

/// Test store: the serialized document held in memory.
///
/// Keeps the same serialize/deserialize path as [`super::fs::FileStore`] so
/// command tests exercise the full round trip, and counts persists so tests
/// can assert nothing was written before a failure.
#[derive(Default)]
pub struct InMemoryStore {
    document: Option<String>,
    backups: Vec<(PathBuf, String)>,
    persist_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store with the given workbook already persisted.
    pub fn with_workbook(workbook: &Workbook) -> Self {
        let mut store = Self::new();
        store
            .persist(workbook)
            .expect("workbook serialization cannot fail");
        store.persist_count = 0;
        store
    }

    pub fn persist_count(&self) -> usize {
        self.persist_count
    }

    pub fn backup_count(&self) -> usize {
        self.backups.len()
    }

    /// The raw bytes captured by a backup, for byte-equality assertions.
    pub fn backup_contents(&self, path: &PathBuf) -> Option<&str> {
        self.backups
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, content)| content.as_str())
    }

    /// The currently persisted bytes.
    pub fn raw_document(&self) -> Option<&str> {
        self.document.as_deref()
    }
}

impl DocumentStore for InMemoryStore {
    fn load(&self) -> Result<Workbook> {
        let content = self
            .document
            .as_ref()
            .ok_or_else(|| RunsheetError::DocumentNotFound(PathBuf::from("<memory>")))?;
        let workbook = serde_json::from_str(content)?;
        Ok(workbook)
    }

    fn persist(&mut self, workbook: &Workbook) -> Result<()> {
        self.document = Some(serde_json::to_string_pretty(workbook)?);
        self.persist_count += 1;
        Ok(())
    }

    fn create_backup(&mut self) -> Result<PathBuf> {
        let content = self
            .document
            .clone()
            .ok_or_else(|| RunsheetError::DocumentNotFound(PathBuf::from("<memory>")))?;
        let path = PathBuf::from(format!("<memory>-backup-{}", self.backups.len()));
        self.backups.push((path.clone(), content));
        Ok(path)
    }

    fn exists(&self) -> bool {
        self.document.is_some()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{columns, ColumnSpec, Record, Sheet, Workbook};

    /// A compact two-sheet workbook for command tests.
    pub fn sample_workbook() -> Workbook {
        let columns_spec = vec![
            ColumnSpec::new(columns::TEST_CASE_ID, 14),
            ColumnSpec::new(columns::AREA, 20),
            ColumnSpec::new(columns::TEST_CASE_NAME, 45),
            ColumnSpec::new(columns::EXECUTION_RESULT, 16),
            ColumnSpec::new(columns::OBSERVED_RESULTS, 50),
            ColumnSpec::new(columns::EXECUTED_BY, 15),
            ColumnSpec::new(columns::EXECUTION_DATE, 16),
            ColumnSpec::new(columns::COMMENTS, 40),
        ];

        let mut basic = Sheet::new("BasicFlightSearch", columns_spec.clone());
        basic.rows.push(scenario_record(
            "BFS-001",
            "Basic Flight Search",
            "Round-trip domestic flight - Solo traveler",
        ));
        basic.rows.push(scenario_record(
            "BFS-002",
            "Basic Flight Search",
            "Round-trip international flight - Couple",
        ));
        basic.rows.push(scenario_record(
            "BFS-003",
            "Basic Flight Search",
            "One-way domestic short-haul flight",
        ));

        let mut multi = Sheet::new("MultiCity", columns_spec);
        multi.rows.push(scenario_record(
            "MC-001",
            "Multi-City Booking",
            "US Triangle - 3 segments",
        ));
        multi.rows.push(scenario_record(
            "MC-002",
            "Multi-City Booking",
            "European Tour - 4 segments",
        ));

        Workbook {
            sheets: vec![basic, multi],
        }
    }

    pub fn scenario_record(id: &str, area: &str, name: &str) -> Record {
        Record::new(id)
            .with_extra(columns::AREA, area)
            .with_extra(columns::TEST_CASE_NAME, name)
    }

    /// A store with [`sample_workbook`] already persisted.
    pub fn sample_store() -> InMemoryStore {
        InMemoryStore::with_workbook(&sample_workbook())
    }
}
