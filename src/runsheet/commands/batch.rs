use serde::Deserialize;

use crate::commands::{update, BatchError, BatchItem, BatchReport, UpdateOptions, UpdateReport};
use crate::error::{Result, RunsheetError};
use crate::model::Sheet;
use crate::store::DocumentStore;
use crate::validate::validate;

/// On-disk shape of a batch spec file:
/// `{ "updates": [ { "sheetName", "testCaseId", "executionData" } ],
///    "options": { "createBackup": bool } }`.
#[derive(Debug, Deserialize)]
pub struct BatchSpec {
    pub updates: Vec<BatchItem>,
    #[serde(default)]
    pub options: BatchSpecOptions,
}

#[derive(Debug, Default, Deserialize)]
pub struct BatchSpecOptions {
    #[serde(rename = "createBackup", default)]
    pub create_backup: bool,
}

impl BatchSpec {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Applies many updates in one pass over the document.
///
/// The document is loaded once and persisted once; items are grouped by sheet
/// so each sheet is located once regardless of how many of its records are
/// touched. Item failures are collected, never propagated: a bad payload or a
/// missing record costs that item only, and the final persist carries every
/// item that succeeded. A missing sheet fails all of its items with the same
/// message but leaves other sheets' items unaffected.
pub fn run<S: DocumentStore>(
    store: &mut S,
    items: &[BatchItem],
    options: &UpdateOptions,
) -> Result<BatchReport> {
    if items.is_empty() {
        return Err(RunsheetError::EmptyBatch);
    }

    let mut workbook = store.load()?;
    let backup = if options.create_backup {
        Some(store.create_backup()?)
    } else {
        None
    };

    let mut results = Vec::new();
    let mut errors = Vec::new();

    for (sheet_name, group) in group_by_sheet(items) {
        let sheet = match workbook.sheet_mut(sheet_name) {
            Ok(sheet) => sheet,
            Err(err) => {
                // The whole sheet is missing: fail every item targeting it,
                // all with the same message.
                let message = err.to_string();
                errors.extend(group.iter().map(|item| BatchError {
                    sheet: sheet_name.to_string(),
                    id: item.id.clone(),
                    error: message.clone(),
                }));
                continue;
            }
        };

        for item in group {
            match apply_item(sheet, item) {
                Ok(report) => results.push(report),
                Err(err) => errors.push(BatchError {
                    sheet: sheet_name.to_string(),
                    id: item.id.clone(),
                    error: err.to_string(),
                }),
            }
        }
    }

    store.persist(&workbook)?;

    Ok(BatchReport {
        results,
        errors,
        backup,
    })
}

fn apply_item(sheet: &mut Sheet, item: &BatchItem) -> Result<UpdateReport> {
    let result = validate(&item.update)?;
    let position = sheet
        .position_of(&item.id)
        .ok_or_else(|| RunsheetError::RecordNotFound {
            sheet: sheet.name.clone(),
            id: item.id.clone(),
        })?;
    let changes = update::apply(&mut sheet.rows[position], result, &item.update);
    Ok(UpdateReport {
        sheet: sheet.name.clone(),
        id: item.id.clone(),
        changes,
        backup: None,
    })
}

// Groups items by sheet, preserving first-appearance order of sheets and the
// input order of items within each group.
fn group_by_sheet(items: &[BatchItem]) -> Vec<(&str, Vec<&BatchItem>)> {
    let mut groups: Vec<(&str, Vec<&BatchItem>)> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|(name, _)| *name == item.sheet) {
            Some((_, group)) => group.push(item),
            None => groups.push((item.sheet.as_str(), vec![item])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::query;
    use crate::model::{ExecutionResult, ExecutionUpdate, FieldEdit};
    use crate::store::memory::fixtures::sample_store;

    fn item(sheet: &str, id: &str, update: ExecutionUpdate) -> BatchItem {
        BatchItem {
            sheet: sheet.to_string(),
            id: id.to_string(),
            update,
        }
    }

    #[test]
    fn empty_batch_is_rejected() {
        let mut store = sample_store();
        let err = run(&mut store, &[], &UpdateOptions::default()).unwrap_err();
        assert!(matches!(err, RunsheetError::EmptyBatch));
        assert_eq!(store.persist_count(), 0);
    }

    #[test]
    fn applies_updates_across_sheets_with_one_persist() {
        let mut store = sample_store();
        let items = vec![
            item("BasicFlightSearch", "BFS-001", ExecutionUpdate::new("Pass")),
            item("MultiCity", "MC-001", ExecutionUpdate::new("Fail")),
            item("BasicFlightSearch", "BFS-002", ExecutionUpdate::new("Blocked")),
        ];

        let report = run(&mut store, &items, &UpdateOptions::default()).unwrap();

        assert_eq!(report.total(), 3);
        assert_eq!(report.success_count(), 3);
        assert_eq!(report.error_count(), 0);
        assert_eq!(store.persist_count(), 1);

        let bfs1 = query::record(&store, "BasicFlightSearch", "BFS-001")
            .unwrap()
            .unwrap();
        assert_eq!(bfs1.execution.result, ExecutionResult::Pass);
        let mc1 = query::record(&store, "MultiCity", "MC-001").unwrap().unwrap();
        assert_eq!(mc1.execution.result, ExecutionResult::Fail);
    }

    #[test]
    fn item_failures_do_not_abort_the_batch() {
        let mut store = sample_store();
        let items = vec![
            item("BasicFlightSearch", "BFS-001", ExecutionUpdate::new("Pass")),
            // invalid payload
            item("BasicFlightSearch", "BFS-002", ExecutionUpdate::default()),
            // unknown record
            item("MultiCity", "MC-999", ExecutionUpdate::new("Pass")),
            item("MultiCity", "MC-002", ExecutionUpdate::new("Pass")),
        ];

        let report = run(&mut store, &items, &UpdateOptions::default()).unwrap();

        assert_eq!(report.success_count(), 2);
        assert_eq!(report.error_count(), 2);
        assert_eq!(store.persist_count(), 1);

        // The successes are persisted despite their neighbors failing.
        let mc2 = query::record(&store, "MultiCity", "MC-002").unwrap().unwrap();
        assert_eq!(mc2.execution.result, ExecutionResult::Pass);
        // The failed item left its record alone.
        let bfs2 = query::record(&store, "BasicFlightSearch", "BFS-002")
            .unwrap()
            .unwrap();
        assert_eq!(bfs2.execution.result, ExecutionResult::NotRun);
    }

    #[test]
    fn missing_sheet_fails_each_of_its_items() {
        let mut store = sample_store();
        let items = vec![
            item("Ghost", "G-001", ExecutionUpdate::new("Pass")),
            item("BasicFlightSearch", "BFS-001", ExecutionUpdate::new("Pass")),
            item("Ghost", "G-002", ExecutionUpdate::new("Pass")),
        ];

        let report = run(&mut store, &items, &UpdateOptions::default()).unwrap();

        assert_eq!(report.success_count(), 1);
        assert_eq!(report.error_count(), 2);
        let ghost_errors: Vec<_> = report.errors.iter().filter(|e| e.sheet == "Ghost").collect();
        assert_eq!(ghost_errors.len(), 2);
        assert_eq!(ghost_errors[0].error, ghost_errors[1].error);
        assert!(ghost_errors[0].error.contains("Ghost"));

        let bfs1 = query::record(&store, "BasicFlightSearch", "BFS-001")
            .unwrap()
            .unwrap();
        assert_eq!(bfs1.execution.result, ExecutionResult::Pass);
    }

    #[test]
    fn one_backup_regardless_of_item_count() {
        let mut store = sample_store();
        let before = store.raw_document().unwrap().to_string();
        let items = vec![
            item("BasicFlightSearch", "BFS-001", ExecutionUpdate::new("Pass")),
            item("BasicFlightSearch", "BFS-002", ExecutionUpdate::new("Pass")),
            item("MultiCity", "MC-001", ExecutionUpdate::new("Pass")),
        ];

        let report = run(&mut store, &items, &UpdateOptions::with_backup()).unwrap();

        assert_eq!(store.backup_count(), 1);
        let backup_path = report.backup.unwrap();
        assert_eq!(store.backup_contents(&backup_path).unwrap(), before);
    }

    #[test]
    fn groups_preserve_first_appearance_order() {
        let items = vec![
            item("B", "1", ExecutionUpdate::new("Pass")),
            item("A", "2", ExecutionUpdate::new("Pass")),
            item("B", "3", ExecutionUpdate::new("Pass")),
        ];
        let groups = group_by_sheet(&items);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "B");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "A");
    }

    #[test]
    fn spec_file_parses_with_camel_case_keys() {
        let spec = BatchSpec::parse(
            r#"{
                "updates": [
                    {
                        "sheetName": "BasicFlightSearch",
                        "testCaseId": "BFS-001",
                        "executionData": {
                            "executionResult": "Pass",
                            "executedBy": "AI Agent",
                            "executionDate": "2025-12-01"
                        }
                    }
                ],
                "options": { "createBackup": true }
            }"#,
        )
        .unwrap();

        assert_eq!(spec.updates.len(), 1);
        assert_eq!(spec.updates[0].sheet, "BasicFlightSearch");
        assert_eq!(spec.updates[0].id, "BFS-001");
        assert!(spec.options.create_backup);
        assert_eq!(
            spec.updates[0].update.executed_by,
            FieldEdit::set("AI Agent")
        );
    }

    #[test]
    fn spec_file_options_default_to_no_backup() {
        let spec = BatchSpec::parse(r#"{ "updates": [] }"#).unwrap();
        assert!(!spec.options.create_backup);
    }
}
