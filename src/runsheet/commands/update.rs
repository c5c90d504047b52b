use crate::commands::{FieldChange, UpdateOptions, UpdateReport};
use crate::error::{Result, RunsheetError};
use crate::model::{ExecutionField, ExecutionResult, ExecutionUpdate, FieldEdit, Record};
use crate::store::DocumentStore;
use crate::validate::validate;

/// Applies a validated partial update to one record in one sheet.
///
/// Order matters: validation happens before the document is read, and the
/// optional backup is taken after the load but before any mutation, so every
/// failure path leaves both the document and the backup set untouched.
pub fn run<S: DocumentStore>(
    store: &mut S,
    sheet_name: &str,
    id: &str,
    update: &ExecutionUpdate,
    options: &UpdateOptions,
) -> Result<UpdateReport> {
    let result = validate(update)?;
    let mut workbook = store.load()?;

    let backup = if options.create_backup {
        Some(store.create_backup()?)
    } else {
        None
    };

    let sheet = workbook.sheet_mut(sheet_name)?;
    let position = sheet
        .position_of(id)
        .ok_or_else(|| RunsheetError::RecordNotFound {
            sheet: sheet_name.to_string(),
            id: id.to_string(),
        })?;

    let changes = apply(&mut sheet.rows[position], result, update);
    store.persist(&workbook)?;

    Ok(UpdateReport {
        sheet: sheet_name.to_string(),
        id: id.to_string(),
        changes,
        backup,
    })
}

/// Writes the result plus every non-`Keep` edit into the record, returning
/// the per-field before/after pairs. The result is always written — it is the
/// one required field of a payload.
pub(crate) fn apply(
    record: &mut Record,
    result: ExecutionResult,
    update: &ExecutionUpdate,
) -> Vec<FieldChange> {
    let mut changes = vec![FieldChange {
        field: ExecutionField::Result,
        previous: record.execution.result.to_string(),
        new: result.to_string(),
    }];
    record.execution.result = result;

    let mut slot = |field: ExecutionField, slot: &mut String, edit: &FieldEdit| {
        if let Some(new) = edit.resolve() {
            changes.push(FieldChange {
                field,
                previous: std::mem::replace(slot, new.clone()),
                new,
            });
        }
    };

    slot(
        ExecutionField::Observed,
        &mut record.execution.observed,
        &update.observed,
    );
    slot(
        ExecutionField::ExecutedBy,
        &mut record.execution.executed_by,
        &update.executed_by,
    );
    slot(
        ExecutionField::Date,
        &mut record.execution.date,
        &update.date,
    );
    slot(
        ExecutionField::Comments,
        &mut record.execution.comments,
        &update.comments,
    );

    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::query;
    use crate::store::memory::fixtures::sample_store;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn updates_fields_present_in_payload() {
        let mut store = sample_store();
        let update = ExecutionUpdate::new("Pass")
            .with_executed_by(FieldEdit::set("AI Agent"))
            .with_date(FieldEdit::set("2025-12-01"));

        let report = run(
            &mut store,
            "BasicFlightSearch",
            "BFS-001",
            &update,
            &UpdateOptions::default(),
        )
        .unwrap();

        assert_eq!(report.sheet, "BasicFlightSearch");
        assert_eq!(report.id, "BFS-001");
        assert_eq!(report.changes.len(), 3);

        let record = query::record(&store, "BasicFlightSearch", "BFS-001")
            .unwrap()
            .unwrap();
        assert_eq!(record.execution.result, ExecutionResult::Pass);
        assert_eq!(record.execution.executed_by, "AI Agent");
        assert_eq!(record.execution.date, "2025-12-01");
    }

    #[test]
    fn omitted_fields_retain_prior_values() {
        let mut store = sample_store();
        let first = ExecutionUpdate::new("Fail")
            .with_observed(FieldEdit::set("Search button disabled"))
            .with_comments(FieldEdit::set("flaky"));
        run(
            &mut store,
            "BasicFlightSearch",
            "BFS-002",
            &first,
            &UpdateOptions::default(),
        )
        .unwrap();

        // Second update only touches the result.
        run(
            &mut store,
            "BasicFlightSearch",
            "BFS-002",
            &ExecutionUpdate::new("Pass"),
            &UpdateOptions::default(),
        )
        .unwrap();

        let record = query::record(&store, "BasicFlightSearch", "BFS-002")
            .unwrap()
            .unwrap();
        assert_eq!(record.execution.result, ExecutionResult::Pass);
        assert_eq!(record.execution.observed, "Search button disabled");
        assert_eq!(record.execution.comments, "flaky");
    }

    #[test]
    fn clear_blanks_the_field() {
        let mut store = sample_store();
        run(
            &mut store,
            "BasicFlightSearch",
            "BFS-001",
            &ExecutionUpdate::new("Fail").with_observed(FieldEdit::set("broken")),
            &UpdateOptions::default(),
        )
        .unwrap();

        let report = run(
            &mut store,
            "BasicFlightSearch",
            "BFS-001",
            &ExecutionUpdate::new("Pass").with_observed(FieldEdit::Clear),
            &UpdateOptions::default(),
        )
        .unwrap();

        let change = report.change(ExecutionField::Observed).unwrap();
        assert_eq!(change.previous, "broken");
        assert_eq!(change.new, "");

        let record = query::record(&store, "BasicFlightSearch", "BFS-001")
            .unwrap()
            .unwrap();
        assert_eq!(record.execution.observed, "");
    }

    #[test]
    fn report_captures_previous_values() {
        let mut store = sample_store();
        let report = run(
            &mut store,
            "BasicFlightSearch",
            "BFS-001",
            &ExecutionUpdate::new("Blocked"),
            &UpdateOptions::default(),
        )
        .unwrap();

        let change = report.change(ExecutionField::Result).unwrap();
        assert_eq!(change.previous, "Not Run");
        assert_eq!(change.new, "Blocked");
    }

    #[test]
    fn is_idempotent() {
        let mut store = sample_store();
        let update = ExecutionUpdate::new("Pass")
            .with_executed_by(FieldEdit::set("Automated"))
            .with_date(FieldEdit::set("2025-12-01"));

        let first = run(
            &mut store,
            "MultiCity",
            "MC-001",
            &update,
            &UpdateOptions::default(),
        )
        .unwrap();
        let state_after_first = query::record(&store, "MultiCity", "MC-001").unwrap();

        let second = run(
            &mut store,
            "MultiCity",
            "MC-001",
            &update,
            &UpdateOptions::default(),
        )
        .unwrap();
        let state_after_second = query::record(&store, "MultiCity", "MC-001").unwrap();

        assert_eq!(state_after_first, state_after_second);
        // The second call's previous values are the first call's new values.
        for (a, b) in first.changes.iter().zip(second.changes.iter()) {
            assert_eq!(a.field, b.field);
            assert_eq!(a.new, b.previous);
        }
    }

    #[test]
    fn validation_failure_writes_nothing() {
        let mut store = sample_store();
        let err = run(
            &mut store,
            "BasicFlightSearch",
            "BFS-001",
            &ExecutionUpdate::default(),
            &UpdateOptions::with_backup(),
        )
        .unwrap_err();

        assert!(matches!(err, RunsheetError::MissingResult));
        assert_eq!(store.persist_count(), 0);
        assert_eq!(store.backup_count(), 0);
    }

    #[test]
    fn bad_date_fails_before_any_write() {
        let mut store = sample_store();
        let err = run(
            &mut store,
            "BasicFlightSearch",
            "BFS-001",
            &ExecutionUpdate::new("Pass").with_date(FieldEdit::set("2025-13-40")),
            &UpdateOptions::with_backup(),
        )
        .unwrap_err();

        assert!(matches!(err, RunsheetError::InvalidDate(_)));
        assert_eq!(store.persist_count(), 0);
        assert_eq!(store.backup_count(), 0);
    }

    #[test]
    fn unknown_record_fails_without_persisting() {
        let mut store = sample_store();
        let err = run(
            &mut store,
            "BasicFlightSearch",
            "BFS-999",
            &ExecutionUpdate::new("Pass"),
            &UpdateOptions::default(),
        )
        .unwrap_err();

        match err {
            RunsheetError::RecordNotFound { sheet, id } => {
                assert_eq!(sheet, "BasicFlightSearch");
                assert_eq!(id, "BFS-999");
            }
            other => panic!("expected RecordNotFound, got {:?}", other),
        }
        assert_eq!(store.persist_count(), 0);
    }

    #[test]
    fn unknown_sheet_error_lists_available_sheets() {
        let mut store = sample_store();
        let err = run(
            &mut store,
            "NoSuchSheet",
            "BFS-001",
            &ExecutionUpdate::new("Pass"),
            &UpdateOptions::default(),
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("NoSuchSheet"));
        assert!(message.contains("BasicFlightSearch"));
        assert!(message.contains("MultiCity"));
    }

    #[test]
    fn backup_precedes_mutation() {
        let mut store = sample_store();
        let before = store.raw_document().unwrap().to_string();

        let report = run(
            &mut store,
            "BasicFlightSearch",
            "BFS-001",
            &ExecutionUpdate::new("Pass"),
            &UpdateOptions::with_backup(),
        )
        .unwrap();

        let backup_path = report.backup.unwrap();
        let backup = store.backup_contents(&backup_path).unwrap();
        assert_eq!(backup, before, "backup must capture pre-update bytes");
        assert_ne!(store.raw_document().unwrap(), before);
    }

    #[test]
    fn missing_document_surfaces_not_found() {
        let mut store = InMemoryStore::new();
        let err = run(
            &mut store,
            "BasicFlightSearch",
            "BFS-001",
            &ExecutionUpdate::new("Pass"),
            &UpdateOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, RunsheetError::DocumentNotFound(_)));
    }
}
