use crate::commands::{update, UpdateOptions, UpdateReport};
use crate::error::Result;
use crate::model::{ExecutionResult, ExecutionUpdate, FieldEdit};
use crate::store::DocumentStore;

/// The update a reset applies: back to `Not Run` with every other execution
/// field blanked.
pub fn default_state() -> ExecutionUpdate {
    ExecutionUpdate::new(ExecutionResult::NotRun.as_str())
        .with_observed(FieldEdit::Clear)
        .with_executed_by(FieldEdit::Clear)
        .with_date(FieldEdit::Clear)
        .with_comments(FieldEdit::Clear)
}

/// Resets a record's execution fields to their post-generation defaults.
pub fn run<S: DocumentStore>(
    store: &mut S,
    sheet_name: &str,
    id: &str,
    options: &UpdateOptions,
) -> Result<UpdateReport> {
    update::run(store, sheet_name, id, &default_state(), options)
}
