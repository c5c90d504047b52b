//! Generate the catalog document.
//!
//! Builds the full four-sheet workbook from [`crate::catalog`] and persists
//! it. Regeneration discards recorded execution state, so an existing
//! document is only overwritten when `force` is set.

use std::path::PathBuf;

use crate::catalog;
use crate::commands::GenerateReport;
use crate::error::{Result, RunsheetError};
use crate::store::DocumentStore;

pub fn run<S: DocumentStore>(store: &mut S, force: bool) -> Result<GenerateReport> {
    if store.exists() && !force {
        let path = store.location().unwrap_or_else(|| PathBuf::from("<memory>"));
        return Err(RunsheetError::DocumentExists(path));
    }

    let workbook = catalog::workbook();
    store.persist(&workbook)?;

    Ok(GenerateReport {
        sheets: workbook
            .sheets
            .iter()
            .map(|s| (s.name.clone(), s.rows.len()))
            .collect(),
        path: store.location(),
    })
}
