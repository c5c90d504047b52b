use crate::error::Result;
use crate::model::Record;
use crate::store::DocumentStore;

/// Sheet names in document order.
pub fn sheets<S: DocumentStore>(store: &S) -> Result<Vec<String>> {
    Ok(store.load()?.sheet_names())
}

/// Test case ids of one sheet, in row order. Duplicates, if the data has
/// them, are reported as-is.
pub fn ids<S: DocumentStore>(store: &S, sheet_name: &str) -> Result<Vec<String>> {
    let workbook = store.load()?;
    let sheet = workbook.sheet(sheet_name)?;
    Ok(sheet.rows.iter().map(|r| r.id.clone()).collect())
}

/// One record's full field set, or `None` if the id is absent. A missing
/// sheet is still an error — only a missing record gets the sentinel.
pub fn record<S: DocumentStore>(
    store: &S,
    sheet_name: &str,
    id: &str,
) -> Result<Option<Record>> {
    let workbook = store.load()?;
    let sheet = workbook.sheet(sheet_name)?;
    Ok(sheet.record(id).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RunsheetError;
    use crate::model::columns;
    use crate::store::memory::fixtures::{sample_store, sample_workbook, scenario_record};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn sheets_in_source_order() {
        let store = sample_store();
        assert_eq!(sheets(&store).unwrap(), vec!["BasicFlightSearch", "MultiCity"]);
    }

    #[test]
    fn ids_in_row_order() {
        let store = sample_store();
        assert_eq!(
            ids(&store, "BasicFlightSearch").unwrap(),
            vec!["BFS-001", "BFS-002", "BFS-003"]
        );
    }

    #[test]
    fn ids_keep_duplicates() {
        let mut workbook = sample_workbook();
        let dup = scenario_record("BFS-001", "Basic Flight Search", "copy");
        workbook.sheets[0].rows.push(dup);
        let store = InMemoryStore::with_workbook(&workbook);

        assert_eq!(
            ids(&store, "BasicFlightSearch").unwrap(),
            vec!["BFS-001", "BFS-002", "BFS-003", "BFS-001"]
        );
    }

    #[test]
    fn record_returns_full_field_set() {
        let store = sample_store();
        let found = record(&store, "MultiCity", "MC-001").unwrap().unwrap();
        assert_eq!(found.id, "MC-001");
        assert!(found.extra.contains_key(columns::AREA));
        assert!(found.extra.contains_key(columns::TEST_CASE_NAME));
    }

    #[test]
    fn record_absent_is_none_not_error() {
        let store = sample_store();
        assert!(record(&store, "MultiCity", "MC-404").unwrap().is_none());
    }

    #[test]
    fn missing_sheet_is_an_error() {
        let store = sample_store();
        assert!(matches!(
            ids(&store, "Ghost"),
            Err(RunsheetError::SheetNotFound { .. })
        ));
        assert!(matches!(
            record(&store, "Ghost", "MC-001"),
            Err(RunsheetError::SheetNotFound { .. })
        ));
    }
}
