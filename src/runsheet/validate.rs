//! Validation of execution-update payloads.
//!
//! A payload is checked before any file is touched: the result value is
//! required and must be one of the four known outcomes, and a date being set
//! must be a real calendar date written as `YYYY-MM-DD`. The shape check and
//! the calendar check are separate failures: `2025/12/01` is a format error,
//! `2025-13-40` is shaped correctly but names no date.

use chrono::NaiveDate;

use crate::error::{Result, RunsheetError};
use crate::model::{ExecutionResult, ExecutionUpdate, FieldEdit};

/// Validates a payload and returns the parsed result value.
///
/// `Keep` and `Clear` date edits skip date validation: retaining or blanking
/// the field can never introduce a bad value.
pub fn validate(update: &ExecutionUpdate) -> Result<ExecutionResult> {
    let raw = update
        .result
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(RunsheetError::MissingResult)?;
    let result = raw.parse::<ExecutionResult>()?;

    if let FieldEdit::Set(date) = &update.date {
        validate_date(date)?;
    }

    Ok(result)
}

/// Checks that a date string is `YYYY-MM-DD` and names a real calendar date.
pub fn validate_date(date: &str) -> Result<()> {
    if !is_iso_shape(date) {
        return Err(RunsheetError::InvalidDateFormat(date.to_string()));
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| RunsheetError::InvalidDate(date.to_string()))?;
    Ok(())
}

// Four digits, dash, two digits, dash, two digits. The shape check runs
// before the calendar check so that `2025-1-2` fails as a format error even
// though chrono would happily parse it.
fn is_iso_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && [0, 1, 2, 3, 5, 6, 8, 9]
            .iter()
            .all(|&i| b[i].is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_minimal_payload() {
        let update = ExecutionUpdate::new("Pass");
        assert_eq!(validate(&update).unwrap(), ExecutionResult::Pass);
    }

    #[test]
    fn rejects_missing_result() {
        let update = ExecutionUpdate::default();
        assert!(matches!(
            validate(&update),
            Err(RunsheetError::MissingResult)
        ));
    }

    #[test]
    fn rejects_empty_result() {
        let update = ExecutionUpdate::new("");
        assert!(matches!(
            validate(&update),
            Err(RunsheetError::MissingResult)
        ));
    }

    #[test]
    fn rejects_unknown_result() {
        let update = ExecutionUpdate::new("Passed");
        match validate(&update) {
            Err(RunsheetError::InvalidResult(v)) => assert_eq!(v, "Passed"),
            other => panic!("expected InvalidResult, got {:?}", other),
        }
    }

    #[test]
    fn accepts_valid_date() {
        let update = ExecutionUpdate::new("Fail").with_date(FieldEdit::set("2025-12-01"));
        assert!(validate(&update).is_ok());
    }

    #[test]
    fn rejects_malformed_dates() {
        for bad in ["2025/12/01", "12-01-2025", "2025-1-2", "20251201", "today"] {
            assert!(
                matches!(validate_date(bad), Err(RunsheetError::InvalidDateFormat(_))),
                "expected format error for {:?}",
                bad
            );
        }
    }

    #[test]
    fn rejects_impossible_dates() {
        for bad in ["2025-13-01", "2025-00-10", "2025-02-30", "2025-04-31", "2025-13-40"] {
            assert!(
                matches!(validate_date(bad), Err(RunsheetError::InvalidDate(_))),
                "expected calendar error for {:?}",
                bad
            );
        }
    }

    #[test]
    fn leap_day_depends_on_year() {
        assert!(validate_date("2024-02-29").is_ok());
        assert!(matches!(
            validate_date("2025-02-29"),
            Err(RunsheetError::InvalidDate(_))
        ));
    }

    #[test]
    fn keep_and_clear_dates_skip_validation() {
        let keep = ExecutionUpdate::new("Pass");
        assert!(validate(&keep).is_ok());
        let clear = ExecutionUpdate::new("Pass").with_date(FieldEdit::Clear);
        assert!(validate(&clear).is_ok());
    }
}
