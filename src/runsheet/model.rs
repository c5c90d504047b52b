//! # Domain Model: Workbook, Sheets, and Records
//!
//! This module defines the core data structures: [`Workbook`], [`Sheet`],
//! [`Record`], and the typed execution subset.
//!
//! ## The Schema Problem
//!
//! The catalog is a spreadsheet: rows keyed by column headers, and the headers
//! are keys, not labels (`Test Case ID*` with the asterisk, exactly). Only five
//! columns are ever mutated after generation — the execution subset. Everything
//! else (description, steps, severity, provenance) is passthrough data that
//! must survive a read→mutate→write round trip untouched, including columns
//! this version of the tool has never heard of.
//!
//! The [`Record`] type therefore has a fixed-schema core (`id` plus
//! [`Execution`]) and an open side-table (`extra`) for every other column.
//! Records serialize as flat header→value maps; the typed core and the
//! side-table are recombined on write.
//!
//! ## Three-State Edits
//!
//! Callers must be able to distinguish "leave this field alone" from "clear
//! this field". A plain `Option<String>` cannot express both, so partial
//! updates use [`FieldEdit`]:
//!
//! - `Keep`: field absent from the payload, prior value retained
//! - `Clear`: explicit empty string, field is blanked
//! - `Set(v)`: field is overwritten with `v`
//!
//! In the batch JSON format an absent key maps to `Keep` and `""` (or `null`)
//! maps to `Clear`.
//!
//! ## Display Metadata
//!
//! Each [`Sheet`] carries its column order and display widths in
//! [`ColumnSpec`]s. Update operations replace rows only; the column list is
//! never dropped or reordered, which is what keeps widths stable across
//! rewrites.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, RunsheetError};

/// Column headers of the catalog schema. Headers are keys: case-,
/// punctuation-, and asterisk-sensitive.
pub mod columns {
    pub const TEST_CASE_ID: &str = "Test Case ID*";
    pub const AREA: &str = "Area*";
    pub const TEST_CASE_NAME: &str = "Test Case Name*";
    pub const DESCRIPTION: &str = "Test Case Description*";
    pub const STEPS: &str = "Steps To Reproduce*";
    pub const EXPECTED_RESULTS: &str = "Expected Results*";
    pub const EXECUTION_RESULT: &str = "Execution Result*";
    pub const OBSERVED_RESULTS: &str = "Observed Results (In case of failure)*";
    pub const SEVERITY: &str = "Test Case Severity*";
    pub const EXECUTED_BY: &str = "Executed By*";
    pub const EXECUTION_DATE: &str = "Execution Date*";
    pub const CREATED_BY: &str = "Created By*";
    pub const COMMENTS: &str = "Comments";
}

/// A scalar cell value. The catalog only ever holds text and small integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Int(i64),
    Text(String),
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Int(_) => None,
            CellValue::Text(s) => Some(s),
        }
    }

    pub fn into_text(self) -> String {
        match self {
            CellValue::Int(n) => n.to_string(),
            CellValue::Text(s) => s,
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

/// Outcome of executing a test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionResult {
    Pass,
    Fail,
    #[default]
    NotRun,
    Blocked,
}

impl ExecutionResult {
    pub const VALID: [&'static str; 4] = ["Pass", "Fail", "Not Run", "Blocked"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionResult::Pass => "Pass",
            ExecutionResult::Fail => "Fail",
            ExecutionResult::NotRun => "Not Run",
            ExecutionResult::Blocked => "Blocked",
        }
    }
}

impl fmt::Display for ExecutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecutionResult {
    type Err = RunsheetError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Pass" => Ok(ExecutionResult::Pass),
            "Fail" => Ok(ExecutionResult::Fail),
            "Not Run" => Ok(ExecutionResult::NotRun),
            "Blocked" => Ok(ExecutionResult::Blocked),
            other => Err(RunsheetError::InvalidResult(other.to_string())),
        }
    }
}

/// The five mutable fields of a record. Everything else is provenance set at
/// generation time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Execution {
    pub result: ExecutionResult,
    pub observed: String,
    pub executed_by: String,
    pub date: String,
    pub comments: String,
}

/// Names of the mutable fields, used in change reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionField {
    Result,
    Observed,
    ExecutedBy,
    Date,
    Comments,
}

impl fmt::Display for ExecutionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExecutionField::Result => "executionResult",
            ExecutionField::Observed => "observedResults",
            ExecutionField::ExecutedBy => "executedBy",
            ExecutionField::Date => "executionDate",
            ExecutionField::Comments => "comments",
        };
        f.write_str(name)
    }
}

/// One row of a sheet: the typed core plus passthrough columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    pub id: String,
    pub execution: Execution,
    pub extra: BTreeMap<String, CellValue>,
}

impl Record {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_extra(mut self, header: &str, value: impl Into<CellValue>) -> Self {
        self.extra.insert(header.to_string(), value.into());
        self
    }
}

// Records live on the wire as flat header->value maps. The typed execution
// core is split out on read and merged back on write; unknown columns pass
// through via `extra`.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(6 + self.extra.len()))?;
        map.serialize_entry(columns::TEST_CASE_ID, &self.id)?;
        for (header, value) in &self.extra {
            map.serialize_entry(header, value)?;
        }
        map.serialize_entry(columns::EXECUTION_RESULT, self.execution.result.as_str())?;
        map.serialize_entry(columns::OBSERVED_RESULTS, &self.execution.observed)?;
        map.serialize_entry(columns::EXECUTED_BY, &self.execution.executed_by)?;
        map.serialize_entry(columns::EXECUTION_DATE, &self.execution.date)?;
        map.serialize_entry(columns::COMMENTS, &self.execution.comments)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let mut cells = BTreeMap::<String, CellValue>::deserialize(deserializer)?;

        let take = |cells: &mut BTreeMap<String, CellValue>, header: &str| {
            cells.remove(header).map(CellValue::into_text).unwrap_or_default()
        };

        let id = take(&mut cells, columns::TEST_CASE_ID);
        let result = match cells.remove(columns::EXECUTION_RESULT) {
            Some(cell) => cell.into_text().parse().map_err(D::Error::custom)?,
            None => ExecutionResult::default(),
        };
        let execution = Execution {
            result,
            observed: take(&mut cells, columns::OBSERVED_RESULTS),
            executed_by: take(&mut cells, columns::EXECUTED_BY),
            date: take(&mut cells, columns::EXECUTION_DATE),
            comments: take(&mut cells, columns::COMMENTS),
        };

        Ok(Record {
            id,
            execution,
            extra: cells,
        })
    }
}

/// A column header paired with its display width (in characters, as the
/// original spreadsheet measured them).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub header: String,
    pub width: u16,
}

impl ColumnSpec {
    pub fn new(header: &str, width: u16) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

/// One named table inside the workbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<Record>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnSpec>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Position of the first record with the given id. First match wins;
    /// duplicate ids are not rejected anywhere, so later duplicates are
    /// unreachable by id.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }

    pub fn record(&self, id: &str) -> Option<&Record> {
        self.position_of(id).map(|i| &self.rows[i])
    }
}

/// The full persisted document: an ordered set of uniquely named sheets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }

    pub fn sheet(&self, name: &str) -> Result<&Sheet> {
        self.sheets
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| self.not_found(name))
    }

    pub fn sheet_mut(&mut self, name: &str) -> Result<&mut Sheet> {
        match self.sheets.iter().position(|s| s.name == name) {
            Some(i) => Ok(&mut self.sheets[i]),
            None => Err(self.not_found(name)),
        }
    }

    fn not_found(&self, name: &str) -> RunsheetError {
        RunsheetError::SheetNotFound {
            name: name.to_string(),
            available: self.sheet_names(),
        }
    }
}

/// A three-state edit for one optional execution field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldEdit {
    /// Field absent from the payload: the prior value is retained.
    #[default]
    Keep,
    /// Explicit empty value: the field is blanked.
    Clear,
    /// The field is overwritten.
    Set(String),
}

impl FieldEdit {
    /// The value this edit writes, or `None` for `Keep`.
    pub fn resolve(&self) -> Option<String> {
        match self {
            FieldEdit::Keep => None,
            FieldEdit::Clear => Some(String::new()),
            FieldEdit::Set(v) => Some(v.clone()),
        }
    }

    pub fn set(value: impl Into<String>) -> Self {
        FieldEdit::Set(value.into())
    }
}

/// CLI-flag semantics: flag omitted keeps, empty value clears.
impl From<Option<String>> for FieldEdit {
    fn from(value: Option<String>) -> Self {
        match value {
            None => FieldEdit::Keep,
            Some(s) if s.is_empty() => FieldEdit::Clear,
            Some(s) => FieldEdit::Set(s),
        }
    }
}

// JSON semantics: a present-but-empty (or null) field clears. Absence maps to
// `Keep` through `Default`, which serde applies when the key is missing.
impl<'de> Deserialize<'de> for FieldEdit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(match value {
            None => FieldEdit::Clear,
            Some(s) if s.is_empty() => FieldEdit::Clear,
            Some(s) => FieldEdit::Set(s),
        })
    }
}

/// A partial update of the execution subset. The result is carried raw (as
/// entered by the caller) and parsed during validation so that a bad value is
/// a reportable error rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExecutionUpdate {
    #[serde(rename = "executionResult")]
    pub result: Option<String>,
    #[serde(rename = "observedResults")]
    pub observed: FieldEdit,
    #[serde(rename = "executedBy")]
    pub executed_by: FieldEdit,
    #[serde(rename = "executionDate")]
    pub date: FieldEdit,
    #[serde(rename = "comments")]
    pub comments: FieldEdit,
}

impl ExecutionUpdate {
    pub fn new(result: impl Into<String>) -> Self {
        Self {
            result: Some(result.into()),
            ..Default::default()
        }
    }

    pub fn with_observed(mut self, edit: FieldEdit) -> Self {
        self.observed = edit;
        self
    }

    pub fn with_executed_by(mut self, edit: FieldEdit) -> Self {
        self.executed_by = edit;
        self
    }

    pub fn with_date(mut self, edit: FieldEdit) -> Self {
        self.date = edit;
        self
    }

    pub fn with_comments(mut self, edit: FieldEdit) -> Self {
        self.comments = edit;
        self
    }
}
