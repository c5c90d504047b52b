use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunsheetError {
    #[error("Workbook not found: {}", .0.display())]
    DocumentNotFound(PathBuf),

    #[error("Workbook already exists: {} (pass --force to overwrite)", .0.display())]
    DocumentExists(PathBuf),

    #[error("Sheet not found: \"{name}\". Available sheets: {names}", names = .available.join(", "))]
    SheetNotFound {
        name: String,
        available: Vec<String>,
    },

    #[error("Test case not found: \"{id}\" in sheet \"{sheet}\"")]
    RecordNotFound { sheet: String, id: String },

    #[error("Execution result is required")]
    MissingResult,

    #[error("Invalid execution result: \"{0}\". Valid values are: Pass, Fail, Not Run, Blocked")]
    InvalidResult(String),

    #[error("Invalid date format: \"{0}\". Expected format: YYYY-MM-DD")]
    InvalidDateFormat(String),

    #[error("Invalid date: \"{0}\" is not a valid date")]
    InvalidDate(String),

    #[error("Batch spec must contain a non-empty list of updates")]
    EmptyBatch,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RunsheetError>;
