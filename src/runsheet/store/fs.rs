use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use super::DocumentStore;
use crate::error::{Result, RunsheetError};
use crate::model::Workbook;

/// Production store: the workbook as pretty-printed JSON at an explicit path.
///
/// The path is always supplied by the caller (resolved from the CLI flag,
/// environment, or config file) — there is no ambient default location.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Backup naming: `{stem}-backup-{YYYY-MM-DD-HH-MM-SS}{ext}`, next to the
    /// original.
    fn backup_path(&self) -> PathBuf {
        let stamp = Utc::now().format("%Y-%m-%d-%H-%M-%S");
        let stem = self
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("workbook");
        let name = match self.path.extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{}-backup-{}.{}", stem, stamp, ext),
            None => format!("{}-backup-{}", stem, stamp),
        };
        match self.path.parent() {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }
}

impl DocumentStore for FileStore {
    fn load(&self) -> Result<Workbook> {
        if !self.path.exists() {
            return Err(RunsheetError::DocumentNotFound(self.path.clone()));
        }
        let content = fs::read_to_string(&self.path)?;
        let workbook = serde_json::from_str(&content)?;
        Ok(workbook)
    }

    fn persist(&mut self, workbook: &Workbook) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        let content = serde_json::to_string_pretty(workbook)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn create_backup(&mut self) -> Result<PathBuf> {
        if !self.path.exists() {
            return Err(RunsheetError::DocumentNotFound(self.path.clone()));
        }
        let backup = self.backup_path();
        fs::copy(&self.path, &backup)?;
        Ok(backup)
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn location(&self) -> Option<PathBuf> {
        Some(self.path.clone())
    }
}
