//! # Configuration
//!
//! Runsheet configuration is managed by [`confique`], loading layered values
//! from environment variables and a TOML file.
//!
//! The workbook path is resolved in priority order:
//! 1. **CLI flag**: `--file <path>`.
//! 2. **Environment**: `RUNSHEET_WORKBOOK`.
//! 3. **Global config**: `runsheet.toml` in the OS config directory (via the
//!    `directories` crate).
//! 4. **Compiled default**: `flight-test-scenarios.json` in the current
//!    directory.
//!
//! Nothing below the config layer knows about any of this — the store always
//! receives an explicit path.

use std::path::{Path, PathBuf};

use confique::Config;
use directories::ProjectDirs;

use crate::error::{Result, RunsheetError};

/// Workbook filename used when nothing else names one.
pub const DEFAULT_WORKBOOK: &str = "flight-test-scenarios.json";

/// Configuration for runsheet, stored in `runsheet.toml`.
#[derive(Config, Debug, Clone, Default)]
pub struct RunsheetConfig {
    /// Path to the workbook document.
    #[config(env = "RUNSHEET_WORKBOOK")]
    pub workbook: Option<String>,
}

impl RunsheetConfig {
    /// Load from the environment and the global config file, if present.
    pub fn load() -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = global_config_path() {
            if path.exists() {
                builder = builder.file(&path);
            }
        }
        builder
            .load()
            .map_err(|e| RunsheetError::Config(e.to_string()))
    }

    /// Final workbook path: an explicit CLI flag wins over everything the
    /// loader layered together.
    pub fn resolve_workbook(&self, cli_flag: Option<&Path>) -> PathBuf {
        if let Some(path) = cli_flag {
            return path.to_path_buf();
        }
        match &self.workbook {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(DEFAULT_WORKBOOK),
        }
    }
}

fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "runsheet").map(|dirs| dirs.config_dir().join("runsheet.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_wins() {
        let config = RunsheetConfig {
            workbook: Some("/from/config.json".to_string()),
        };
        let path = config.resolve_workbook(Some(Path::new("/from/flag.json")));
        assert_eq!(path, PathBuf::from("/from/flag.json"));
    }

    #[test]
    fn config_value_beats_the_default() {
        let config = RunsheetConfig {
            workbook: Some("/from/config.json".to_string()),
        };
        assert_eq!(
            config.resolve_workbook(None),
            PathBuf::from("/from/config.json")
        );
    }

    #[test]
    fn default_when_nothing_is_set() {
        let config = RunsheetConfig::default();
        assert_eq!(
            config.resolve_workbook(None),
            PathBuf::from(DEFAULT_WORKBOOK)
        );
    }
}
