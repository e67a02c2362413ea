//! Runtime configuration resolved from the environment.
//!
//! # Invariants
//! - Blank environment values fall back to defaults.
//! - Resolution never fails; validation happens where values are used.

use crate::logging::default_log_level;
use crate::service::note_store::NOTES_STORAGE_KEY;
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "ACCNOTES_DB_PATH";
pub const ENV_STORAGE_KEY: &str = "ACCNOTES_STORAGE_KEY";
pub const ENV_LOG_LEVEL: &str = "ACCNOTES_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "ACCNOTES_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "accnotes.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite file backing the key-value store.
    pub db_path: PathBuf,
    /// Key under which the note list is stored.
    pub storage_key: String,
    pub log_level: String,
    /// File logging is disabled when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            storage_key: NOTES_STORAGE_KEY.to_string(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Builds a config from `ACCNOTES_*` variables of the process.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        Self {
            db_path: read(ENV_DB_PATH).map_or(defaults.db_path, PathBuf::from),
            storage_key: read(ENV_STORAGE_KEY).unwrap_or(defaults.storage_key),
            log_level: read(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: read(ENV_LOG_DIR).map(PathBuf::from),
        }
    }
}
