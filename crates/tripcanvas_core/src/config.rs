//! Runtime configuration for hosts embedding the core.
//!
//! # Responsibility
//! - Describe where the blob store lives and how logging is set up.
//! - Layer values: built-in defaults, then an optional JSON file, then
//!   environment overrides.
//!
//! # Invariants
//! - Every field has a usable default; an empty environment yields
//!   `CoreConfig::default()`.
//! - Blank environment values are ignored rather than clearing a field.

use crate::logging::default_log_level;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const ENV_DB_PATH: &str = "TRIPCANVAS_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "TRIPCANVAS_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TRIPCANVAS_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "tripcanvas.sqlite3";

/// Configuration loading failure.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Host configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// SQLite file backing the blob store.
    pub db_path: PathBuf,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling log files; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Defaults with process environment overrides applied.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Reads a JSON config file; fields it omits keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies overrides from `lookup` (normally the process environment).
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(db_path) = non_blank(ENV_DB_PATH) {
            self.db_path = PathBuf::from(db_path.trim());
        }
        if let Some(level) = non_blank(ENV_LOG_LEVEL) {
            self.log_level = level.trim().to_string();
        }
        if let Some(log_dir) = non_blank(ENV_LOG_DIR) {
            self.log_dir = Some(PathBuf::from(log_dir.trim()));
        }
        self
    }
}
