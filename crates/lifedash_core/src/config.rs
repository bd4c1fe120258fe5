//! Runtime configuration for embedding callers.
//!
//! # Responsibility
//! - Resolve where the database and log files live.
//! - Pick the log level, from the environment when asked to.
//!
//! # Invariants
//! - `data_dir` is absolute and non-empty.
//! - `log_level` is always one accepted by [`crate::logging::init_logging`].

use crate::logging::{default_log_level, init_logging, parse_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "LIFEDASH_DATA_DIR";
pub const LOG_LEVEL_ENV: &str = "LIFEDASH_LOG_LEVEL";
pub const DEFAULT_DATABASE_FILE: &str = "lifedash.sqlite3";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingDataDir,
    RelativeDataDir(PathBuf),
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDataDir => write!(f, "{DATA_DIR_ENV} is not set"),
            Self::RelativeDataDir(path) => {
                write!(f, "data directory must be absolute, got `{}`", path.display())
            }
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub data_dir: PathBuf,
    pub log_level: &'static str,
    /// File name of the SQLite database inside `data_dir`.
    pub database_file: String,
}

impl CoreConfig {
    /// Config rooted at `data_dir` with the build's default log level.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data_dir = data_dir.as_ref();
        if data_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingDataDir);
        }
        if !data_dir.is_absolute() {
            return Err(ConfigError::RelativeDataDir(data_dir.to_path_buf()));
        }
        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            log_level: default_log_level(),
            database_file: DEFAULT_DATABASE_FILE.to_string(),
        })
    }

    /// Reads `LIFEDASH_DATA_DIR` and optional `LIFEDASH_LOG_LEVEL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// [`CoreConfig::from_env`] over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = lookup(DATA_DIR_ENV)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .ok_or(ConfigError::MissingDataDir)?;
        let config = Self::new(data_dir)?;

        match lookup(LOG_LEVEL_ENV).filter(|raw| !raw.trim().is_empty()) {
            Some(level) => config.with_log_level(&level),
            None => Ok(config),
        }
    }

    pub fn with_log_level(mut self, level: &str) -> Result<Self, ConfigError> {
        self.log_level = parse_level(level).map_err(ConfigError::InvalidLogLevel)?;
        Ok(self)
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.database_file)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }

    /// Starts file logging under [`CoreConfig::log_dir`].
    pub fn init_logging(&self) -> Result<(), String> {
        init_logging(self.log_level, &self.log_dir().to_string_lossy())
    }
}
