//! Application configuration.

use crate::games::tictactoe::SortOrder;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_timeline.toml";

/// Settings loaded from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Initial order of the history list.
    #[serde(default)]
    history_order: SortOrder,

    /// File the TUI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_timeline.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_order: SortOrder::default(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(history_order = %config.history_order, "Config loaded successfully");
        Ok(config)
    }

    /// The file [`load`](Self::load) reads: `path` if given, else the
    /// default file if it exists.
    pub fn resolve_path(path: Option<&Path>) -> Option<PathBuf> {
        match path {
            Some(path) => Some(path.to_path_buf()),
            None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.exists()),
        }
    }

    /// Loads `path` if given, else the default file if present, else defaults.
    ///
    /// An explicitly named file must exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match Self::resolve_path(path) {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line flags on top of file values. `None` keeps the
    /// file value.
    pub fn apply_overrides(self, order: Option<SortOrder>, log_file: Option<PathBuf>) -> Self {
        let config = match order {
            Some(order) => self.with_history_order(order),
            None => self,
        };
        match log_file {
            Some(log_file) => config.with_log_file(log_file),
            None => config,
        }
    }

    /// Overrides the history order.
    pub fn with_history_order(mut self, order: SortOrder) -> Self {
        self.history_order = order;
        self
    }

    /// Overrides the log file.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(*config.history_order(), SortOrder::Ascending);
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "history_order = \"descending\"").expect("write");

        let config = AppConfig::from_file(file.path()).expect("valid config");
        assert_eq!(*config.history_order(), SortOrder::Descending);
        assert_eq!(config.log_file(), &default_log_file());
    }

    #[test]
    fn test_bad_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "history_order = \"sideways\"").expect("write");

        let err = AppConfig::from_file(file.path()).expect_err("invalid order");
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("nope.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::default()
            .with_history_order(SortOrder::Descending)
            .with_log_file(PathBuf::from("other.log"));
        assert_eq!(*config.history_order(), SortOrder::Descending);
        assert_eq!(config.log_file(), Path::new("other.log"));
    }

    #[test]
    fn test_resolve_path_prefers_explicit_file() {
        let path = Path::new("custom.toml");
        assert_eq!(AppConfig::resolve_path(Some(path)), Some(path.to_path_buf()));
    }

    #[test]
    fn test_flags_override_file_values() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "history_order = \"descending\"").expect("write");
        writeln!(file, "log_file = \"from_file.log\"").expect("write");
        writeln!(file, "log_filter = \"debug\"").expect("write");
        let loaded = AppConfig::load(Some(file.path())).expect("valid config");

        let config = loaded
            .clone()
            .apply_overrides(Some(SortOrder::Ascending), Some(PathBuf::from("flag.log")));
        assert_eq!(*config.history_order(), SortOrder::Ascending);
        assert_eq!(config.log_file(), Path::new("flag.log"));
        assert_eq!(config.log_filter(), "debug");

        let unchanged = loaded.clone().apply_overrides(None, None);
        assert_eq!(unchanged, loaded);
    }
}
