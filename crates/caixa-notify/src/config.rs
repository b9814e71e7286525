//! # Notify Configuration
//!
//! Where notifications go and how log lines are stamped.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CAIXA_LOG_PATH=/var/log/caixa.txt                                  │
//! │     CAIXA_CONSOLE=false                                                │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $CAIXA_CONFIG, or caixa.toml in the platform config dir            │
//! │     ~/.config/caixa/caixa.toml (Linux)                                 │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     ./notificacoes.txt, pt-BR timestamps, console on                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # caixa.toml
//! [log]
//! path = "notificacoes.txt"
//! header = "Notificações:"
//! timestamp_format = "%d/%m/%Y, %H:%M:%S"
//!
//! [console]
//! enabled = true
//! ```

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{NotifyError, NotifyResult};

// =============================================================================
// Log File Settings
// =============================================================================

/// Settings for the append-only notification log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSettings {
    /// Log file location.
    #[serde(default = "default_log_path")]
    pub path: PathBuf,

    /// First line written when the log is created.
    #[serde(default = "default_header")]
    pub header: String,

    /// chrono strftime pattern for the `[timestamp]` prefix.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_log_path() -> PathBuf {
    PathBuf::from("notificacoes.txt")
}

fn default_header() -> String {
    "Notificações:".to_string()
}

/// Day/month/year with a comma before the time, as pt-BR renders it.
fn default_timestamp_format() -> String {
    "%d/%m/%Y, %H:%M:%S".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            path: default_log_path(),
            header: default_header(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

/// True if chrono can render `format` without error.
pub(crate) fn is_valid_timestamp_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

// =============================================================================
// Console Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Print every notification on stdout.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

// =============================================================================
// Notify Config
// =============================================================================

/// Complete notification configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotifyConfig {
    #[serde(default)]
    pub log: LogSettings,

    #[serde(default)]
    pub console: ConsoleSettings,
}

impl NotifyConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// The file is the first of `config_path`, `$CAIXA_CONFIG` and the
    /// platform config dir (see [`resolve_path`](Self::resolve_path)). A
    /// missing file is not an error; an unreadable or malformed one is.
    /// Environment overrides apply on top, then the result is validated.
    pub fn load(config_path: Option<PathBuf>) -> NotifyResult<Self> {
        let mut config = match Self::resolve_path(config_path) {
            Some(path) => Self::read_file(&path)?.unwrap_or_default(),
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Writes this configuration as TOML to the resolved path and returns
    /// that path. Parent directories are created as needed.
    pub fn save(&self, config_path: Option<PathBuf>) -> NotifyResult<PathBuf> {
        let path = Self::resolve_path(config_path).ok_or_else(|| {
            NotifyError::ConfigSaveFailed("no config directory on this platform".into())
        })?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, toml::to_string_pretty(self)?)?;

        info!(?path, "Notify config written");
        Ok(path)
    }

    /// Picks the config file: `explicit`, else `$CAIXA_CONFIG`, else
    /// `caixa.toml` in the platform config dir.
    pub fn resolve_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
        Self::resolve_path_with(explicit, |key| std::env::var(key).ok())
    }

    fn resolve_path_with(
        explicit: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Option<PathBuf> {
        explicit
            .or_else(|| lookup("CAIXA_CONFIG").map(PathBuf::from))
            .or_else(|| {
                directories::ProjectDirs::from("com", "caixa", "caixa")
                    .map(|dirs| dirs.config_dir().join("caixa.toml"))
            })
    }

    /// Parses the file at `path`, or `None` if there is no such file.
    fn read_file(path: &Path) -> NotifyResult<Option<Self>> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(?path, "No config file, using defaults");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        info!(?path, "Loading notify config from file");
        Ok(Some(toml::from_str(&contents)?))
    }

    /// Validates the configuration.
    pub fn validate(&self) -> NotifyResult<()> {
        if self.log.path.as_os_str().is_empty() {
            return Err(NotifyError::InvalidConfig(
                "log.path must not be empty".into(),
            ));
        }

        if self.log.timestamp_format.trim().is_empty() {
            return Err(NotifyError::InvalidConfig(
                "log.timestamp_format must not be empty".into(),
            ));
        }

        if !is_valid_timestamp_format(&self.log.timestamp_format) {
            return Err(NotifyError::InvalidConfig(format!(
                "log.timestamp_format is not a valid strftime pattern: {}",
                self.log.timestamp_format
            )));
        }

        Ok(())
    }

    /// Applies overrides from `lookup` (the process environment in
    /// [`load`](Self::load)).
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("CAIXA_LOG_PATH") {
            debug!(path = %path, "Overriding log path from environment");
            self.log.path = PathBuf::from(path);
        }

        if let Some(header) = lookup("CAIXA_LOG_HEADER") {
            self.log.header = header;
        }

        if let Some(format) = lookup("CAIXA_TIMESTAMP_FORMAT") {
            self.log.timestamp_format = format;
        }

        if let Some(console) = lookup("CAIXA_CONSOLE") {
            match console.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.console.enabled = true,
                "0" | "false" | "no" | "off" => self.console.enabled = false,
                _ => warn!(value = %console, "Unknown CAIXA_CONSOLE value in environment"),
            }
        }
    }
}
