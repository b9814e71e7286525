//! # Notify Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Notify Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────────┐  ┌─────────────────────┐                      │
//! │  │   Configuration     │  │     Log File        │                      │
//! │  │                     │  │                     │                      │
//! │  │  InvalidConfig      │  │  Io                 │                      │
//! │  │  ConfigLoadFailed   │  │                     │                      │
//! │  │  ConfigSaveFailed   │  │                     │                      │
//! │  └─────────────────────┘  └─────────────────────┘                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for notify operations.
pub type NotifyResult<T> = Result<T, NotifyError>;

#[derive(Debug, Error)]
pub enum NotifyError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// A configuration value is unusable.
    #[error("Invalid notify configuration: {0}")]
    InvalidConfig(String),

    /// Failed to load or parse the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to write the config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Log File Errors
    // =========================================================================
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for NotifyError {
    fn from(err: toml::de::Error) -> Self {
        NotifyError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for NotifyError {
    fn from(err: toml::ser::Error) -> Self {
        NotifyError::ConfigSaveFailed(err.to_string())
    }
}

impl NotifyError {
    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            NotifyError::InvalidConfig(_)
                | NotifyError::ConfigLoadFailed(_)
                | NotifyError::ConfigSaveFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_error_is_config_error() {
        let err: NotifyError = toml::from_str::<toml::Value>("= broken").unwrap_err().into();
        assert!(err.is_config_error());
        assert!(err.to_string().starts_with("Failed to load config"));
    }

    #[test]
    fn test_io_error_is_not_config_error() {
        let err: NotifyError = std::io::Error::other("gone").into();
        assert!(!err.is_config_error());
    }
}
