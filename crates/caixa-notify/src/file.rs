//! # File Notifier
//!
//! Appends one timestamped line per register event to a text log.
//!
//! ```text
//! notificacoes.txt
//! ─────────────────────────────────────────────────────────
//! Notificações:
//! [19/10/2026, 14:03:12] Deposit completed. Total available: R$210
//! [19/10/2026, 14:03:20] Error: cannot compose R$205. Suggestion: withdraw R$200
//! ```
//!
//! The file is opened per message, so several notifiers (or processes) may
//! share one log and lines are never held back in a buffer.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use caixa_core::{ObserverResult, TransactionObserver};
use chrono::Local;
use tracing::{debug, info};

use crate::config::{is_valid_timestamp_format, LogSettings};
use crate::error::{NotifyError, NotifyResult};

/// File-backed [`TransactionObserver`].
#[derive(Debug, Clone)]
pub struct FileNotifier {
    path: PathBuf,
    timestamp_format: String,
}

impl FileNotifier {
    /// Opens (or creates) the log at `settings.path`.
    ///
    /// A new log starts with `settings.header` on its own line. An existing
    /// log is left untouched.
    pub fn open(settings: &LogSettings) -> NotifyResult<Self> {
        if !is_valid_timestamp_format(&settings.timestamp_format) {
            return Err(NotifyError::InvalidConfig(format!(
                "invalid timestamp format: {}",
                settings.timestamp_format
            )));
        }

        let path = settings.path.clone();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                writeln!(file, "{}", settings.header)?;
                info!(?path, "Notification log created");
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!(?path, "Appending to existing notification log");
            }
            Err(e) => return Err(e.into()),
        }

        Ok(FileNotifier {
            path,
            timestamp_format: settings.timestamp_format.clone(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renders a log line for `message` stamped with the current local time.
    fn format_line(&self, message: &str) -> String {
        let when = Local::now().format(&self.timestamp_format);
        format!("[{when}] {message}")
    }
}

impl TransactionObserver for FileNotifier {
    fn record(&self, message: &str) -> ObserverResult {
        let mut file = OpenOptions::new().append(true).create(true).open(&self.path)?;
        writeln!(file, "{}", self.format_line(message))?;
        Ok(())
    }
}
