//! # caixa-notify: Notification Observers
//!
//! Implementations of [`caixa_core::TransactionObserver`] that reach outside
//! the process, plus the configuration that picks between them.
//!
//! ## Module Organization
//! ```text
//! caixa_notify/
//! ├── lib.rs       ◄─── You are here (observer wiring)
//! ├── config.rs    ◄─── NotifyConfig (TOML + env)
//! ├── file.rs      ◄─── FileNotifier (append-only log)
//! ├── console.rs   ◄─── ConsoleNotifier (stdout)
//! └── error.rs     ◄─── NotifyError
//! ```

pub mod config;
pub mod console;
pub mod error;
pub mod file;

use std::sync::Arc;

use caixa_core::TransactionObserver;
use tracing::info;

pub use config::{ConsoleSettings, LogSettings, NotifyConfig};
pub use console::ConsoleNotifier;
pub use error::{NotifyError, NotifyResult};
pub use file::FileNotifier;

/// Builds the observers `config` asks for, in the order they should be
/// registered: the log file first, then the console.
pub fn observers_from_config(config: &NotifyConfig) -> NotifyResult<Vec<Arc<dyn TransactionObserver>>> {
    let mut observers: Vec<Arc<dyn TransactionObserver>> = Vec::new();

    let file = FileNotifier::open(&config.log)?;
    info!(path = ?file.path(), "File notifier ready");
    observers.push(Arc::new(file));

    if config.console.enabled {
        observers.push(Arc::new(ConsoleNotifier::stdout()));
    }

    Ok(observers)
}
