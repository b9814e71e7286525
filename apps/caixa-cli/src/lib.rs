//! # Caixa CLI Library
//!
//! Wires a [`CashRegister`] to the configured notifiers and hands stdin to
//! the teller [`Shell`](shell::Shell).
//!
//! ## Module Organization
//! ```text
//! caixa_cli/
//! ├── lib.rs       ◄─── You are here (startup & run)
//! ├── command.rs   ◄─── Line parsing
//! ├── shell.rs     ◄─── Command loop and replies
//! └── error.rs     ◄─── CliError
//! ```
//!
//! ## Observer Wiring
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     CashRegister observers                              │
//! │                                                                         │
//! │  1. FileNotifier     notificacoes.txt    [timestamp] message            │
//! │  2. ConsoleNotifier  stdout              (if console.enabled)           │
//! │  3. Journal          memory              read by `history`              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod command;
pub mod error;
pub mod shell;

use std::io;
use std::sync::Arc;

use caixa_core::{CashRegister, Journal};
use caixa_notify::{observers_from_config, NotifyConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use shell::Shell;

/// Entry point for the `caixa` binary.
///
/// ```text
/// caixa               teller shell on stdin/stdout
/// caixa init-config   write a default caixa.toml to edit
/// ```
pub fn run() -> anyhow::Result<()> {
    init_tracing();

    match std::env::args().nth(1).as_deref() {
        None => run_shell(),
        Some("init-config") => init_config(),
        Some(other) => anyhow::bail!("Unknown argument '{other}'. Usage: caixa [init-config]"),
    }
}

/// Writes the default configuration where [`NotifyConfig::load`] looks
/// for it. Never overwrites an existing file.
fn init_config() -> anyhow::Result<()> {
    if let Some(path) = NotifyConfig::resolve_path(None).filter(|p| p.exists()) {
        anyhow::bail!("{} already exists", path.display());
    }

    let path = NotifyConfig::default().save(None)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn run_shell() -> anyhow::Result<()> {
    info!("Starting Caixa teller shell");

    let config = NotifyConfig::load(None)?;
    info!(
        log = ?config.log.path,
        console = config.console.enabled,
        "Configuration loaded"
    );

    let journal = Arc::new(Journal::new());
    let mut register = CashRegister::new();
    for observer in observers_from_config(&config)? {
        register.add_observer(observer);
    }
    register.add_observer(journal.clone());

    let mut shell = Shell::new(register, journal);
    shell.run(io::stdin().lock(), io::stdout().lock())?;

    info!(total = shell.register().total(), "Teller shell closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never mix with shell replies.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: INFO, DEBUG for caixa crates
///
/// Every register notification is also logged on target
/// `caixa::notification` (INFO, or WARN for failures).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,caixa=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
