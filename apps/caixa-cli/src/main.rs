//! # Caixa Teller Shell Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, stderr)
//! 2. Load notify configuration (caixa.toml + `CAIXA_*` env)
//! 3. Open the notification log, register observers
//! 4. Read commands from stdin until `quit` or end of input
//!
//! `caixa init-config` instead writes a default caixa.toml and exits.

fn main() -> anyhow::Result<()> {
    // The actual setup is in lib.rs for better testability
    caixa_cli::run()
}
