//! # Teller Shell
//!
//! Line loop over any `BufRead`/`Write` pair, so tests can drive it with
//! in-memory buffers.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin line ──► Command::from_str ──► Shell::execute ──► stdout         │
//! │                        │                     │                          │
//! │                        │ Err                 └──► CashRegister          │
//! │                        ▼                            │ notify            │
//! │                 print error, next line              ▼                   │
//! │                                              observers (file, console,  │
//! │                                              journal)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};
use std::sync::Arc;

use caixa_core::event::CURRENCY_SYMBOL;
use caixa_core::{CashRegister, Denomination, Journal, NoteBundle, WithdrawalError};
use tracing::{debug, warn};

use crate::command::{Command, HELP};
use crate::error::CliResult;

/// Whether the loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    register: CashRegister,
    journal: Arc<Journal>,
}

impl Shell {
    /// Wraps a register. `journal` should already be registered as one of
    /// its observers; `history` reads from it.
    pub fn new(register: CashRegister, journal: Arc<Journal>) -> Self {
        Shell { register, journal }
    }

    pub fn register(&self) -> &CashRegister {
        &self.register
    }

    /// Reads commands until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> CliResult<()> {
        writeln!(out, "Caixa ready. Type 'help' for commands.")?;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) if e.is_input_error() => {
                    debug!(line, error = %e, "Rejected input line");
                    writeln!(out, "{e}")?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            if self.execute(command, &mut out)? == Flow::Quit {
                break;
            }
        }

        out.flush()?;
        Ok(())
    }

    /// Runs one command, writing its reply to `out`.
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> CliResult<Flow> {
        match command {
            Command::Deposit(notes) => match self.register.deposit(&notes) {
                Ok(total) => writeln!(
                    out,
                    "Deposited {}. Total: {}",
                    describe(&notes),
                    money(total)
                )?,
                Err(e) => writeln!(out, "{e}")?,
            },
            Command::Withdraw(amount) => match self.register.withdraw(amount) {
                Ok(notes) => writeln!(out, "Dispensed {}", describe(&notes))?,
                Err(e @ WithdrawalError::CannotCompose { suggestion: Some(s), .. }) => {
                    warn!(amount, suggestion = s, "Withdrawal refused");
                    writeln!(out, "{e}. Try withdrawing {}", money(s))?
                }
                Err(e) => {
                    warn!(amount, error = %e, "Withdrawal refused");
                    writeln!(out, "{e}")?
                }
            },
            Command::Total => writeln!(out, "Total: {}", money(self.register.total()))?,
            Command::Notes => {
                for denomination in Denomination::DESCENDING {
                    writeln!(
                        out,
                        "{:>7} ({}): {}",
                        money(denomination.value()),
                        denomination,
                        self.register.inventory().count(denomination)
                    )?;
                }
            }
            Command::History => {
                let entries = self.journal.entries();
                if entries.is_empty() {
                    writeln!(out, "No notifications yet.")?;
                }
                for (index, entry) in entries.iter().enumerate() {
                    writeln!(out, "{:>3}. {entry}", index + 1)?;
                }
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }
}

fn money(amount: u64) -> String {
    format!("{CURRENCY_SYMBOL}{amount}")
}

/// `2 x R$10, 1 x R$5`, largest note first.
fn describe(notes: &NoteBundle) -> String {
    if notes.is_empty() {
        return "nothing".to_string();
    }

    Denomination::DESCENDING
        .into_iter()
        .filter(|d| notes.get(*d) > 0)
        .map(|d| format!("{} x {}", notes.get(d), money(d.value())))
        .collect::<Vec<_>>()
        .join(", ")
}
