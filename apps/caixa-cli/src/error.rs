//! # CLI Error Types
//!
//! Everything that can go wrong between reading a line and running it.
//! Register outcomes are not errors here: a refused withdrawal is printed
//! and the shell carries on.

use caixa_core::{DenominationError, DepositError};
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
    UnknownCommand(String),

    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("Unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("'{0}' is not a whole number")]
    InvalidNumber(String),

    #[error("'{0}' must look like <note>=<count>, e.g. 50=2")]
    MalformedNote(String),

    #[error(transparent)]
    InvalidNote(#[from] DenominationError),

    /// A single line names more notes than can be counted.
    #[error(transparent)]
    TooManyNotes(#[from] DepositError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Input mistakes the operator can correct by retyping the line.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, CliError::Io(_))
    }
}
