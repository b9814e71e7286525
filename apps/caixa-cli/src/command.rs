//! # Teller Commands
//!
//! One command per input line.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Line                          Command                                  │
//! │  ────                          ───────                                  │
//! │  deposit 200=1 dez=2           Deposit({duzentos: 1, dez: 2})           │
//! │  withdraw 205                  Withdraw(205)                            │
//! │  total                         Total                                    │
//! │  notes                         Notes                                    │
//! │  history                       History                                  │
//! │  help                          Help                                     │
//! │  quit | exit                   Quit                                     │
//! │                                                                         │
//! │  Portuguese aliases: depositar, sacar, saldo, cedulas, sair            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::str::FromStr;

use caixa_core::{Denomination, NoteBundle};

use crate::error::{CliError, CliResult};

/// Text printed by `help`.
pub const HELP: &str = "\
Commands:
  deposit <note>=<count> ...   add notes (note as value or name, e.g. 50=2 dez=1)
  withdraw <amount>            pay out an amount
  total                        show the total held
  notes                        show the count of each note
  history                      show every notification so far
  help                         show this text
  quit                         leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Deposit(NoteBundle),
    Withdraw(u64),
    Total,
    Notes,
    History,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CliError;

    fn from_str(line: &str) -> CliResult<Self> {
        let mut words = line.split_whitespace();
        let keyword = words.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = words.collect();

        match keyword.as_str() {
            "deposit" | "depositar" => parse_deposit(&args).map(Command::Deposit),
            "withdraw" | "sacar" => parse_withdraw(&args).map(Command::Withdraw),
            "total" | "saldo" => no_args(&args, Command::Total),
            "notes" | "cedulas" => no_args(&args, Command::Notes),
            "history" => no_args(&args, Command::History),
            "help" | "?" => no_args(&args, Command::Help),
            "quit" | "exit" | "sair" => no_args(&args, Command::Quit),
            _ => Err(CliError::UnknownCommand(keyword)),
        }
    }
}

fn no_args(args: &[&str], command: Command) -> CliResult<Command> {
    match args.first() {
        Some(extra) => Err(CliError::UnexpectedArgument(extra.to_string())),
        None => Ok(command),
    }
}

fn parse_count(s: &str) -> CliResult<u64> {
    s.parse().map_err(|_| CliError::InvalidNumber(s.to_string()))
}

fn parse_deposit(args: &[&str]) -> CliResult<NoteBundle> {
    if args.is_empty() {
        return Err(CliError::MissingArgument {
            command: "deposit",
            expected: "at least one <note>=<count>",
        });
    }

    let mut bundle = NoteBundle::new();
    for arg in args {
        let (note, count) = arg
            .split_once('=')
            .ok_or_else(|| CliError::MalformedNote(arg.to_string()))?;
        let denomination: Denomination = note.parse()?;
        bundle.try_add(denomination, parse_count(count)?)?;
    }
    Ok(bundle)
}

fn parse_withdraw(args: &[&str]) -> CliResult<u64> {
    match args {
        [] => Err(CliError::MissingArgument {
            command: "withdraw",
            expected: "an amount",
        }),
        [amount] => parse_count(amount),
        [_, extra, ..] => Err(CliError::UnexpectedArgument(extra.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caixa_core::DepositError;

    #[test]
    fn test_parse_deposit() {
        let cmd: Command = "deposit 200=1 dez=2 5=0".parse().unwrap();
        assert_eq!(
            cmd,
            Command::Deposit(
                NoteBundle::new()
                    .with(Denomination::TwoHundred, 1)
                    .with(Denomination::Ten, 2)
            )
        );
    }

    #[test]
    fn test_parse_deposit_repeated_note_accumulates() {
        let cmd: Command = "depositar 2=1 dois=2".parse().unwrap();
        assert_eq!(cmd, Command::Deposit(NoteBundle::new().with(Denomination::Two, 3)));
    }

    #[test]
    fn test_parse_deposit_count_overflow() {
        let line = format!("deposit 2={} dois=1", u64::MAX);
        assert!(matches!(
            line.parse::<Command>(),
            Err(CliError::TooManyNotes(DepositError::CountOverflow {
                denomination: Denomination::Two
            }))
        ));
    }

    #[test]
    fn test_parse_deposit_errors() {
        assert!(matches!(
            "deposit".parse::<Command>(),
            Err(CliError::MissingArgument { .. })
        ));
        assert!(matches!(
            "deposit 50".parse::<Command>(),
            Err(CliError::MalformedNote(_))
        ));
        assert!(matches!(
            "deposit 3=1".parse::<Command>(),
            Err(CliError::InvalidNote(_))
        ));
        assert!(matches!(
            "deposit 10=-1".parse::<Command>(),
            Err(CliError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_parse_withdraw() {
        assert_eq!("withdraw 205".parse::<Command>().unwrap(), Command::Withdraw(205));
        assert_eq!("  SACAR   10 ".parse::<Command>().unwrap(), Command::Withdraw(10));
        assert!(matches!(
            "withdraw".parse::<Command>(),
            Err(CliError::MissingArgument { .. })
        ));
        assert!(matches!(
            "withdraw 10 20".parse::<Command>(),
            Err(CliError::UnexpectedArgument(_))
        ));
        assert!(matches!(
            "withdraw ten".parse::<Command>(),
            Err(CliError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("total".parse::<Command>().unwrap(), Command::Total);
        assert_eq!("notes".parse::<Command>().unwrap(), Command::Notes);
        assert_eq!("history".parse::<Command>().unwrap(), Command::History);
        assert_eq!("?".parse::<Command>().unwrap(), Command::Help);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
        assert!(matches!(
            "total now".parse::<Command>(),
            Err(CliError::UnexpectedArgument(_))
        ));
        assert!(matches!(
            "transfer 10".parse::<Command>(),
            Err(CliError::UnknownCommand(_))
        ));
    }
}
