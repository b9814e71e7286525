//! # Register Events
//!
//! Every notifiable thing the register does, as a typed value. Observers
//! receive the rendered text (`to_string()`); the register also logs the
//! structured fields.

use std::fmt;

/// Currency symbol used in notification text.
pub const CURRENCY_SYMBOL: &str = "R$";

/// A deposit, withdrawal or withdrawal failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterEvent {
    /// Notes were added. Also emitted when a failed withdrawal puts its
    /// notes back.
    Deposited { total: u64 },

    /// A withdrawal was paid out in full.
    Withdrawn { amount: u64 },

    /// The register holds less than the requested amount.
    InsufficientFunds { requested: u64 },

    /// The amount cannot be composed, but a smaller one can.
    SuggestLesser { requested: u64, suggestion: u64 },

    /// The amount cannot be composed and nothing smaller can either.
    CannotCompose { requested: u64 },
}

impl RegisterEvent {
    /// Short machine-readable name, used as a log field.
    pub const fn kind(&self) -> &'static str {
        match self {
            RegisterEvent::Deposited { .. } => "deposited",
            RegisterEvent::Withdrawn { .. } => "withdrawn",
            RegisterEvent::InsufficientFunds { .. } => "insufficient_funds",
            RegisterEvent::SuggestLesser { .. } => "suggest_lesser",
            RegisterEvent::CannotCompose { .. } => "cannot_compose",
        }
    }

    /// True for the three failure events. The register logs these at
    /// `WARN` on the notification channel.
    pub const fn is_failure(&self) -> bool {
        !matches!(
            self,
            RegisterEvent::Deposited { .. } | RegisterEvent::Withdrawn { .. }
        )
    }
}

impl fmt::Display for RegisterEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cur = CURRENCY_SYMBOL;
        match self {
            RegisterEvent::Deposited { total } => {
                write!(f, "Deposit completed. Total available: {cur}{total}")
            }
            RegisterEvent::Withdrawn { amount } => {
                write!(f, "Withdrawal completed: {cur}{amount}")
            }
            RegisterEvent::InsufficientFunds { requested } => {
                write!(f, "Error: insufficient balance for {cur}{requested}")
            }
            RegisterEvent::SuggestLesser {
                requested,
                suggestion,
            } => write!(
                f,
                "Error: cannot compose {cur}{requested}. Suggestion: withdraw {cur}{suggestion}"
            ),
            RegisterEvent::CannotCompose { requested } => write!(
                f,
                "Error: cannot compose {cur}{requested} with the available notes."
            ),
        }
    }
}
