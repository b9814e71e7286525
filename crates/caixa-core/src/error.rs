//! # Error Types
//!
//! Domain-specific error types for caixa-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  caixa-core errors (this file)                                         │
//! │  ├── WithdrawalError    - Recoverable withdrawal failures              │
//! │  ├── DepositError       - Deposit too large to count                   │
//! │  ├── DenominationError  - Face value / tag not in the note set         │
//! │  └── ObserverError      - An observer could not record a message       │
//! │                                                                         │
//! │  caixa-notify errors (separate crate)                                  │
//! │  └── NotifyError        - Config and log file failures                 │
//! │                                                                         │
//! │  NOT errors: removing more notes than held is a caller bug (panic)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the amounts involved in every withdrawal error
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::denomination::Denomination;

// =============================================================================
// Withdrawal Error
// =============================================================================

/// Why a withdrawal was refused.
///
/// Both variants leave the inventory exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WithdrawalError {
    /// The register does not hold enough money in total.
    ///
    /// ## User Workflow
    /// ```text
    /// Inventory: {dois: 1}   (total R$2)
    ///      │
    ///      ▼
    /// withdraw(5)
    ///      │
    ///      ▼
    /// InsufficientFunds { requested: 5, available: 2 }
    /// ```
    #[error("Insufficient balance for R${requested} (available R${available})")]
    InsufficientFunds { requested: u64, available: u64 },

    /// Enough money exists but the greedy walk could not hit the amount.
    ///
    /// `suggestion` is the largest smaller amount the current notes can pay,
    /// if any amount down to the smallest note is payable.
    #[error("Cannot compose R${requested} with the available notes")]
    CannotCompose {
        requested: u64,
        suggestion: Option<u64>,
    },

    /// A withdrawal of nothing was requested.
    #[error("Withdrawal amount must be positive")]
    ZeroAmount,
}

impl WithdrawalError {
    /// The suggested lesser amount, when the failure carries one.
    pub fn suggestion(&self) -> Option<u64> {
        match self {
            WithdrawalError::CannotCompose { suggestion, .. } => *suggestion,
            _ => None,
        }
    }
}

// =============================================================================
// Deposit Error
// =============================================================================

/// Why a deposit was refused. A refused deposit changes nothing and sends
/// no notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DepositError {
    /// One bundle names more notes of a denomination than a `u64` counts.
    #[error("Too many {denomination} notes in one deposit")]
    CountOverflow { denomination: Denomination },

    /// The register total would no longer fit in a `u64`.
    ///
    /// ```text
    /// Inventory: {} (total R$0)
    ///      │
    ///      ▼
    /// deposit({duzentos: 100000000000000000})   (R$2 x 10^19)
    ///      │
    ///      ▼
    /// TotalOverflow { held: 0 }
    /// ```
    #[error("Deposit refused: the register total would overflow (holding R${held})")]
    TotalOverflow { held: u64 },
}

// =============================================================================
// Denomination Error
// =============================================================================

/// A face value or tag that is not part of the note set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DenominationError {
    #[error("No banknote with face value {0}")]
    UnknownValue(u64),

    #[error("Unknown banknote '{0}'")]
    UnknownName(String),
}

// =============================================================================
// Observer Error
// =============================================================================

/// Failure reported by a [`TransactionObserver`](crate::TransactionObserver).
///
/// The register logs these and moves on to the next observer.
#[derive(Debug, Error)]
pub enum ObserverError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Observer unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Outcome of a withdrawal: the notes handed out, or why none were.
pub type WithdrawalResult<T> = Result<T, WithdrawalError>;

/// Outcome of a deposit: the new register total.
pub type DepositResult<T> = Result<T, DepositError>;

/// Convenience alias for observer implementations.
pub type ObserverResult = Result<(), ObserverError>;
