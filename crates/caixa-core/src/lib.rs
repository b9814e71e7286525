//! # caixa-core: Pure Cash Register Logic
//!
//! This crate is the **heart** of Caixa. It tracks a drawer of banknotes,
//! takes deposits, pays out withdrawals with a greedy note walk, and tells
//! observers about every outcome. It performs no I/O of its own.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Caixa Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    caixa-cli (teller shell)                     │   │
//! │  │        deposit ──► withdraw ──► total ──► notes ──► history     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ caixa-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────┐  ┌───────────┐  ┌──────────┐  ┌──────────┐  │   │
//! │  │   │ denomination │  │   notes   │  │ register │  │ observer │  │   │
//! │  │   │  2 .. 200    │  │ Inventory │  │ withdraw │  │  trait   │  │   │
//! │  │   │              │  │  Bundle   │  │ suggest  │  │ Journal  │  │   │
//! │  │   └──────────────┘  └───────────┘  └──────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO FILES • NO CONSOLE • NO CLOCK                              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Arc<dyn TransactionObserver>           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               caixa-notify (file + console observers)           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`denomination`] - The closed set of banknotes
//! - [`notes`] - Note bundles and the register's inventory
//! - [`register`] - Deposit, withdraw, feasibility and suggestion
//! - [`observer`] - Observer trait and the in-memory journal
//! - [`event`] - Typed notifications and their message text
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use caixa_core::{CashRegister, Denomination, NoteBundle};
//!
//! let mut register = CashRegister::new();
//! let total = register.deposit(&NoteBundle::new().with(Denomination::Ten, 1))?;
//! assert_eq!(total, 10);
//!
//! let paid = register.withdraw(10)?;
//! assert_eq!(paid.get(Denomination::Ten), 1);
//! assert_eq!(register.total(), 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod denomination;
pub mod error;
pub mod event;
pub mod notes;
pub mod observer;
pub mod register;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use denomination::Denomination;
pub use error::{
    DenominationError, DepositError, DepositResult, ObserverError, ObserverResult,
    WithdrawalError, WithdrawalResult,
};
pub use event::RegisterEvent;
pub use notes::{NoteBundle, NoteInventory};
pub use observer::{Journal, TransactionObserver};
pub use register::CashRegister;
