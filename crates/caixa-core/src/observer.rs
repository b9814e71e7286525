//! # Observers
//!
//! The register reports every deposit, withdrawal and failure to a list of
//! observers. Observers are shared handles (`Arc<dyn TransactionObserver>`):
//! whoever registers one keeps its own clone and can inspect it later.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Notification Fan-out                                 │
//! │                                                                         │
//! │  CashRegister::notify(event)                                           │
//! │      │                                                                  │
//! │      ├──► observer[0].record(msg)   (registration order)               │
//! │      ├──► observer[1].record(msg)   Err → warn!, keep going            │
//! │      ├──► ...                                                          │
//! │      └──► info!/warn!(target: "caixa::notification")                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! File and console implementations live in `caixa-notify`. [`Journal`] is
//! the in-memory one.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::ObserverResult;

/// Receives one message per register event.
///
/// Implementations are invoked synchronously. An `Err` is logged by the
/// register and does not affect the operation or the other observers.
pub trait TransactionObserver: Send + Sync {
    /// Records a single notification message.
    fn record(&self, message: &str) -> ObserverResult;
}

/// Keeps every recorded message in memory.
///
/// ## Example
/// ```rust
/// use std::sync::Arc;
/// use caixa_core::{CashRegister, Denomination, Journal, NoteBundle};
///
/// let journal = Arc::new(Journal::new());
/// let mut register = CashRegister::new();
/// register.add_observer(journal.clone());
///
/// register.deposit(&NoteBundle::new().with(Denomination::Ten, 1)).unwrap();
/// assert_eq!(journal.entries(), vec!["Deposit completed. Total available: R$10"]);
/// ```
#[derive(Debug, Default)]
pub struct Journal {
    entries: Mutex<Vec<String>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all messages so far, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while pushing a String cannot leave the Vec half-written.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TransactionObserver for Journal {
    fn record(&self, message: &str) -> ObserverResult {
        self.lock().push(message.to_string());
        Ok(())
    }
}
