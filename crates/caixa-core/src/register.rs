//! # Cash Register
//!
//! The register owns a [`NoteInventory`] and answers deposits and
//! withdrawals against it.
//!
//! ## Withdrawal Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         withdraw(amount)                                │
//! │                                                                         │
//! │  amount > total? ──yes──► notify InsufficientFunds ──► Err              │
//! │        │ no                                                             │
//! │        ▼                                                                │
//! │  greedy walk 200 → 100 → 50 → 20 → 10 → 5 → 2                          │
//! │  take min(remaining / value, held) of each, removing as we go           │
//! │        │                                                                │
//! │        ├── remaining == 0 ──► notify Withdrawn ──► Ok(notes)            │
//! │        │                                                                │
//! │        └── remaining != 0                                               │
//! │               │                                                         │
//! │               ▼                                                         │
//! │        credit(notes taken)         (restores stock, notifies Deposited) │
//! │               │                                                         │
//! │               ▼                                                         │
//! │        scan amount-1 down to 2 with can_compose()                       │
//! │               │                                                         │
//! │               ├── found ──► notify SuggestLesser ──► Err(Some(s))       │
//! │               └── none ───► notify CannotCompose ──► Err(None)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The walk is greedy, not optimal change-making: `{50: 1, 20: 3}` cannot
//! pay 60 because the 50 is taken first.
//!
//! ## Deposit Flow
//! ```text
//! deposit(notes) ──► inventory.total_after(notes)
//!                          │
//!                          ├── Err ──► Err(DepositError), nothing changes
//!                          └── Ok  ──► credit(notes) ──► notify Deposited
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::denomination::Denomination;
use crate::error::{DepositResult, WithdrawalError, WithdrawalResult};
use crate::event::RegisterEvent;
use crate::notes::{NoteBundle, NoteInventory};
use crate::observer::TransactionObserver;

/// Notes of `denomination` the greedy walk takes for `remaining`.
#[inline]
fn notes_to_take(remaining: u64, denomination: Denomination, held: u64) -> u64 {
    (remaining / denomination.value()).min(held)
}

/// A single cash drawer.
///
/// Not internally synchronized. Wrap the whole register in a `Mutex` if
/// several threads share it, since a withdrawal and its rollback must not
/// interleave with other mutations.
pub struct CashRegister {
    inventory: NoteInventory,
    observers: Vec<Arc<dyn TransactionObserver>>,
}

impl CashRegister {
    /// Creates a register with no notes and no observers.
    pub fn new() -> Self {
        CashRegister {
            inventory: NoteInventory::new(),
            observers: Vec::new(),
        }
    }

    /// Registers an observer. Observers are notified in registration order.
    pub fn add_observer(&mut self, observer: Arc<dyn TransactionObserver>) {
        self.observers.push(observer);
        debug!(observers = self.observers.len(), "Observer registered");
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Total value of the notes held.
    pub fn total(&self) -> u64 {
        self.inventory.total_value()
    }

    /// Read-only view of the stock.
    pub fn inventory(&self) -> &NoteInventory {
        &self.inventory
    }

    /// Adds every note in `notes`, notifies the new total and returns it.
    ///
    /// Zero and absent entries change nothing. A notification is sent even
    /// for an empty bundle. A bundle that would push the total past
    /// `u64::MAX` is refused whole, without a notification.
    pub fn deposit(&mut self, notes: &NoteBundle) -> DepositResult<u64> {
        let total = self.inventory.total_after(notes).map_err(|e| {
            warn!(held = self.total(), error = %e, "Deposit refused");
            e
        })?;

        self.credit(notes);
        Ok(total)
    }

    /// Adds `notes` unchecked and notifies `Deposited`.
    ///
    /// Only for bundles already vetted by `total_after`, or notes that were
    /// held moments ago (the withdrawal rollback).
    fn credit(&mut self, notes: &NoteBundle) {
        for (denomination, count) in notes.iter() {
            self.inventory.add(denomination, count);
        }

        let total = self.total();
        debug!(total, "Notes deposited");
        self.notify(RegisterEvent::Deposited { total });
    }

    /// Pays out `amount` using the greedy walk.
    ///
    /// On success the returned bundle sums to exactly `amount` and the
    /// stock has shrunk by it. On any error the stock is unchanged.
    ///
    /// ## Example
    /// ```rust
    /// use caixa_core::{CashRegister, Denomination, NoteBundle, WithdrawalError};
    ///
    /// let mut register = CashRegister::new();
    /// register
    ///     .deposit(
    ///         &NoteBundle::new()
    ///             .with(Denomination::TwoHundred, 1)
    ///             .with(Denomination::Ten, 1),
    ///     )
    ///     .unwrap();
    ///
    /// let err = register.withdraw(205).unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     WithdrawalError::CannotCompose { requested: 205, suggestion: Some(200) }
    /// );
    /// assert_eq!(register.total(), 210);
    /// ```
    pub fn withdraw(&mut self, amount: u64) -> WithdrawalResult<NoteBundle> {
        if amount == 0 {
            return Err(WithdrawalError::ZeroAmount);
        }

        let available = self.total();
        if amount > available {
            self.notify(RegisterEvent::InsufficientFunds { requested: amount });
            return Err(WithdrawalError::InsufficientFunds {
                requested: amount,
                available,
            });
        }

        let mut remaining = amount;
        let mut dispensed = NoteBundle::new();

        for denomination in Denomination::DESCENDING {
            let take = notes_to_take(remaining, denomination, self.inventory.count(denomination));
            if take == 0 {
                continue;
            }
            self.inventory.remove(denomination, take);
            dispensed.add(denomination, take);
            remaining -= take * denomination.value();
        }

        if remaining == 0 {
            self.notify(RegisterEvent::Withdrawn { amount });
            return Ok(dispensed);
        }

        debug!(amount, remaining, "Greedy walk fell short, restoring notes");
        self.credit(&dispensed);

        let suggestion = self.suggest(amount);
        match suggestion {
            Some(suggestion) => self.notify(RegisterEvent::SuggestLesser {
                requested: amount,
                suggestion,
            }),
            None => self.notify(RegisterEvent::CannotCompose { requested: amount }),
        }

        Err(WithdrawalError::CannotCompose {
            requested: amount,
            suggestion,
        })
    }

    /// Whether the greedy walk would pay exactly `amount` from the current
    /// stock. Reads counts only; never touches the inventory.
    pub fn can_compose(&self, amount: u64) -> bool {
        let mut remaining = amount;
        for denomination in Denomination::DESCENDING {
            let take = notes_to_take(remaining, denomination, self.inventory.count(denomination));
            remaining -= take * denomination.value();
        }
        remaining == 0
    }

    /// Largest amount strictly below `amount`, and no smaller than the
    /// smallest note, that [`can_compose`](Self::can_compose) accepts.
    pub fn suggest(&self, amount: u64) -> Option<u64> {
        (Denomination::SMALLEST.value()..amount)
            .rev()
            .find(|&candidate| self.can_compose(candidate))
    }

    /// Sends `event` to every observer, then to the log.
    ///
    /// The log event on target `caixa::notification` is emitted for every
    /// notification: `INFO` for deposits and withdrawals, `WARN` for failures.
    fn notify(&self, event: RegisterEvent) {
        let message = event.to_string();

        for (index, observer) in self.observers.iter().enumerate() {
            if let Err(e) = observer.record(&message) {
                warn!(
                    observer = index,
                    kind = event.kind(),
                    error = %e,
                    "Observer failed to record notification"
                );
            }
        }

        if event.is_failure() {
            warn!(target: "caixa::notification", kind = event.kind(), "{}", message);
        } else {
            info!(target: "caixa::notification", kind = event.kind(), "{}", message);
        }
    }
}

impl Default for CashRegister {
    fn default() -> Self {
        CashRegister::new()
    }
}

impl fmt::Debug for CashRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CashRegister")
            .field("inventory", &self.inventory)
            .field("observers", &self.observers.len())
            .finish()
    }
}
