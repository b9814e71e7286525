//! # Notes Module
//!
//! Two views of "how many of each banknote":
//!
//! - [`NoteBundle`] - a partial mapping used for deposits and for the notes a
//!   withdrawal hands out. Absent denominations mean zero.
//! - [`NoteInventory`] - the register's full stock. Every denomination is
//!   always present, counts never go below zero.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Where Note Counts Flow                               │
//! │                                                                         │
//! │  deposit(NoteBundle) ──► total_after() ──► add() ──► total grows        │
//! │                              │                                          │
//! │                              └── would overflow: DepositError, no change│
//! │                                                                         │
//! │  withdraw(amount) ──► NoteInventory.remove() ──► NoteBundle returned    │
//! │                              │                                          │
//! │                              └── on failure: bundle deposited back      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::denomination::Denomination;
use crate::error::{DepositError, DepositResult};

// =============================================================================
// Note Bundle
// =============================================================================

/// A partial count of notes per denomination.
///
/// Zero counts are never stored, so two bundles with the same notes compare
/// equal regardless of how they were built.
///
/// ## Example
/// ```rust
/// use caixa_core::{Denomination, NoteBundle};
///
/// let bundle = NoteBundle::new()
///     .with(Denomination::TwoHundred, 1)
///     .with(Denomination::Ten, 2);
///
/// assert_eq!(bundle.value(), Some(220));
/// assert_eq!(bundle.get(Denomination::Five), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteBundle(BTreeMap<Denomination, u64>);

impl NoteBundle {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        NoteBundle(BTreeMap::new())
    }

    /// Builder form of [`add`](Self::add).
    pub fn with(mut self, denomination: Denomination, count: u64) -> Self {
        self.add(denomination, count);
        self
    }

    /// Adds `count` notes of `denomination`. Adding zero is a no-op.
    ///
    /// # Panics
    /// If the count for `denomination` would overflow. Use
    /// [`try_add`](Self::try_add) for counts that come from outside.
    pub fn add(&mut self, denomination: Denomination, count: u64) {
        if let Err(e) = self.try_add(denomination, count) {
            panic!("{e}");
        }
    }

    /// Adds `count` notes of `denomination`, refusing a count that would
    /// overflow. The bundle is unchanged on error.
    pub fn try_add(&mut self, denomination: Denomination, count: u64) -> DepositResult<()> {
        if count == 0 {
            return Ok(());
        }
        let held = self.get(denomination);
        let sum = held
            .checked_add(count)
            .ok_or(DepositError::CountOverflow { denomination })?;
        self.0.insert(denomination, sum);
        Ok(())
    }

    /// Number of notes of `denomination` in the bundle.
    pub fn get(&self, denomination: Denomination) -> u64 {
        self.0.get(&denomination).copied().unwrap_or(0)
    }

    /// Iterates `(denomination, count)` pairs, smallest note first.
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, u64)> + '_ {
        self.0.iter().map(|(d, n)| (*d, *n))
    }

    /// Sum of face value × count, or `None` if it does not fit in a `u64`.
    pub fn value(&self) -> Option<u64> {
        self.iter().try_fold(0u64, |acc, (d, n)| {
            d.value().checked_mul(n).and_then(|v| acc.checked_add(v))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Denomination, u64)> for NoteBundle {
    fn from_iter<I: IntoIterator<Item = (Denomination, u64)>>(iter: I) -> Self {
        let mut bundle = NoteBundle::new();
        for (denomination, count) in iter {
            bundle.add(denomination, count);
        }
        bundle
    }
}

// =============================================================================
// Note Inventory
// =============================================================================

/// The register's stock of notes.
///
/// ## Invariants
/// - Every denomination has an entry (starts at zero)
/// - Counts are unsigned and [`remove`](Self::remove) refuses to underflow,
///   so no caller ever observes a negative count
/// - The total value fits in a `u64`: deposits go through
///   [`total_after`](Self::total_after) before any [`add`](Self::add)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NoteInventory {
    counts: BTreeMap<Denomination, u64>,
}

impl NoteInventory {
    /// Creates an inventory holding no notes.
    pub fn new() -> Self {
        NoteInventory {
            counts: Denomination::ALL.into_iter().map(|d| (d, 0)).collect(),
        }
    }

    /// Current count for `denomination`.
    #[inline]
    pub fn count(&self, denomination: Denomination) -> u64 {
        self.counts.get(&denomination).copied().unwrap_or(0)
    }

    /// Adds `count` notes.
    ///
    /// # Panics
    /// If the count would overflow. Callers check the deposit with
    /// [`total_after`](Self::total_after) first.
    pub fn add(&mut self, denomination: Denomination, count: u64) {
        let held = self.counts.entry(denomination).or_insert(0);
        match held.checked_add(count) {
            Some(sum) => *held = sum,
            None => panic!("cannot add {count} {denomination} notes, {held} already held"),
        }
    }

    /// Total value once `notes` is added, without adding it.
    ///
    /// Fails with [`DepositError::TotalOverflow`] if that total, or any
    /// single count, would not fit in a `u64`.
    pub fn total_after(&self, notes: &NoteBundle) -> DepositResult<u64> {
        let held = self.total_value();
        let overflow = DepositError::TotalOverflow { held };

        let added = notes.value().ok_or_else(|| overflow.clone())?;
        let total = held.checked_add(added).ok_or_else(|| overflow.clone())?;

        // Implied by the total check. add() relies on it.
        for (denomination, count) in notes.iter() {
            self.count(denomination)
                .checked_add(count)
                .ok_or_else(|| overflow.clone())?;
        }

        Ok(total)
    }

    /// Removes `count` notes.
    ///
    /// # Panics
    /// If fewer than `count` notes are held. Callers check availability
    /// first; reaching this panic is a bug in the caller.
    pub fn remove(&mut self, denomination: Denomination, count: u64) {
        let held = self.counts.entry(denomination).or_insert(0);
        assert!(
            count <= *held,
            "cannot remove {count} {denomination} notes, only {held} held"
        );
        *held -= count;
    }

    /// Sum of face value × count over every denomination.
    pub fn total_value(&self) -> u64 {
        // Saturating ops never bind while the total fits (see invariants).
        self.counts
            .iter()
            .fold(0u64, |acc, (d, n)| acc.saturating_add(d.value().saturating_mul(*n)))
    }

    /// Iterates every denomination with its count, smallest note first.
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, u64)> + '_ {
        self.counts.iter().map(|(d, n)| (*d, *n))
    }
}

impl Default for NoteInventory {
    fn default() -> Self {
        NoteInventory::new()
    }
}
