//! End-to-end register behaviour: deposits, withdrawals, rollback and
//! suggestions, observed through a journal.

use std::sync::Arc;

use caixa_core::{
    CashRegister, Denomination, Journal, NoteBundle, ObserverError, ObserverResult,
    DepositError, TransactionObserver, WithdrawalError,
};

fn bundle(notes: &[(Denomination, u64)]) -> NoteBundle {
    notes.iter().copied().collect()
}

fn register_with(notes: &[(Denomination, u64)]) -> (CashRegister, Arc<Journal>) {
    let journal = Arc::new(Journal::new());
    let mut register = CashRegister::new();
    register.deposit(&bundle(notes)).unwrap();
    register.add_observer(journal.clone());
    (register, journal)
}

/// A handful of drawers that exercise both the happy path and the greedy
/// dead ends.
fn sample_drawers() -> Vec<Vec<(Denomination, u64)>> {
    use Denomination::*;
    vec![
        vec![(Ten, 1)],
        vec![(Five, 1)],
        vec![(TwoHundred, 1), (Ten, 1)],
        vec![(Fifty, 1), (Twenty, 3)],
        vec![(Five, 1), (Two, 2)],
        vec![(OneHundred, 2), (Twenty, 1), (Five, 3), (Two, 4)],
        vec![(Two, 7)],
    ]
}

struct BrokenObserver;

impl TransactionObserver for BrokenObserver {
    fn record(&self, _message: &str) -> ObserverResult {
        Err(ObserverError::Unavailable("disk full".to_string()))
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_withdraw_exact_single_note() {
    let (mut register, journal) = register_with(&[(Denomination::Ten, 1)]);
    assert_eq!(register.total(), 10);

    let paid = register.withdraw(10).unwrap();

    assert_eq!(paid, bundle(&[(Denomination::Ten, 1)]));
    assert_eq!(register.total(), 0);
    assert_eq!(journal.entries(), vec!["Withdrawal completed: R$10"]);
}

#[test]
fn test_withdraw_more_than_total() {
    let (mut register, journal) = register_with(&[(Denomination::Two, 1)]);

    let err = register.withdraw(5).unwrap_err();

    assert_eq!(
        err,
        WithdrawalError::InsufficientFunds {
            requested: 5,
            available: 2
        }
    );
    assert_eq!(register.inventory().count(Denomination::Two), 1);
    assert_eq!(journal.entries(), vec!["Error: insufficient balance for R$5"]);
}

#[test]
fn test_withdraw_uncomposable_without_suggestion() {
    let (mut register, journal) = register_with(&[(Denomination::Five, 1)]);
    let before = register.inventory().clone();

    let err = register.withdraw(3).unwrap_err();

    assert_eq!(
        err,
        WithdrawalError::CannotCompose {
            requested: 3,
            suggestion: None
        }
    );
    assert_eq!(register.inventory(), &before);
    assert_eq!(
        journal.entries(),
        vec![
            "Deposit completed. Total available: R$5",
            "Error: cannot compose R$3 with the available notes.",
        ]
    );
}

#[test]
fn test_withdraw_uncomposable_with_suggestion() {
    let (mut register, journal) =
        register_with(&[(Denomination::TwoHundred, 1), (Denomination::Ten, 1)]);
    let before = register.inventory().clone();

    let err = register.withdraw(205).unwrap_err();

    assert_eq!(err.suggestion(), Some(200));
    assert_eq!(register.inventory(), &before);
    assert_eq!(register.total(), 210);

    // The rollback re-deposits the 200-note and says so.
    assert_eq!(
        journal.entries(),
        vec![
            "Deposit completed. Total available: R$210",
            "Error: cannot compose R$205. Suggestion: withdraw R$200",
        ]
    );
}

#[test]
fn test_suggestion_can_be_smallest_note() {
    // 4: 5 is too big, one 2 leaves 2 over. 3 fails, 2 works.
    let (mut register, _) = register_with(&[(Denomination::Five, 1), (Denomination::Two, 1)]);

    let err = register.withdraw(4).unwrap_err();

    assert_eq!(err.suggestion(), Some(2));
}

#[test]
fn test_withdraw_mixed_notes() {
    let (mut register, _) = register_with(&[
        (Denomination::OneHundred, 2),
        (Denomination::Twenty, 1),
        (Denomination::Five, 3),
        (Denomination::Two, 4),
    ]);

    let paid = register.withdraw(129).unwrap();

    assert_eq!(
        paid,
        bundle(&[
            (Denomination::OneHundred, 1),
            (Denomination::Twenty, 1),
            (Denomination::Five, 1),
            (Denomination::Two, 2),
        ])
    );
    assert_eq!(register.total(), 243 - 129);
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_total_tracks_deposits() {
    let mut register = CashRegister::new();
    let mut expected = 0;

    for notes in sample_drawers() {
        let deposit = bundle(&notes);
        expected += deposit.value().unwrap();
        assert_eq!(register.deposit(&deposit), Ok(expected));
        assert_eq!(register.total(), expected);
    }
}

#[test]
fn test_deposit_ignores_zero_entries() {
    let (mut register, journal) = register_with(&[(Denomination::Fifty, 1)]);

    register.deposit(&bundle(&[(Denomination::Ten, 0)])).unwrap();

    assert_eq!(register.total(), 50);
    assert_eq!(register.inventory().count(Denomination::Ten), 0);
    assert_eq!(journal.len(), 1);
}

#[test]
fn test_every_outcome_preserves_invariants() {
    for notes in sample_drawers() {
        let drawer = register_with(&notes).0;
        let upper = drawer.total() + 3;

        for amount in 1..=upper {
            let (mut register, _) = register_with(&notes);
            let before = register.inventory().clone();
            let total_before = register.total();
            let feasible = register.can_compose(amount);

            match register.withdraw(amount) {
                Ok(paid) => {
                    assert!(feasible, "paid {amount} but feasibility said no");
                    assert_eq!(paid.value(), Some(amount));
                    assert_eq!(register.total(), total_before - amount);
                    for (denomination, count) in paid.iter() {
                        assert_eq!(
                            register.inventory().count(denomination) + count,
                            before.count(denomination)
                        );
                    }
                }
                Err(WithdrawalError::InsufficientFunds { requested, available }) => {
                    assert_eq!(requested, amount);
                    assert_eq!(available, total_before);
                    assert!(amount > total_before);
                    assert_eq!(register.inventory(), &before);
                }
                Err(WithdrawalError::CannotCompose { suggestion, .. }) => {
                    assert!(!feasible);
                    assert!(amount <= total_before);
                    assert_eq!(register.inventory(), &before);

                    // Nothing between the suggestion and the request works.
                    let floor = suggestion.map_or(2, |s| s + 1);
                    for candidate in floor..amount {
                        assert!(!register.can_compose(candidate));
                    }
                    if let Some(s) = suggestion {
                        assert!(s < amount);
                        assert!(register.can_compose(s));
                    }
                }
                Err(WithdrawalError::ZeroAmount) => unreachable!("amount starts at 1"),
            }
        }
    }
}

#[test]
fn test_feasible_amounts_withdraw_exactly() {
    for notes in sample_drawers() {
        let drawer = register_with(&notes).0;

        for amount in 1..=drawer.total() {
            if !drawer.can_compose(amount) {
                continue;
            }
            let (mut register, _) = register_with(&notes);
            let paid = register.withdraw(amount).unwrap();
            assert_eq!(paid.value(), Some(amount));
        }
    }
}

// =============================================================================
// Observers
// =============================================================================

#[test]
fn test_observers_notified_in_registration_order() {
    let first = Arc::new(Journal::new());
    let second = Arc::new(Journal::new());
    let mut register = CashRegister::new();
    register.add_observer(first.clone());
    register.add_observer(second.clone());

    register.deposit(&bundle(&[(Denomination::Twenty, 2)])).unwrap();
    register.withdraw(20).unwrap();

    assert_eq!(register.observer_count(), 2);
    assert_eq!(first.entries(), second.entries());
    assert_eq!(
        first.entries(),
        vec![
            "Deposit completed. Total available: R$40",
            "Withdrawal completed: R$20",
        ]
    );
}

#[test]
fn test_failing_observer_is_isolated() {
    let journal = Arc::new(Journal::new());
    let mut register = CashRegister::new();
    register.add_observer(Arc::new(BrokenObserver));
    register.add_observer(journal.clone());

    register.deposit(&bundle(&[(Denomination::Ten, 3)])).unwrap();
    let paid = register.withdraw(20).unwrap();

    assert_eq!(paid.value(), Some(20));
    assert_eq!(register.total(), 10);
    assert_eq!(journal.len(), 2);
}

#[test]
fn test_zero_withdrawal_is_silent() {
    let (mut register, journal) = register_with(&[(Denomination::Ten, 1)]);

    assert_eq!(register.withdraw(0), Err(WithdrawalError::ZeroAmount));
    assert!(journal.is_empty());
}

#[test]
fn test_overflowing_deposit_leaves_register_usable() {
    let (mut register, journal) = register_with(&[(Denomination::TwoHundred, 1)]);

    let err = register
        .deposit(&bundle(&[(Denomination::TwoHundred, 100_000_000_000_000_000)]))
        .unwrap_err();
    assert_eq!(err, DepositError::TotalOverflow { held: 200 });

    assert_eq!(register.total(), 200);
    assert!(journal.is_empty());

    assert_eq!(register.withdraw(200).unwrap().value(), Some(200));
    assert_eq!(register.total(), 0);
}

#[test]
fn test_deposit_up_to_the_limit_is_accepted() {
    let (mut register, _) = register_with(&[(Denomination::Five, 1)]);

    // R$5 held plus R$(u64::MAX - 5) in twos lands exactly on the limit.
    let fits = bundle(&[(Denomination::Two, u64::MAX / 2 - 2)]);
    assert_eq!(register.deposit(&fits), Ok(u64::MAX));
    assert_eq!(register.total(), u64::MAX);

    assert!(register.deposit(&bundle(&[(Denomination::Two, 3)])).is_err());
    assert!(register.can_compose(10));
}
