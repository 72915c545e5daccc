//! Dice collection integration tests.
//!
//! Roll history, snapshot immutability, and mixed add/remove/freeze flows.

use dice_engine::core::{DiceConfig, DiceError, DieKind, RngHandle};
use dice_engine::dice::{Dice, Die};

// =============================================================================
// History Tests
// =============================================================================

/// The last snapshot equals each die's face at the moment of the roll.
#[test]
fn test_snapshot_matches_dice_at_roll_time() {
    let mut dice = Dice::with_rng(6, 5, RngHandle::seeded(42)).unwrap();
    dice.roll_all();

    let faces: Vec<u32> = dice.values().into_iter().map(|v| v.unwrap()).collect();
    assert_eq!(dice.roll_history().current().unwrap().values(), faces.as_slice());
}

/// Rolling again never changes an earlier snapshot.
#[test]
fn test_snapshots_are_immutable() {
    let mut dice = Dice::with_rng(6, 3, RngHandle::fixed(vec![1, 2, 3, 6, 5, 4])).unwrap();
    let first = dice.roll_all();
    let kept = dice.roll_history().clone();

    dice.roll_all();

    assert_eq!(first, vec![1, 2, 3]);
    assert_eq!(dice.roll_history().get(0).unwrap(), &first);
    assert_eq!(dice.previous_roll().unwrap(), &first);
    assert_eq!(dice.current_roll().unwrap(), &vec![6, 5, 4]);
    assert_eq!(kept.len(), 1);
}

/// Snapshots grow with the collection.
#[test]
fn test_history_tracks_added_dice() {
    let mut dice = Dice::with_rng(6, 3, RngHandle::seeded(7)).unwrap();
    dice.roll_all();

    dice.add_dice(4);
    assert_eq!(dice.count(), 7);
    assert!(dice.dice()[3..].iter().all(|d| d.rolled().is_none()));

    dice.roll_all();
    assert!(dice.dice().iter().all(|d| d.rolled().is_some()));
    assert_eq!(dice.current_roll().unwrap().len(), 7);
    assert_eq!(dice.previous_roll().unwrap().len(), 3);

    dice.roll_all();
    assert_eq!(dice.previous_roll().unwrap().len(), 7);
}

#[test]
fn test_totals() {
    let mut dice = Dice::with_rng(6, 2, RngHandle::fixed(vec![1, 2, 6, 6])).unwrap();
    assert_eq!(dice.current_total(), None);

    dice.roll_all();
    dice.roll_all();
    assert_eq!(dice.previous_total(), Some(3));
    assert_eq!(dice.current_total(), Some(12));
    assert_eq!(dice.sum().unwrap(), 12);
}

#[test]
fn test_history_limit() {
    let config = DiceConfig::new(DieKind::D6, 2).with_history_limit(3);
    let mut dice = Dice::from_config(&config, RngHandle::seeded(1)).unwrap();

    let snaps: Vec<_> = (0..5).map(|_| dice.roll_all()).collect();

    assert_eq!(dice.roll_history().len(), 3);
    let kept: Vec<_> = dice.roll_history().iter().cloned().collect();
    assert_eq!(kept, snaps[2..].to_vec());
}

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn test_same_seed_same_rolls() {
    let mut a = Dice::with_rng(20, 4, RngHandle::seeded(99)).unwrap();
    let mut b = Dice::with_rng(20, 4, RngHandle::seeded(99)).unwrap();

    for _ in 0..20 {
        assert_eq!(a.roll_all(), b.roll_all());
    }
}

#[test]
fn test_invalid_face_count() {
    assert!(matches!(Dice::new(1, 4), Err(DiceError::InvalidConfiguration(_))));
    assert!(matches!(
        Dice::from_config(&DiceConfig::default().with_face_count(0), RngHandle::seeded(0)),
        Err(DiceError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_mixed_dice_via_add_die() {
    let rng = RngHandle::fixed(vec![3, 17]);
    let mut dice = Dice::with_rng(6, 1, rng.clone()).unwrap();
    dice.add_die(Die::of_kind(DieKind::D20, rng).unwrap());

    dice.roll_all();
    assert_eq!(dice.values(), vec![Some(3), Some(17)]);
    assert_eq!(dice.dice()[1].name(), "d20");
}

// =============================================================================
// Gameplay Flow Tests
// =============================================================================

/// Remove dice, add new ones, freeze some, roll again: history stays
/// consistent with what the dice showed at every step.
#[test]
fn test_remove_add_freeze_cycle() {
    let mut dice = Dice::with_rng(6, 4, RngHandle::seeded(2024)).unwrap();
    dice.roll_all();

    let removed = dice.remove_die(0).unwrap();
    assert!(dice.index_of(removed.id()).is_none());
    assert_eq!(dice.count(), 3);

    dice.add_dice(2);
    dice.roll_all();
    dice.freeze_die(1).unwrap();
    let held = dice.values()[1];

    for _ in 0..10 {
        let snap = dice.roll_all();
        assert_eq!(Some(snap.values()[1]), held);
        assert_eq!(snap.len(), dice.count());
    }

    dice.unfreeze_all();
    assert!(!dice.is_all_frozen());
}

/// Two players roll 5d6; the higher total wins.
#[test]
fn test_dice_battle() {
    let mut player1 = Dice::with_rng(6, 5, RngHandle::fixed(vec![6, 6, 5, 4, 3])).unwrap();
    let mut player2 = Dice::with_rng(6, 5, RngHandle::fixed(vec![1, 2, 3, 4, 5])).unwrap();

    player1.roll_all();
    player2.roll_all();

    assert_eq!(player1.current_total(), Some(24));
    assert_eq!(player2.current_total(), Some(15));
    assert!(player1.current_total() > player2.current_total());
}
