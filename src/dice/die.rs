//! A single die.
//!
//! A `Die` owns its face count and its most recent roll. The roll can only
//! change through `Die::roll`, so every value a die reports came from its
//! randomness source.
//!
//! ## Identity
//!
//! Every die gets a process-unique `DieId`. Equality compares ids, not
//! rolled values: two d6 both showing 4 are still different dice, and
//! removal operations never confuse them.
//!
//! ```
//! use dice_engine::core::RngHandle;
//! use dice_engine::dice::Die;
//!
//! let rng = RngHandle::fixed(vec![4, 4]);
//! let mut a = Die::with_rng(6, rng.clone()).unwrap();
//! let mut b = Die::with_rng(6, rng).unwrap();
//!
//! assert_eq!(a.roll(), 4);
//! assert_eq!(b.roll(), 4);
//! assert_ne!(a, b);
//! ```

use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

use crate::core::config::{validate_faces, DieKind};
use crate::core::error::{DiceError, Result};
use crate::core::rng::RngHandle;

static NEXT_DIE_ID: AtomicU32 = AtomicU32::new(0);

/// Process-unique identifier for a die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DieId(pub u32);

impl DieId {
    fn next() -> Self {
        Self(NEXT_DIE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for DieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Die({})", self.0)
    }
}

/// A single die with a fixed number of faces.
#[derive(Debug)]
pub struct Die {
    id: DieId,
    face_count: u32,
    rolled: Option<u32>,
    frozen: bool,
    rng: RngHandle,
}

impl Die {
    /// Create a die drawing from the thread's process-seeded source.
    ///
    /// Fails with `InvalidConfiguration` when `face_count < 2`.
    pub fn new(face_count: u32) -> Result<Self> {
        Self::with_rng(face_count, RngHandle::default())
    }

    /// Create a die drawing from `rng`.
    pub fn with_rng(face_count: u32, rng: RngHandle) -> Result<Self> {
        validate_faces(face_count)?;
        Ok(Self::unrolled(face_count, rng))
    }

    /// Build without validation; `face_count` is already known good.
    pub(super) fn unrolled(face_count: u32, rng: RngHandle) -> Self {
        Self {
            id: DieId::next(),
            face_count,
            rolled: None,
            frozen: false,
            rng,
        }
    }

    /// Create a die from a preset.
    pub fn of_kind(kind: DieKind, rng: RngHandle) -> Result<Self> {
        Self::with_rng(kind.faces(), rng)
    }

    #[must_use]
    pub fn id(&self) -> DieId {
        self.id
    }

    #[must_use]
    pub fn face_count(&self) -> u32 {
        self.face_count
    }

    /// Most recent roll, `None` before the first roll.
    #[must_use]
    pub fn rolled(&self) -> Option<u32> {
        self.rolled
    }

    /// Name in dice notation, e.g. `d6`.
    #[must_use]
    pub fn name(&self) -> String {
        format!("d{}", self.face_count)
    }

    #[must_use]
    pub fn kind(&self) -> DieKind {
        DieKind::from_faces(self.face_count)
    }

    /// Roll the die and return the new face.
    ///
    /// A frozen die keeps its value and draws nothing from the source.
    pub fn roll(&mut self) -> u32 {
        if let (true, Some(held)) = (self.frozen, self.rolled) {
            return held;
        }
        let face = self.rng.next_in_range(1, self.face_count);
        self.rolled = Some(face);
        face
    }

    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Hold the current value across future rolls.
    ///
    /// Fails with `IncompleteRoll` if the die has never been rolled.
    pub fn freeze(&mut self) -> Result<()> {
        if self.rolled.is_none() {
            return Err(DiceError::IncompleteRoll);
        }
        self.frozen = true;
        Ok(())
    }

    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }

    /// Flip the frozen flag, returning the new state.
    pub fn toggle_freeze(&mut self) -> Result<bool> {
        if self.frozen {
            self.unfreeze();
        } else {
            self.freeze()?;
        }
        Ok(self.frozen)
    }

    pub(crate) fn rng(&self) -> &RngHandle {
        &self.rng
    }
}

impl PartialEq for Die {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Die {}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::RngHandle;

    #[test]
    fn test_new_die_is_unrolled() {
        let die = Die::with_rng(6, RngHandle::seeded(1)).unwrap();
        assert_eq!(die.face_count(), 6);
        assert_eq!(die.rolled(), None);
        assert!(!die.is_frozen());
    }

    #[test]
    fn test_rejects_fewer_than_two_faces() {
        assert!(matches!(Die::new(0), Err(DiceError::InvalidConfiguration(_))));
        assert!(matches!(Die::new(1), Err(DiceError::InvalidConfiguration(_))));
        assert!(Die::new(2).is_ok());
    }

    #[test]
    fn test_roll_stays_in_range() {
        let mut die = Die::with_rng(20, RngHandle::seeded(9)).unwrap();
        for _ in 0..10_000 {
            let face = die.roll();
            assert!((1..=20).contains(&face));
            assert_eq!(die.rolled(), Some(face));
        }
    }

    #[test]
    fn test_roll_uses_injected_source() {
        let mut die = Die::with_rng(6, RngHandle::fixed(vec![3, 5])).unwrap();
        assert_eq!(die.roll(), 3);
        assert_eq!(die.roll(), 5);
    }

    #[test]
    fn test_name_and_kind() {
        let die = Die::of_kind(DieKind::D20, RngHandle::seeded(0)).unwrap();
        assert_eq!(die.name(), "d20");
        assert_eq!(die.to_string(), "d20");
        assert_eq!(die.kind(), DieKind::D20);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Die::new(6).unwrap();
        let b = Die::new(6).unwrap();
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
        assert_eq!(a, a);
    }

    #[test]
    fn test_freeze_requires_roll() {
        let mut die = Die::with_rng(6, RngHandle::seeded(0)).unwrap();
        assert!(matches!(die.freeze(), Err(DiceError::IncompleteRoll)));
        assert!(!die.is_frozen());
    }

    #[test]
    fn test_frozen_die_holds_value() {
        let mut die = Die::with_rng(20, RngHandle::fixed(vec![9, 1, 2, 3])).unwrap();
        assert_eq!(die.roll(), 9);
        die.freeze().unwrap();

        for _ in 0..1000 {
            assert_eq!(die.roll(), 9);
        }

        die.unfreeze();
        assert_eq!(die.roll(), 1);
    }

    #[test]
    fn test_toggle_freeze() {
        let mut die = Die::with_rng(4, RngHandle::seeded(2)).unwrap();
        die.roll();
        assert!(die.toggle_freeze().unwrap());
        assert!(!die.toggle_freeze().unwrap());
    }
}
