//! Ordered dice collections with roll history.

use log::debug;
use rustc_hash::FxHashMap;

use crate::core::config::{validate_faces, DiceConfig};
use crate::core::error::{DiceError, Result};
use crate::core::rng::RngHandle;

use super::die::{Die, DieId};
use super::history::{RollHistory, Snapshot};

/// An ordered collection of dice plus the history of every roll-all.
///
/// Insertion order is the order dice were added. All dice the collection
/// creates share one randomness source, so a seeded collection is
/// reproducible as a whole.
///
/// ## Usage
///
/// ```
/// use dice_engine::core::RngHandle;
/// use dice_engine::dice::Dice;
///
/// let mut dice = Dice::with_rng(6, 3, RngHandle::fixed(vec![2, 5, 1])).unwrap();
/// let snapshot = dice.roll_all();
///
/// assert_eq!(snapshot.values(), &[2, 5, 1]);
/// assert_eq!(dice.sum().unwrap(), 8);
/// assert_eq!(dice.roll_history().len(), 1);
/// ```
#[derive(Debug)]
pub struct Dice {
    face_count: u32,
    dice: Vec<Die>,
    history: RollHistory,
    rng: RngHandle,
}

impl Dice {
    /// `count` unrolled dice with `face_count` faces on the process source.
    pub fn new(face_count: u32, count: usize) -> Result<Self> {
        Self::with_rng(face_count, count, RngHandle::default())
    }

    /// `count` unrolled dice with `face_count` faces drawing from `rng`.
    pub fn with_rng(face_count: u32, count: usize, rng: RngHandle) -> Result<Self> {
        Self::build(face_count, count, None, rng)
    }

    /// Build from a validated config.
    pub fn from_config(config: &DiceConfig, rng: RngHandle) -> Result<Self> {
        config.validate()?;
        Self::build(config.face_count, config.count, config.history_limit, rng)
    }

    /// Adopt existing dice. The first die sets the face count and source
    /// used by `add_dice`.
    pub fn from_dice(dice: Vec<Die>) -> Result<Self> {
        let first = dice
            .first()
            .ok_or_else(|| DiceError::config("cannot build dice from an empty list"))?;
        Ok(Self {
            face_count: first.face_count(),
            rng: first.rng().clone(),
            dice,
            history: RollHistory::new(),
        })
    }

    fn build(face_count: u32, count: usize, limit: Option<usize>, rng: RngHandle) -> Result<Self> {
        validate_faces(face_count)?;
        let mut dice = Vec::with_capacity(count);
        for _ in 0..count {
            dice.push(Die::unrolled(face_count, rng.clone()));
        }
        Ok(Self {
            face_count,
            dice,
            history: RollHistory::with_limit(limit),
            rng,
        })
    }

    /// Face count used for dice this collection creates.
    #[must_use]
    pub fn face_count(&self) -> u32 {
        self.face_count
    }

    /// Number of dice. Always equal to `dice().len()`.
    #[must_use]
    pub fn count(&self) -> usize {
        self.dice.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Read-only view of the dice, in order.
    #[must_use]
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Die> {
        self.dice.iter()
    }

    /// Current face of every die, in order.
    #[must_use]
    pub fn values(&self) -> Vec<Option<u32>> {
        self.dice.iter().map(Die::rolled).collect()
    }

    #[must_use]
    pub fn roll_history(&self) -> &RollHistory {
        &self.history
    }

    // =========================================================================
    // Rolling
    // =========================================================================

    /// Roll every die in order and record the result as a new snapshot.
    pub fn roll_all(&mut self) -> Snapshot {
        let snapshot = Snapshot::new(self.dice.iter_mut().map(Die::roll));
        debug!("rolled {}{}: {:?}", self.dice.len(), self.name(), snapshot.values());
        self.history.record(snapshot.clone());
        snapshot
    }

    /// Sum of current faces. Fails with `IncompleteRoll` if any die is unrolled.
    ///
    /// Accumulates in `u64` so large-faced dice cannot overflow the total.
    pub fn sum(&self) -> Result<u64> {
        self.dice
            .iter()
            .map(|d| d.rolled().map(u64::from).ok_or(DiceError::IncompleteRoll))
            .sum()
    }

    /// Most recent snapshot.
    #[must_use]
    pub fn current_roll(&self) -> Option<&Snapshot> {
        self.history.current()
    }

    /// Snapshot before the most recent one.
    #[must_use]
    pub fn previous_roll(&self) -> Option<&Snapshot> {
        self.history.previous()
    }

    #[must_use]
    pub fn current_total(&self) -> Option<u64> {
        self.current_roll().map(Snapshot::total)
    }

    #[must_use]
    pub fn previous_total(&self) -> Option<u64> {
        self.previous_roll().map(Snapshot::total)
    }

    // =========================================================================
    // Adding and removing
    // =========================================================================

    pub fn add_die(&mut self, die: Die) {
        self.dice.push(die);
    }

    /// Append `number` unrolled dice of this collection's face count.
    pub fn add_dice(&mut self, number: usize) {
        for _ in 0..number {
            self.dice.push(Die::unrolled(self.face_count, self.rng.clone()));
        }
    }

    /// Remove and return the die at `index`.
    pub fn remove_die(&mut self, index: usize) -> Result<Die> {
        if self.dice.is_empty() {
            return Err(DiceError::EmptyCollection);
        }
        if index >= self.dice.len() {
            return Err(DiceError::IndexOutOfBounds {
                index,
                len: self.dice.len(),
            });
        }
        Ok(self.dice.remove(index))
    }

    /// Remove and return the die with the given id.
    pub fn remove_by_id(&mut self, id: DieId) -> Result<Die> {
        let index = self.index_of(id).ok_or(DiceError::UnknownDie(id))?;
        Ok(self.dice.remove(index))
    }

    #[must_use]
    pub fn index_of(&self, id: DieId) -> Option<usize> {
        self.dice.iter().position(|d| d.id() == id)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Die> {
        self.dice.get(index)
    }

    // =========================================================================
    // Queries over current faces
    // =========================================================================

    /// Dice currently showing `value`, in order.
    #[must_use]
    pub fn dice_with_value(&self, value: u32) -> Vec<&Die> {
        self.dice.iter().filter(|d| d.rolled() == Some(value)).collect()
    }

    #[must_use]
    pub fn count_of_value(&self, value: u32) -> usize {
        self.dice.iter().filter(|d| d.rolled() == Some(value)).count()
    }

    /// How many dice show each face. Unrolled dice are not counted.
    #[must_use]
    pub fn value_counts(&self) -> FxHashMap<u32, usize> {
        let mut counts = FxHashMap::default();
        for face in self.dice.iter().filter_map(Die::rolled) {
            *counts.entry(face).or_insert(0) += 1;
        }
        counts
    }

    /// Lowest current face.
    pub fn min_roll(&self) -> Result<u32> {
        self.rolled_faces()?.into_iter().min().ok_or(DiceError::EmptyCollection)
    }

    /// Highest current face.
    pub fn max_roll(&self) -> Result<u32> {
        self.rolled_faces()?.into_iter().max().ok_or(DiceError::EmptyCollection)
    }

    fn rolled_faces(&self) -> Result<Vec<u32>> {
        self.dice
            .iter()
            .map(|d| d.rolled().ok_or(DiceError::IncompleteRoll))
            .collect()
    }

    /// Stable sort by current face.
    pub fn sort_by_roll(&mut self, descending: bool) -> Result<()> {
        if self.dice.iter().any(|d| d.rolled().is_none()) {
            return Err(DiceError::IncompleteRoll);
        }
        if descending {
            self.dice.sort_by(|a, b| b.rolled().cmp(&a.rolled()));
        } else {
            self.dice.sort_by_key(Die::rolled);
        }
        Ok(())
    }

    /// Partition into (matching, rest). Both halves keep this collection's
    /// face count and source; history stays behind.
    pub fn split<F>(self, predicate: F) -> (Dice, Dice)
    where
        F: Fn(&Die) -> bool,
    {
        let (matching, rest): (Vec<Die>, Vec<Die>) = self.dice.into_iter().partition(|d| predicate(d));
        let make = |dice| Dice {
            face_count: self.face_count,
            dice,
            history: RollHistory::with_limit(self.history.limit()),
            rng: self.rng.clone(),
        };
        (make(matching), make(rest))
    }

    // =========================================================================
    // Freezing
    // =========================================================================

    pub fn freeze_die(&mut self, index: usize) -> Result<()> {
        self.die_mut(index)?.freeze()
    }

    pub fn unfreeze_die(&mut self, index: usize) -> Result<()> {
        self.die_mut(index)?.unfreeze();
        Ok(())
    }

    /// Freeze every die. Fails without freezing anything if any die is unrolled.
    pub fn freeze_all(&mut self) -> Result<()> {
        if self.dice.iter().any(|d| d.rolled().is_none()) {
            return Err(DiceError::IncompleteRoll);
        }
        for die in &mut self.dice {
            die.freeze()?;
        }
        Ok(())
    }

    pub fn unfreeze_all(&mut self) {
        for die in &mut self.dice {
            die.unfreeze();
        }
    }

    /// True when every die is frozen (vacuously true when empty).
    #[must_use]
    pub fn is_all_frozen(&self) -> bool {
        self.dice.iter().all(Die::is_frozen)
    }

    fn die_mut(&mut self, index: usize) -> Result<&mut Die> {
        let len = self.dice.len();
        self.dice
            .get_mut(index)
            .ok_or(DiceError::IndexOutOfBounds { index, len })
    }

    pub(crate) fn detach(&mut self, index: usize) -> Die {
        self.dice.remove(index)
    }

    /// Name in dice notation, e.g. `d6`.
    #[must_use]
    pub fn name(&self) -> String {
        format!("d{}", self.face_count)
    }
}

impl From<Die> for Dice {
    fn from(die: Die) -> Self {
        Self {
            face_count: die.face_count(),
            rng: die.rng().clone(),
            dice: vec![die],
            history: RollHistory::new(),
        }
    }
}

impl<'a> IntoIterator for &'a Dice {
    type Item = &'a Die;
    type IntoIter = std::slice::Iter<'a, Die>;

    fn into_iter(self) -> Self::IntoIter {
        self.dice.iter()
    }
}
