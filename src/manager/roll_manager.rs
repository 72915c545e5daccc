//! Selection and removal mechanics over rolled collections.

use log::{debug, info};

use crate::core::error::{DiceError, Result};
use crate::dice::{Dice, Die};

use super::pool::{RollPool, Rolled};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Extreme {
    Lowest,
    Highest,
}

/// Applies drop/keep mechanics to a collection of rolled items.
///
/// The manager never draws randomness for the generic operations; it only
/// selects among values already rolled. Every removal re-scans the live
/// collection, so repeated removals always see the current state.
///
/// ## Ties
///
/// When several items share the extreme value, the first one in collection
/// order is removed.
///
/// ```
/// use dice_engine::core::RngHandle;
/// use dice_engine::dice::Dice;
/// use dice_engine::manager::RollManager;
///
/// let mut dice = Dice::with_rng(6, 4, RngHandle::fixed(vec![3, 1, 1, 5])).unwrap();
/// dice.roll_all();
///
/// let mut manager = RollManager::new(dice);
/// let removed = manager.remove_lowest_roll().unwrap();
/// assert_eq!(removed.rolled(), Some(1));
/// assert_eq!(manager.pool().values(), vec![Some(3), Some(1), Some(5)]);
/// ```
#[derive(Debug)]
pub struct RollManager<P = Dice> {
    pool: P,
}

impl<P: RollPool> RollManager<P> {
    /// Manage `pool`.
    pub fn new(pool: P) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &P {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut P {
        &mut self.pool
    }

    /// Give the collection back.
    pub fn into_inner(self) -> P {
        self.pool
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.pool.len()
    }

    /// Index of the first item holding the extreme value.
    ///
    /// Fails with `EmptyCollection` on an empty pool (checked first, so the
    /// error never depends on history), then `IncompleteRoll` if any item
    /// is unrolled.
    fn find(&self, extreme: Extreme) -> Result<usize> {
        let items = self.pool.items();
        if items.is_empty() {
            return Err(DiceError::EmptyCollection);
        }

        let mut best: Option<(usize, u32)> = None;
        for (index, item) in items.iter().enumerate() {
            let value = item.rolled().ok_or(DiceError::IncompleteRoll)?;
            let better = match (best, extreme) {
                (None, _) => true,
                (Some((_, current)), Extreme::Lowest) => value < current,
                (Some((_, current)), Extreme::Highest) => value > current,
            };
            if better {
                best = Some((index, value));
            }
        }

        best.map(|(index, _)| index).ok_or(DiceError::EmptyCollection)
    }

    fn remove(&mut self, extreme: Extreme) -> Result<P::Item> {
        let index = self.find(extreme)?;
        let item = self.pool.take_at(index);
        debug!(
            "removed {:?} roll {:?} at index {}, {} left",
            extreme,
            item.rolled(),
            index,
            self.pool.len()
        );
        Ok(item)
    }

    /// Item holding the lowest value, without removing it.
    pub fn lowest(&self) -> Result<&P::Item> {
        let index = self.find(Extreme::Lowest)?;
        Ok(&self.pool.items()[index])
    }

    /// Item holding the highest value, without removing it.
    pub fn highest(&self) -> Result<&P::Item> {
        let index = self.find(Extreme::Highest)?;
        Ok(&self.pool.items()[index])
    }

    /// Remove and return the first item with the lowest value.
    pub fn remove_lowest_roll(&mut self) -> Result<P::Item> {
        self.remove(Extreme::Lowest)
    }

    /// Remove and return the first item with the highest value.
    pub fn remove_highest_roll(&mut self) -> Result<P::Item> {
        self.remove(Extreme::Highest)
    }

    /// Check a batch of `k` removals up front so a failing batch leaves the
    /// collection untouched.
    fn check_batch(&self, k: usize) -> Result<()> {
        if k == 0 {
            return Ok(());
        }
        let available = self.pool.len();
        if available == 0 {
            return Err(DiceError::EmptyCollection);
        }
        if k > available {
            return Err(DiceError::NotEnoughDice { requested: k, available });
        }
        if self.pool.items().iter().any(|item| item.rolled().is_none()) {
            return Err(DiceError::IncompleteRoll);
        }
        Ok(())
    }

    fn drop_many(&mut self, k: usize, extreme: Extreme) -> Result<Vec<P::Item>> {
        self.check_batch(k)?;
        let mut removed = Vec::with_capacity(k);
        for _ in 0..k {
            removed.push(self.remove(extreme)?);
        }
        Ok(removed)
    }

    /// Remove the `k` lowest items, one re-scan per removal.
    pub fn drop_lowest(&mut self, k: usize) -> Result<Vec<P::Item>> {
        self.drop_many(k, Extreme::Lowest)
    }

    /// Remove the `k` highest items, one re-scan per removal.
    pub fn drop_highest(&mut self, k: usize) -> Result<Vec<P::Item>> {
        self.drop_many(k, Extreme::Highest)
    }

    /// Keep only the `n` highest items.
    pub fn keep_highest(&mut self, n: usize) -> Result<Vec<P::Item>> {
        let surplus = self.surplus(n)?;
        self.drop_lowest(surplus)
    }

    /// Keep only the `n` lowest items.
    pub fn keep_lowest(&mut self, n: usize) -> Result<Vec<P::Item>> {
        let surplus = self.surplus(n)?;
        self.drop_highest(surplus)
    }

    fn surplus(&self, keep: usize) -> Result<usize> {
        let available = self.pool.len();
        if keep > available {
            return Err(DiceError::NotEnoughDice {
                requested: keep,
                available,
            });
        }
        Ok(available - keep)
    }
}

impl RollManager<Dice> {
    /// Manage a single die.
    pub fn from_die(die: Die) -> Self {
        Self::new(Dice::from(die))
    }

    /// Manage a list of dice. Fails with `InvalidConfiguration` when empty.
    pub fn from_dice_list(dice: Vec<Die>) -> Result<Self> {
        Dice::from_dice(dice).map(Self::new)
    }

    /// Roll every die and return the total.
    pub fn roll(&mut self) -> u64 {
        let total = self.pool.roll_all().total();
        info!("regular roll total: {}", total);
        total
    }

    /// Sum of the current faces.
    pub fn total(&self) -> Result<u64> {
        self.pool.sum()
    }

    /// Add `number` unrolled dice to the managed collection.
    pub fn add_dice(&mut self, number: usize) {
        self.pool.add_dice(number);
        debug!("added {} {} to roll manager", number, self.pool.name());
    }

    /// Add one extra die, roll everything, drop the lowest, return the total.
    pub fn roll_with_advantage(&mut self) -> Result<u64> {
        self.roll_with_extra(Extreme::Lowest, "advantage")
    }

    /// Add one extra die, roll everything, drop the highest, return the total.
    pub fn roll_with_disadvantage(&mut self) -> Result<u64> {
        self.roll_with_extra(Extreme::Highest, "disadvantage")
    }

    fn roll_with_extra(&mut self, discard: Extreme, label: &str) -> Result<u64> {
        self.add_dice(1);
        self.pool.roll_all();
        self.remove(discard)?;
        let total = self.pool.sum()?;
        info!("{} roll total: {}", label, total);
        Ok(total)
    }

    /// Roll everything, keep the `n` highest, return their total.
    ///
    /// With `n = 1` over N dice this is "roll N, keep the best".
    pub fn roll_keep_highest(&mut self, n: usize) -> Result<u64> {
        self.surplus(n)?;
        self.pool.roll_all();
        self.keep_highest(n)?;
        self.pool.sum()
    }

    /// Roll everything, keep the `n` lowest, return their total.
    pub fn roll_keep_lowest(&mut self, n: usize) -> Result<u64> {
        self.surplus(n)?;
        self.pool.roll_all();
        self.keep_lowest(n)?;
        self.pool.sum()
    }
}

impl From<Dice> for RollManager<Dice> {
    fn from(dice: Dice) -> Self {
        Self::new(dice)
    }
}
