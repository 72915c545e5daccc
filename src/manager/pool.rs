//! Capability traits the roll manager works through.
//!
//! `RollManager` never names `Dice` directly. Anything that is an ordered,
//! mutable collection of items exposing a rolled value can be managed.

use crate::dice::{Dice, Die};

/// An item with an optional rolled value.
pub trait Rolled {
    /// Current face, `None` if never rolled.
    fn rolled(&self) -> Option<u32>;
}

impl Rolled for Die {
    fn rolled(&self) -> Option<u32> {
        Die::rolled(self)
    }
}

impl Rolled for Option<u32> {
    fn rolled(&self) -> Option<u32> {
        *self
    }
}

/// Ordered, mutable collection of rolled items.
pub trait RollPool {
    type Item: Rolled;

    /// Items in collection order.
    fn items(&self) -> &[Self::Item];

    /// Remove and return the item at `index`. Callers pass a valid index.
    fn take_at(&mut self, index: usize) -> Self::Item;

    fn len(&self) -> usize {
        self.items().len()
    }

    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

impl RollPool for Dice {
    type Item = Die;

    fn items(&self) -> &[Die] {
        self.dice()
    }

    fn take_at(&mut self, index: usize) -> Die {
        self.detach(index)
    }
}

impl<T: Rolled> RollPool for Vec<T> {
    type Item = T;

    fn items(&self) -> &[T] {
        self
    }

    fn take_at(&mut self, index: usize) -> T {
        self.remove(index)
    }
}

impl<P: RollPool + ?Sized> RollPool for &mut P {
    type Item = P::Item;

    fn items(&self) -> &[P::Item] {
        (**self).items()
    }

    fn take_at(&mut self, index: usize) -> P::Item {
        (**self).take_at(index)
    }
}
