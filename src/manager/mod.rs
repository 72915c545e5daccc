//! Drop/keep mechanics over rolled collections.
//!
//! `RollManager` works through the `RollPool` capability rather than the
//! concrete `Dice` type, so the same selection logic runs over a `Dice`,
//! a `Vec<Die>`, or a plain `Vec<Option<u32>>`.
//!
//! ## Mechanics
//!
//! | Mechanic | Built from |
//! |---|---|
//! | Advantage | add one die, roll, `remove_lowest_roll` |
//! | Disadvantage | add one die, roll, `remove_highest_roll` |
//! | Drop lowest K | `remove_lowest_roll` K times |
//! | Keep best N | drop lowest (count - N) |
//!
//! Removal on an empty collection always fails with `EmptyCollection`;
//! it never silently does nothing.

mod pool;
mod roll_manager;

pub use pool::{RollPool, Rolled};
pub use roll_manager::RollManager;
