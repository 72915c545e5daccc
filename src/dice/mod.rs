//! Dice and dice collections.
//!
//! - `Die`: one die with a fixed face count and its latest roll
//! - `Dice`: ordered collection of dice plus roll history
//! - `Snapshot` / `RollHistory`: immutable record of every roll-all
//!
//! Values flow one way: a `Die` draws from its `RandomSource`, `Dice`
//! snapshots what its dice drew, and nothing outside `Die::roll` can
//! assign a face.

mod die;
mod history;
mod pool;

pub use die::{Die, DieId};
pub use history::{RollHistory, Snapshot};
pub use pool::Dice;
