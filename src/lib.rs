//! # dice-engine
//!
//! A dice rolling engine: single dice, ordered dice collections with roll
//! history, drop/keep mechanics, and a statistical fairness check.
//!
//! ## Design Principles
//!
//! 1. **Injected Randomness**: Every die draws through a `RandomSource`
//!    handed to it at construction. Tests swap in a `FixedSequence`;
//!    production uses a process-seeded ChaCha8 `DiceRng`.
//!
//! 2. **Provenance**: A die's face can only change through `Die::roll`.
//!    History snapshots copy values, so they never change afterwards.
//!
//! 3. **Loud Failures**: Removing from an empty collection, summing unrolled
//!    dice, or testing an empty sample is an error, never a silent no-op.
//!
//! ## Data Flow
//!
//! `Die` draws faces -> `Dice` aggregates and snapshots them ->
//! `RollManager` selects among rolled dice -> `fairness` samples `Die::roll`
//! in bulk to certify the source.
//!
//! ## Modules
//!
//! - `core`: randomness sources, errors, configuration
//! - `dice`: `Die`, `Dice`, roll history
//! - `manager`: `RollManager` and the `RollPool` capability it works through
//! - `fairness`: chi-square goodness-of-fit validator
//! - `render`: `Renderable` data providers and `Renderer` implementations
//!
//! ## Concurrency
//!
//! Single-threaded and synchronous. Dice share their source through an
//! `Rc`, so a collection stays on the thread that built it; a multi-client
//! host owns one collection per session and serializes access to it.

pub mod core;
pub mod dice;
pub mod fairness;
pub mod manager;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    DiceConfig, DiceError, DiceRng, DieKind, FairnessConfig, FixedSequence,
    RandomSource, Result, RngHandle,
};

pub use crate::dice::{Dice, Die, DieId, RollHistory, Snapshot};

pub use crate::manager::{RollManager, RollPool, Rolled};

pub use crate::fairness::{chi_square_test, chi_square_test_with, validate_die, FairnessReport};

pub use crate::render::{LogRenderer, Renderable, Renderer, TextRenderer};
