//! Core engine types: randomness sources, errors, configuration.
//!
//! Everything else in the crate builds on these. Randomness is always
//! injected through a `RandomSource`; nothing draws from a hidden global.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{DiceConfig, DieKind, FairnessConfig, MIN_FACES};
pub use error::{DiceError, Result};
pub use rng::{DiceRng, FixedSequence, RandomSource, RngHandle};
