//! Error type shared by every engine operation.
//!
//! All failures are local and synchronous: they describe a misuse by the
//! immediate caller, so nothing here is retried.

use thiserror::Error;

use crate::dice::DieId;

pub type Result<T> = std::result::Result<T, DiceError>;

#[derive(Debug, Error)]
pub enum DiceError {
    /// Bad construction parameters (face count, significance, preset).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Selection or removal requested on a collection with zero dice.
    #[error("no dice in collection")]
    EmptyCollection,

    /// A value was needed from a die that has never been rolled.
    #[error("one or more dice have not been rolled")]
    IncompleteRoll,

    /// Fairness check given a sample it cannot evaluate.
    #[error("insufficient sample: {0}")]
    InsufficientSample(String),

    #[error("face value {value} outside 1..={face_count}")]
    FaceOutOfRange { value: u32, face_count: u32 },

    #[error("requested {requested} dice but only {available} available")]
    NotEnoughDice { requested: usize, available: usize },

    #[error("index {index} out of bounds for {len} dice")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("no die with id {0} in collection")]
    UnknownDie(DieId),

    #[error("render failed")]
    Render(#[from] std::io::Error),
}

impl DiceError {
    /// Shorthand used by config validation.
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}
