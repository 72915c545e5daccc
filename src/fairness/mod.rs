//! Statistical self-verification of dice.
//!
//! An offline check, not part of gameplay: sample a die in bulk and run a
//! Pearson chi-square goodness-of-fit test against the uniform distribution.
//!
//! ## How it works
//!
//! 1. Count observations per face.
//! 2. Expected count per face is `sample_size / face_count`.
//! 3. Statistic is the sum over faces of `(observed - expected)^2 / expected`.
//! 4. The p-value comes from the chi-square distribution with
//!    `face_count - 1` degrees of freedom.
//! 5. The die fits uniform when `p_value > significance`.
//!
//! A fair die still fails at rate `significance`; tests that sample real
//! randomness must account for that.

mod chi_square;
mod report;
mod sampling;

pub use chi_square::{chi_square_test, chi_square_test_with};
pub use report::FairnessReport;
pub use sampling::{sample_die, sample_source, validate_die};
