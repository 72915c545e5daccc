//! Bulk sampling of dice for fairness checks.

use crate::core::config::FairnessConfig;
use crate::core::error::Result;
use crate::core::rng::RandomSource;
use crate::dice::Die;

use super::chi_square::chi_square_test_with;
use super::report::FairnessReport;

/// Roll `die` `rolls` times and collect the faces.
pub fn sample_die(die: &mut Die, rolls: usize) -> Vec<u32> {
    (0..rolls).map(|_| die.roll()).collect()
}

/// Draw `rolls` faces in `1..=face_count` straight from a source.
pub fn sample_source<R: RandomSource + ?Sized>(source: &mut R, face_count: u32, rolls: usize) -> Vec<u32> {
    (0..rolls).map(|_| source.next_in_range(1, face_count)).collect()
}

/// Sample `die` and test the result for uniformity.
///
/// Only the sampling is random; the test over the sample is deterministic.
pub fn validate_die(die: &mut Die, rolls: usize, config: &FairnessConfig) -> Result<FairnessReport> {
    let sample = sample_die(die, rolls);
    chi_square_test_with(&sample, die.face_count(), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::DiceError;
    use crate::core::rng::{DiceRng, RngHandle};

    #[test]
    fn test_sample_die_length_and_range() {
        let mut die = Die::with_rng(12, RngHandle::seeded(5)).unwrap();
        let sample = sample_die(&mut die, 5000);
        assert_eq!(sample.len(), 5000);
        assert!(sample.iter().all(|v| (1..=12).contains(v)));
        assert_eq!(die.rolled(), sample.last().copied());
    }

    #[test]
    fn test_sample_source() {
        let mut rng = DiceRng::new(11);
        let sample = sample_source(&mut rng, 4, 100);
        assert!(sample.iter().all(|v| (1..=4).contains(v)));
    }

    #[test]
    fn test_zero_rolls_is_insufficient() {
        let mut die = Die::with_rng(6, RngHandle::seeded(5)).unwrap();
        assert!(matches!(
            validate_die(&mut die, 0, &FairnessConfig::default()),
            Err(DiceError::InsufficientSample(_))
        ));
    }

    #[test]
    fn test_frozen_die_fails_fairness() {
        let mut die = Die::with_rng(6, RngHandle::seeded(5)).unwrap();
        die.roll();
        die.freeze().unwrap();
        let report = validate_die(&mut die, 600, &FairnessConfig::default()).unwrap();
        assert!(!report.fits_uniform);
    }
}
