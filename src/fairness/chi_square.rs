//! Pearson chi-square goodness-of-fit test against a uniform die.

use log::{info, warn};
use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::core::config::{FairnessConfig, MIN_FACES};
use crate::core::error::{DiceError, Result};

use super::report::FairnessReport;

/// Test `sample` for uniformity over `1..=face_count` at `significance`.
///
/// Pure: the same inputs always produce the same statistic.
///
/// ```
/// use dice_engine::fairness::chi_square_test;
///
/// let sample: Vec<u32> = (0..600).map(|i| i % 6 + 1).collect();
/// let report = chi_square_test(&sample, 6, 0.05).unwrap();
/// assert_eq!(report.statistic, 0.0);
/// assert!(report.fits_uniform);
/// ```
pub fn chi_square_test(sample: &[u32], face_count: u32, significance: f64) -> Result<FairnessReport> {
    let config = FairnessConfig::default().with_significance(significance);
    chi_square_test_with(sample, face_count, &config)
}

/// Same as `chi_square_test`, with every threshold taken from `config`.
pub fn chi_square_test_with(sample: &[u32], face_count: u32, config: &FairnessConfig) -> Result<FairnessReport> {
    if face_count < MIN_FACES {
        return Err(DiceError::InsufficientSample(format!(
            "face count must be at least {}, got {}",
            MIN_FACES, face_count
        )));
    }
    if sample.is_empty() {
        return Err(DiceError::InsufficientSample("sample is empty".to_string()));
    }
    config.validate()?;

    let observed = tally(sample, face_count)?;
    let expected = sample.len() as f64 / f64::from(face_count);
    let statistic = observed
        .iter()
        .map(|&count| {
            let diff = count as f64 - expected;
            diff * diff / expected
        })
        .sum::<f64>();

    let degrees_of_freedom = face_count - 1;
    let p_value = upper_tail(statistic, degrees_of_freedom)?;
    let fits_uniform = p_value > config.significance;

    let well_powered = expected >= config.min_expected_per_face;
    if !well_powered {
        warn!(
            "fairness sample under-powered: {:.2} expected per face, want at least {}",
            expected, config.min_expected_per_face
        );
    }

    info!(
        "d{} fairness over {} rolls: chi2={:.4} p={:.6} fits_uniform={}",
        face_count,
        sample.len(),
        statistic,
        p_value,
        fits_uniform
    );

    Ok(FairnessReport {
        face_count,
        sample_size: sample.len(),
        observed,
        expected,
        degrees_of_freedom,
        statistic,
        p_value,
        significance: config.significance,
        fits_uniform,
        well_powered,
    })
}

/// Count observations per face. Index 0 is face 1.
///
/// The sample must hold at least one observation per face; the per-face
/// table is only allocated once that holds.
fn tally(sample: &[u32], face_count: u32) -> Result<Vec<u64>> {
    if let Some(&value) = sample.iter().find(|&&v| v == 0 || v > face_count) {
        return Err(DiceError::FaceOutOfRange { value, face_count });
    }
    if face_count as usize > sample.len() {
        return Err(DiceError::InsufficientSample(format!(
            "{} rolls cannot cover {} faces",
            sample.len(),
            face_count
        )));
    }

    let mut observed = vec![0u64; face_count as usize];
    for &value in sample {
        observed[(value - 1) as usize] += 1;
    }
    Ok(observed)
}

/// P(X >= statistic) for X ~ chi-square(df).
fn upper_tail(statistic: f64, degrees_of_freedom: u32) -> Result<f64> {
    let distribution = ChiSquared::new(f64::from(degrees_of_freedom))
        .map_err(|e| DiceError::InsufficientSample(format!("chi-square distribution: {}", e)))?;
    Ok(distribution.sf(statistic))
}
