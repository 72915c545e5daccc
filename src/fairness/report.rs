//! Fairness check results.

use serde::{Deserialize, Serialize};

/// Outcome of a chi-square goodness-of-fit test against a uniform die.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FairnessReport {
    /// Faces on the die under test.
    pub face_count: u32,

    /// Number of observations.
    pub sample_size: usize,

    /// Observations per face; index 0 is face 1.
    pub observed: Vec<u64>,

    /// Expected observations per face under uniformity.
    pub expected: f64,

    /// `face_count - 1`.
    pub degrees_of_freedom: u32,

    /// Chi-square statistic.
    pub statistic: f64,

    /// Probability of a statistic at least this large under uniformity.
    pub p_value: f64,

    /// Threshold the p-value was compared against.
    pub significance: f64,

    /// `p_value > significance`.
    pub fits_uniform: bool,

    /// Whether every face had enough expected observations for the
    /// chi-square approximation to hold.
    pub well_powered: bool,
}

impl FairnessReport {
    /// Face with the most observations (ties go to the lower face).
    #[must_use]
    pub fn most_common_face(&self) -> Option<u32> {
        let max = *self.observed.iter().max()?;
        self.observed
            .iter()
            .position(|&count| count == max)
            .map(|index| index as u32 + 1)
    }

    /// Largest relative deviation of any face from the expected count.
    #[must_use]
    pub fn max_relative_deviation(&self) -> f64 {
        if self.expected == 0.0 {
            return 0.0;
        }
        self.observed
            .iter()
            .map(|&count| (count as f64 - self.expected).abs() / self.expected)
            .fold(0.0, f64::max)
    }
}

impl std::fmt::Display for FairnessReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verdict = if self.fits_uniform { "PASS" } else { "FAIL" };
        writeln!(
            f,
            "{} d{}: chi2 = {:.4}, df = {}, p = {:.6} (alpha = {})",
            verdict, self.face_count, self.statistic, self.degrees_of_freedom, self.p_value, self.significance
        )?;
        write!(f, "  {} rolls, expected {:.1} per face", self.sample_size, self.expected)?;
        if !self.well_powered {
            write!(f, " (under-powered)")?;
        }
        Ok(())
    }
}
