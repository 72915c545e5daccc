//! Engine configuration types.
//!
//! - `DieKind`: standard polyhedral presets plus custom face counts
//! - `DiceConfig`: shape of a `Dice` collection
//! - `FairnessConfig`: thresholds for the chi-square fairness check

use serde::{Deserialize, Serialize};

use super::error::{DiceError, Result};

/// Smallest face count that makes a die meaningful.
pub const MIN_FACES: u32 = 2;

/// Standard die presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieKind {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
    D100,
    /// Any other face count (validated when a die is built).
    Custom(u32),
}

impl DieKind {
    /// Number of faces for this preset.
    #[must_use]
    pub const fn faces(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// Map a face count back to its preset, falling back to `Custom`.
    #[must_use]
    pub const fn from_faces(faces: u32) -> Self {
        match faces {
            4 => Self::D4,
            6 => Self::D6,
            8 => Self::D8,
            10 => Self::D10,
            12 => Self::D12,
            20 => Self::D20,
            100 => Self::D100,
            n => Self::Custom(n),
        }
    }
}

impl std::fmt::Display for DieKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.faces())
    }
}

/// Reject face counts below `MIN_FACES`.
pub(crate) fn validate_faces(face_count: u32) -> Result<()> {
    if face_count < MIN_FACES {
        return Err(DiceError::config(format!(
            "face count must be at least {}, got {}",
            MIN_FACES, face_count
        )));
    }
    Ok(())
}

/// Configuration for a `Dice` collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceConfig {
    /// Faces on each die the collection creates.
    pub face_count: u32,

    /// Dice created up front.
    pub count: usize,

    /// Maximum snapshots retained. `None` keeps everything;
    /// oldest snapshots are discarded first.
    pub history_limit: Option<usize>,
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self {
            face_count: 6,
            count: 1,
            history_limit: None,
        }
    }
}

impl DiceConfig {
    /// Config for `count` dice of the given preset.
    #[must_use]
    pub fn new(kind: DieKind, count: usize) -> Self {
        Self {
            face_count: kind.faces(),
            count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_face_count(mut self, face_count: u32) -> Self {
        self.face_count = face_count;
        self
    }

    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Check the face count.
    pub fn validate(&self) -> Result<()> {
        validate_faces(self.face_count)
    }
}

/// Thresholds for the fairness check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FairnessConfig {
    /// Reject uniformity when the p-value is at or below this (default 0.05).
    pub significance: f64,

    /// Expected count per face below which the test is flagged under-powered
    /// (default 5.0).
    pub min_expected_per_face: f64,
}

impl Default for FairnessConfig {
    fn default() -> Self {
        Self {
            significance: 0.05,
            min_expected_per_face: 5.0,
        }
    }
}

impl FairnessConfig {
    #[must_use]
    pub fn with_significance(mut self, significance: f64) -> Self {
        self.significance = significance;
        self
    }

    #[must_use]
    pub fn with_min_expected(mut self, min_expected: f64) -> Self {
        self.min_expected_per_face = min_expected;
        self
    }

    /// Significance must lie strictly inside (0, 1).
    pub fn validate(&self) -> Result<()> {
        if !(self.significance > 0.0 && self.significance < 1.0) {
            return Err(DiceError::config(format!(
                "significance must be in (0, 1), got {}",
                self.significance
            )));
        }
        if !(self.min_expected_per_face >= 0.0) {
            return Err(DiceError::config(format!(
                "min expected per face must be non-negative, got {}",
                self.min_expected_per_face
            )));
        }
        Ok(())
    }
}
