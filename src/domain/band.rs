//! Result bands for scanning sensitivity tables.

use serde::Serialize;

/// Highest result still considered low.
pub const LOW_MAX: i64 = 50;

/// Highest result still considered medium.
pub const MEDIUM_MAX: i64 = 89;

/// Ordered classification of a rounded result, worst first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellBand {
    /// Negative result.
    Loss,
    /// 0 to 50.
    Low,
    /// 51 to 89.
    Medium,
    /// 90 and above.
    High,
}

impl CellBand {
    /// Classify a rounded result.
    #[must_use]
    pub const fn classify(value: i64) -> Self {
        if value < 0 {
            Self::Loss
        } else if value <= LOW_MAX {
            Self::Low
        } else if value <= MEDIUM_MAX {
            Self::Medium
        } else {
            Self::High
        }
    }
}
