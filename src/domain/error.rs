//! Domain validation errors for scenario inputs and derived figures.
//!
//! The calculator itself is total over finite inputs; these errors come from
//! [`ScenarioInputs::validate`](super::scenario::ScenarioInputs::validate) and
//! from the composition step, which cannot split a result across zero gain.
//!
//! # Examples
//!
//! ```
//! use feedlot::domain::{DomainError, InputField, ScenarioInputs};
//!
//! let inputs = ScenarioInputs {
//!     daily_gain: -1.0,
//!     ..ScenarioInputs::default()
//! };
//!
//! assert!(matches!(
//!     inputs.validate(),
//!     Err(DomainError::NonPositive { field: InputField::DailyGain, .. })
//! ));
//! ```

use thiserror::Error;

use super::scenario::InputField;

/// Errors that occur when scenario invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Every input must be a finite number.
    #[error("{field} must be a finite number, got {value}")]
    NonFinite {
        /// The offending input.
        field: InputField,
        /// The value that was provided.
        value: f64,
    },

    /// Inputs are quantities, prices and rates; all must be above zero.
    #[error("{field} must be greater than 0, got {value}")]
    NonPositive {
        /// The offending input.
        field: InputField,
        /// The value that was provided.
        value: f64,
    },

    /// Dressing yield is a percentage of live weight.
    #[error("dressing yield must be at most 100%, got {value}")]
    YieldOutOfRange {
        /// The yield that was provided.
        value: f64,
    },

    /// The feed margin is expressed per kg gained and is undefined without gain.
    #[error("feed margin is undefined when no weight is gained (daily gain {daily_gain} over {days_on_feed} days)")]
    NoWeightGained {
        /// Daily gain of the scenario.
        daily_gain: f64,
        /// Days on feed of the scenario.
        days_on_feed: u32,
    },
}
