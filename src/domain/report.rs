//! Full simulation of one scenario: result, composition and both tables.

use serde::Serialize;
use tracing::debug;

use super::calculator::{compute, ResultBreakdown};
use super::composition::{decompose, CompositionBreakdown};
use super::error::DomainError;
use super::scenario::ScenarioInputs;
use super::sensitivity::{GridKind, GridSteps, SensitivityGrid};

/// Everything the simulator shows for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub inputs: ScenarioInputs,
    pub result: ResultBreakdown,
    pub composition: CompositionBreakdown,
    pub price_grid: SensitivityGrid,
    pub conversion_grid: SensitivityGrid,
}

impl SimulationReport {
    /// The table of the given kind.
    #[must_use]
    pub const fn grid(&self, kind: GridKind) -> &SensitivityGrid {
        match kind {
            GridKind::Price => &self.price_grid,
            GridKind::Conversion => &self.conversion_grid,
        }
    }
}

/// Validate the inputs and run the whole computation.
///
/// # Errors
///
/// Returns a [`DomainError`] when the inputs break a business invariant.
pub fn simulate(
    inputs: &ScenarioInputs,
    steps: &GridSteps,
) -> Result<SimulationReport, DomainError> {
    inputs.validate()?;

    let result = compute(inputs);
    let composition = decompose(inputs, &result)?;
    let price_grid = GridKind::Price.build(inputs, steps);
    let conversion_grid = GridKind::Conversion.build(inputs, steps);

    debug!(net_result = result.net_result, "simulation complete");

    Ok(SimulationReport {
        inputs: *inputs,
        result,
        composition,
        price_grid,
        conversion_grid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scenario::InputField;

    #[test]
    fn test_simulate_default_scenario() {
        let report = simulate(&ScenarioInputs::default(), &GridSteps::default()).unwrap();

        assert_eq!(report.result.net_result, 31);
        assert_eq!(report.composition.lines()[3].value, 31);
        assert_eq!(report.grid(GridKind::Price).center().value, 31);
        assert_eq!(report.grid(GridKind::Conversion).center().value, 31);
    }

    #[test]
    fn test_simulate_rejects_invalid_inputs() {
        let inputs = ScenarioInputs {
            kg_purchased: 0.0,
            ..ScenarioInputs::default()
        };

        assert!(matches!(
            simulate(&inputs, &GridSteps::default()),
            Err(DomainError::NonPositive {
                field: InputField::KgPurchased,
                ..
            })
        ));
    }

    #[test]
    fn test_simulate_rejects_vanishing_gain() {
        let inputs = ScenarioInputs {
            daily_gain: 1e-322,
            ..ScenarioInputs::default()
        };

        assert!(matches!(
            simulate(&inputs, &GridSteps::default()),
            Err(DomainError::NoWeightGained { .. })
        ));
    }
}
