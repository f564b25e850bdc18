//! Feedlot economics: scenario inputs, result, composition and sensitivity.

mod band;
mod calculator;
mod composition;
mod money;
mod report;
mod scenario;
mod sensitivity;

pub mod error;

pub use band::CellBand;
pub use calculator::{compute, ResultBreakdown, SALES_TAX_RATE, STAY_COST_PER_DAY, TRANSACTION_FEE};
pub use composition::{decompose, CompositionBreakdown, CompositionLine};
pub use error::DomainError;
pub use money::{round_currency, Amount};
pub use report::{simulate, SimulationReport};
pub use scenario::{InputField, ScenarioInputs};
pub use sensitivity::{
    build_grid, GridAxis, GridCell, GridKind, GridSteps, SensitivityAxis, SensitivityGrid,
    GRID_RADIUS, GRID_SIZE,
};
