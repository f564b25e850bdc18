//! Two-way sensitivity tables of the net result.
//!
//! A grid varies two inputs over `base ± 5 steps` (values rounded to cents)
//! and computes the rounded net result for every pair, holding the other
//! inputs at their base values. One builder serves every pair of inputs;
//! [`GridKind`] names the two tables the simulator shows.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::band::CellBand;
use super::calculator::compute;
use super::scenario::{InputField, ScenarioInputs};

/// Steps taken on each side of the base value.
pub const GRID_RADIUS: i32 = 5;

/// Values per axis.
pub const GRID_SIZE: usize = (2 * GRID_RADIUS + 1) as usize;

/// One varied input and its step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensitivityAxis {
    pub field: InputField,
    pub step: f64,
}

impl SensitivityAxis {
    #[must_use]
    pub const fn new(field: InputField, step: f64) -> Self {
        Self { field, step }
    }

    /// The [`GRID_SIZE`] values of this axis around `base`, ascending for a
    /// positive step.
    ///
    /// The center value is the base itself so the middle cell reproduces the
    /// base scenario even when the base carries more than two decimals.
    /// Values are read back through the scenario, so whole-day inputs show
    /// the day count their cells are computed with.
    #[must_use]
    pub fn values(&self, base: &ScenarioInputs) -> Vec<f64> {
        let center = base.get(self.field);
        (-GRID_RADIUS..=GRID_RADIUS)
            .map(|offset| match offset {
                0 => center,
                _ => round_to_cents(center + f64::from(offset) * self.step),
            })
            .map(|value| base.with(self.field, value).get(self.field))
            .collect()
    }
}

/// Round to two decimals, ties to even, on the exact binary value.
///
/// The result is the double nearest to the rounded decimal: the mantissa is
/// exact and the power of ten is a single correctly rounded division.
fn round_to_cents(value: f64) -> f64 {
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let rounded = exact.round_dp(2);
            rounded.mantissa() as f64 / 10f64.powi(rounded.scale() as i32)
        }
        None => value,
    }
}

/// Steps used by the two standard tables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSteps {
    /// Step for purchase and sale price.
    pub price_step: f64,
    /// Step for feed conversion.
    pub conversion_step: f64,
    /// Step for daily gain.
    pub daily_gain_step: f64,
}

impl Default for GridSteps {
    fn default() -> Self {
        Self {
            price_step: 0.05,
            conversion_step: 0.2,
            daily_gain_step: 0.2,
        }
    }
}

/// The two tables the simulator shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GridKind {
    /// Purchase price (rows) against sale price (columns).
    Price,
    /// Feed conversion (rows) against daily gain (columns).
    Conversion,
}

impl GridKind {
    pub const ALL: [Self; 2] = [Self::Price, Self::Conversion];

    /// Row and column axes of this table.
    #[must_use]
    pub fn axes(self, steps: &GridSteps) -> (SensitivityAxis, SensitivityAxis) {
        match self {
            Self::Price => (
                SensitivityAxis::new(InputField::PurchasePrice, steps.price_step),
                SensitivityAxis::new(InputField::SalePrice, steps.price_step),
            ),
            Self::Conversion => (
                SensitivityAxis::new(InputField::FeedConversion, steps.conversion_step),
                SensitivityAxis::new(InputField::DailyGain, steps.daily_gain_step),
            ),
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Price => "Análisis de Sensibilidad: Resultado Total según Precios de Compra y Venta",
            Self::Conversion => "Análisis de Sensibilidad: Resultado Total según Conversión MS y ADPV",
        }
    }

    /// Build this table around `base`.
    #[must_use]
    pub fn build(self, base: &ScenarioInputs, steps: &GridSteps) -> SensitivityGrid {
        let (rows, columns) = self.axes(steps);
        build_grid(base, rows, columns)
    }
}

impl fmt::Display for GridKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Price => "price",
            Self::Conversion => "conversion",
        })
    }
}

/// Values taken by one axis of a built grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridAxis {
    pub field: InputField,
    pub step: f64,
    pub values: Vec<f64>,
}

impl GridAxis {
    /// Labels in the form `"<AxisName>: <value>"`, value to two decimals.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.values
            .iter()
            .map(|value| format!("{}: {value:.2}", self.field.axis_name()))
            .collect()
    }
}

/// A rounded net result with its band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub value: i64,
    pub band: CellBand,
}

impl GridCell {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            band: CellBand::classify(value),
        }
    }
}

/// Square table of rounded net results, row-major.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityGrid {
    rows: GridAxis,
    columns: GridAxis,
    cells: Vec<Vec<GridCell>>,
}

impl SensitivityGrid {
    #[must_use]
    pub const fn rows(&self) -> &GridAxis {
        &self.rows
    }

    #[must_use]
    pub const fn columns(&self) -> &GridAxis {
        &self.columns
    }

    /// Cells by row.
    #[must_use]
    pub fn cells(&self) -> &[Vec<GridCell>] {
        &self.cells
    }

    /// Cell at `(row, column)`, if in range.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<GridCell> {
        self.cells.get(row)?.get(column).copied()
    }

    /// The cell where both axes sit at their base value.
    #[must_use]
    pub fn center(&self) -> GridCell {
        let mid = GRID_RADIUS as usize;
        self.cells[mid][mid]
    }
}

/// Tabulate the rounded net result over two varied inputs.
///
/// Cells are independent evaluations of [`compute`].
#[must_use]
pub fn build_grid(
    base: &ScenarioInputs,
    rows: SensitivityAxis,
    columns: SensitivityAxis,
) -> SensitivityGrid {
    let row_values = rows.values(base);
    let column_values = columns.values(base);

    let cells = row_values
        .iter()
        .map(|&row_value| {
            let row_inputs = base.with(rows.field, row_value);
            column_values
                .iter()
                .map(|&column_value| {
                    let inputs = row_inputs.with(columns.field, column_value);
                    GridCell::new(compute(&inputs).net_result)
                })
                .collect()
        })
        .collect();

    debug!(
        rows = %rows.field,
        columns = %columns.field,
        "sensitivity grid built"
    );

    SensitivityGrid {
        rows: GridAxis {
            field: rows.field,
            step: rows.step,
            values: row_values,
        },
        columns: GridAxis {
            field: columns.field,
            step: columns.step,
            values: column_values,
        },
        cells,
    }
}
