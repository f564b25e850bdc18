//! Decomposition of the net result into economic margins.
//!
//! The same terms as [`compute`](super::calculator::compute), regrouped:
//!
//! - **Purchase-sale margin**: yield-adjusted sale price minus purchase price,
//!   over the kg bought.
//! - **Feed margin**: yield-adjusted sale price minus the cost of each kg
//!   gained (diet plus structure), over the kg gained.
//! - **Sale expenses**: the sale tax and both flat fees, as a negative line.
//!
//! The three lines sum to the unrounded net result.

use serde::Serialize;
use tracing::debug;

use super::calculator::{ResultBreakdown, TRANSACTION_FEE};
use super::error::DomainError;
use super::money::{round_currency, Amount};
use super::scenario::ScenarioInputs;

pub const PURCHASE_SALE_MARGIN_LABEL: &str = "Margen de compra venta";
pub const FEED_MARGIN_LABEL: &str = "Margen de alimentación";
pub const SALE_EXPENSES_LABEL: &str = "Gastos de compra venta";
pub const TOTAL_RESULT_LABEL: &str = "Resultado Total";

/// Four-line breakdown of a scenario result, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompositionBreakdown {
    pub purchase_sale_margin: Amount,
    pub feed_margin: Amount,
    /// Negative: sale tax plus flat fees.
    pub sale_expenses: Amount,
    pub total_result: Amount,
}

/// One labelled, rounded line of a [`CompositionBreakdown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompositionLine {
    pub label: &'static str,
    pub value: i64,
}

impl CompositionBreakdown {
    /// The four lines in display order, each rounded independently.
    #[must_use]
    pub fn lines(&self) -> [CompositionLine; 4] {
        [
            CompositionLine {
                label: PURCHASE_SALE_MARGIN_LABEL,
                value: round_currency(self.purchase_sale_margin),
            },
            CompositionLine {
                label: FEED_MARGIN_LABEL,
                value: round_currency(self.feed_margin),
            },
            CompositionLine {
                label: SALE_EXPENSES_LABEL,
                value: round_currency(self.sale_expenses),
            },
            CompositionLine {
                label: TOTAL_RESULT_LABEL,
                value: round_currency(self.total_result),
            },
        ]
    }
}

/// Split a computed result into its margins.
///
/// # Errors
///
/// Returns [`DomainError::NoWeightGained`] when `daily_gain * days_on_feed` is
/// zero or not finite, or so small that the cost per kg gained overflows,
/// since the feed margin is priced per kg gained.
pub fn decompose(
    inputs: &ScenarioInputs,
    breakdown: &ResultBreakdown,
) -> Result<CompositionBreakdown, DomainError> {
    let no_weight_gained = || DomainError::NoWeightGained {
        daily_gain: inputs.daily_gain,
        days_on_feed: inputs.days_on_feed,
    };

    let weight_gained = f64::from(inputs.days_on_feed) * inputs.daily_gain;
    if weight_gained == 0.0 || !weight_gained.is_finite() {
        return Err(no_weight_gained());
    }

    let sale_price_at_yield = inputs.sale_price_per_kg * (inputs.dressing_yield_pct / 100.0);

    let purchase_sale_margin =
        (sale_price_at_yield - inputs.purchase_price_per_kg) * inputs.kg_purchased;
    let cost_per_kg_gained =
        (breakdown.fixed_stay_expense + breakdown.total_feed_cost) / weight_gained;
    // A vanishingly small gain overflows the per-kg cost.
    if !cost_per_kg_gained.is_finite() {
        return Err(no_weight_gained());
    }
    let feed_margin = (sale_price_at_yield - cost_per_kg_gained) * weight_gained;
    let sale_expenses = -(breakdown.sales_tax_expense + TRANSACTION_FEE + TRANSACTION_FEE);
    let total_result = purchase_sale_margin + feed_margin + sale_expenses;

    debug!(
        purchase_sale_margin,
        feed_margin, sale_expenses, total_result, "result decomposed"
    );

    Ok(CompositionBreakdown {
        purchase_sale_margin,
        feed_margin,
        sale_expenses,
        total_result,
    })
}
