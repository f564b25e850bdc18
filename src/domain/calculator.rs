//! Net result of a purchase-and-feed cycle.
//!
//! Gross revenue is the exit weight at dressing yield times the sale price.
//! From it come the purchase, the diet, a fixed daily structure cost, a 1%
//! sale tax and two flat 2-unit transaction fees.

use serde::Serialize;
use tracing::trace;

use super::money::{round_currency, Amount};
use super::scenario::ScenarioInputs;

/// Structure cost per head per day on feed.
pub const STAY_COST_PER_DAY: f64 = 0.38;

/// Tax charged on gross sale revenue.
pub const SALES_TAX_RATE: f64 = 0.01;

/// Flat fee charged once at purchase and once at sale.
pub const TRANSACTION_FEE: f64 = 2.0;

/// Net result and the intermediate figures it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResultBreakdown {
    /// Net result rounded to whole currency units.
    pub net_result: i64,
    /// Net result before rounding.
    pub net_result_exact: Amount,
    /// Dry-matter eaten per day, in kg.
    pub daily_drymatter_intake_kg: f64,
    /// Live weight put on over the feeding period, in kg.
    pub weight_gained_kg: f64,
    /// Live weight at exit, in kg.
    pub exit_weight_kg: f64,
    pub total_feed_cost: Amount,
    pub gross_revenue: Amount,
    pub total_purchase_cost: Amount,
    pub sales_tax_expense: Amount,
    pub fixed_stay_expense: Amount,
}

/// Compute the result of a scenario.
///
/// Total over finite inputs; nothing is validated here.
#[must_use]
pub fn compute(inputs: &ScenarioInputs) -> ResultBreakdown {
    let days = f64::from(inputs.days_on_feed);

    let daily_drymatter_intake_kg = inputs.daily_gain * inputs.feed_conversion_ratio;
    let weight_gained_kg = inputs.daily_gain * days;
    let exit_weight_kg = inputs.kg_purchased + weight_gained_kg;
    let total_purchase_cost = inputs.kg_purchased * inputs.purchase_price_per_kg;
    let total_feed_cost = daily_drymatter_intake_kg * days * inputs.feed_cost_per_kg_drymatter;
    let gross_revenue =
        exit_weight_kg * (inputs.dressing_yield_pct / 100.0) * inputs.sale_price_per_kg;
    let sales_tax_expense = SALES_TAX_RATE * gross_revenue;
    let fixed_stay_expense = days * STAY_COST_PER_DAY;

    let net_result_exact = gross_revenue
        - total_purchase_cost
        - total_feed_cost
        - fixed_stay_expense
        - sales_tax_expense
        - TRANSACTION_FEE
        - TRANSACTION_FEE;

    trace!(net = net_result_exact, exit_weight_kg, "scenario computed");

    ResultBreakdown {
        net_result: round_currency(net_result_exact),
        net_result_exact,
        daily_drymatter_intake_kg,
        weight_gained_kg,
        exit_weight_kg,
        total_feed_cost,
        gross_revenue,
        total_purchase_cost,
        sales_tax_expense,
        fixed_stay_expense,
    }
}
