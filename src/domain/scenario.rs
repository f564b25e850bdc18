//! Scenario inputs for a single feedlot purchase.
//!
//! A [`ScenarioInputs`] is an immutable value supplied by the caller (the CLI
//! form, a config file, a test). Nothing in the domain reads ambient state.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// The eight inputs of a purchase-and-feed cycle for one head.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioInputs {
    /// Live weight bought, in kg.
    pub kg_purchased: f64,
    /// Average daily live-weight gain (ADPV), in kg/day.
    pub daily_gain: f64,
    /// Dry-matter feed per kg of gain.
    pub feed_conversion_ratio: f64,
    /// Length of the feeding period.
    pub days_on_feed: u32,
    /// Share of live weight paid at sale, in percent.
    pub dressing_yield_pct: f64,
    /// Delivered purchase price per kg of live weight.
    pub purchase_price_per_kg: f64,
    /// Average diet cost per kg of dry matter.
    pub feed_cost_per_kg_drymatter: f64,
    /// Sale price per kg of yield-adjusted weight.
    pub sale_price_per_kg: f64,
}

impl Default for ScenarioInputs {
    fn default() -> Self {
        Self {
            kg_purchased: 350.0,
            daily_gain: 1.4,
            feed_conversion_ratio: 7.3,
            days_on_feed: 120,
            dressing_yield_pct: 57.0,
            purchase_price_per_kg: 2.2,
            feed_cost_per_kg_drymatter: 0.26,
            sale_price_per_kg: 4.0,
        }
    }
}

impl ScenarioInputs {
    /// Read one input as a float.
    #[must_use]
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::KgPurchased => self.kg_purchased,
            InputField::DailyGain => self.daily_gain,
            InputField::FeedConversion => self.feed_conversion_ratio,
            InputField::DaysOnFeed => f64::from(self.days_on_feed),
            InputField::DressingYield => self.dressing_yield_pct,
            InputField::PurchasePrice => self.purchase_price_per_kg,
            InputField::FeedCost => self.feed_cost_per_kg_drymatter,
            InputField::SalePrice => self.sale_price_per_kg,
        }
    }

    /// Return a copy with one input replaced.
    ///
    /// Days on feed are whole days: the value is rounded and saturates at 0.
    #[must_use]
    pub fn with(&self, field: InputField, value: f64) -> Self {
        let mut next = *self;
        match field {
            InputField::KgPurchased => next.kg_purchased = value,
            InputField::DailyGain => next.daily_gain = value,
            InputField::FeedConversion => next.feed_conversion_ratio = value,
            InputField::DaysOnFeed => next.days_on_feed = value.round() as u32,
            InputField::DressingYield => next.dressing_yield_pct = value,
            InputField::PurchasePrice => next.purchase_price_per_kg = value,
            InputField::FeedCost => next.feed_cost_per_kg_drymatter = value,
            InputField::SalePrice => next.sale_price_per_kg = value,
        }
        next
    }

    /// Check the business invariants of every input.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in [`InputField::ALL`] order.
    pub fn validate(&self) -> Result<(), DomainError> {
        for field in InputField::ALL {
            let value = self.get(field);
            if !value.is_finite() {
                return Err(DomainError::NonFinite { field, value });
            }
            if value <= 0.0 {
                return Err(DomainError::NonPositive { field, value });
            }
        }
        if self.dressing_yield_pct > 100.0 {
            return Err(DomainError::YieldOutOfRange {
                value: self.dressing_yield_pct,
            });
        }
        Ok(())
    }
}

/// Selector for one of the scenario inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    KgPurchased,
    DailyGain,
    FeedConversion,
    DaysOnFeed,
    DressingYield,
    PurchasePrice,
    FeedCost,
    SalePrice,
}

impl InputField {
    /// All inputs in form order.
    pub const ALL: [Self; 8] = [
        Self::KgPurchased,
        Self::DailyGain,
        Self::FeedConversion,
        Self::DaysOnFeed,
        Self::DressingYield,
        Self::PurchasePrice,
        Self::FeedCost,
        Self::SalePrice,
    ];

    /// Short name used in sensitivity table labels.
    #[must_use]
    pub const fn axis_name(self) -> &'static str {
        match self {
            Self::KgPurchased => "Kg",
            Self::DailyGain => "ADPV",
            Self::FeedConversion => "Conv",
            Self::DaysOnFeed => "Días",
            Self::DressingYield => "Rend",
            Self::PurchasePrice => "Compra",
            Self::FeedCost => "Dieta",
            Self::SalePrice => "Venta",
        }
    }

    /// Form label shown when prompting for the input.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::KgPurchased => "Kg comprados",
            Self::DailyGain => "ADPV (Aumento Diario de Peso Vivo)",
            Self::FeedConversion => "Conversión en MS",
            Self::DaysOnFeed => "Días",
            Self::DressingYield => "Rendimiento 4ta balanza (%)",
            Self::PurchasePrice => "Precio Kg comprado puesto",
            Self::FeedCost => "Costo Kg dieta prom MS",
            Self::SalePrice => "Precio de venta en 4ta balanza",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::KgPurchased => "kg_purchased",
            Self::DailyGain => "daily_gain",
            Self::FeedConversion => "feed_conversion_ratio",
            Self::DaysOnFeed => "days_on_feed",
            Self::DressingYield => "dressing_yield_pct",
            Self::PurchasePrice => "purchase_price_per_kg",
            Self::FeedCost => "feed_cost_per_kg_drymatter",
            Self::SalePrice => "sale_price_per_kg",
        };
        f.write_str(name)
    }
}
