//! Impact projector — projects the effect of a price change on units
//! sold and revenue under a constant-elasticity demand response.
//!
//! Pure and deterministic: identical inputs always produce identical
//! projections. Validation rejects bad inputs instead of coercing them;
//! the caller decides how to surface the error.

use crate::{
    error::{PricingError, PricingResult},
    types::{Category, Month},
};
use serde::{Deserialize, Serialize};

/// One calculation request: current price and volume plus the proposed
/// percentage price change. Negative change = discount.
///
/// `category`, `subcategory`, and `month` are carried for coefficient
/// resolution and reporting; the projection itself only needs the
/// numeric fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionScenario {
    pub base_price: f64,
    pub base_units: f64,
    pub price_pct_change: f64,
    pub category: Option<Category>,
    pub subcategory: Option<String>,
    pub month: Option<Month>,
}

impl PromotionScenario {
    pub fn new(base_price: f64, base_units: f64, price_pct_change: f64) -> Self {
        Self {
            base_price,
            base_units,
            price_pct_change,
            category: None,
            subcategory: None,
            month: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    pub fn with_month(mut self, month: Month) -> Self {
        self.month = Some(month);
        self
    }

    /// Same scenario at a different price change. Used by the sweep.
    pub fn at_pct_change(&self, price_pct_change: f64) -> Self {
        Self {
            price_pct_change,
            ..self.clone()
        }
    }
}

/// The projected outcome of a scenario at one price point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactProjection {
    pub price_pct_change: f64,
    pub elasticity: f64,
    pub new_price: f64,
    pub projected_units: f64,
    pub projected_revenue: f64,
    pub baseline_revenue: f64,
    pub revenue_delta: f64,
    /// None when baseline revenue is zero (no meaningful percentage).
    pub revenue_delta_pct: Option<f64>,
}

/// Project units and revenue for `scenario` under `elasticity`.
///
/// Steps, in order:
///   pct              = price_pct_change / 100
///   new_price        = base_price * (1 + pct)
///   units_multiplier = 1 + elasticity * pct
///   projected_units  = max(0, base_units * units_multiplier)
///   projected_revenue = projected_units * new_price
///   revenue_delta    = projected_revenue - base_units * base_price
pub fn project_impact(
    scenario: &PromotionScenario,
    elasticity: f64,
) -> PricingResult<ImpactProjection> {
    validate_scenario(scenario)?;
    if !elasticity.is_finite() {
        return Err(PricingError::InvalidInput {
            field: "elasticity",
            reason: "must be finite",
            value: elasticity,
        });
    }

    let pct = scenario.price_pct_change / 100.0;
    let new_price = scenario.base_price * (1.0 + pct);
    let units_multiplier = 1.0 + elasticity * pct;

    // A strongly negative coefficient times a large price increase can
    // push the multiplier below zero. Demand floors at zero units; the
    // clamp is policy, not a rounding artifact.
    let projected_units = (scenario.base_units * units_multiplier).max(0.0);

    let projected_revenue = projected_units * new_price;
    let baseline_revenue = scenario.base_units * scenario.base_price;
    let revenue_delta = projected_revenue - baseline_revenue;
    let revenue_delta_pct = if baseline_revenue == 0.0 {
        None
    } else {
        Some(revenue_delta / baseline_revenue * 100.0)
    };

    Ok(ImpactProjection {
        price_pct_change: scenario.price_pct_change,
        elasticity,
        new_price,
        projected_units,
        projected_revenue,
        baseline_revenue,
        revenue_delta,
        revenue_delta_pct,
    })
}

fn validate_scenario(scenario: &PromotionScenario) -> PricingResult<()> {
    let checks: [(&'static str, f64, bool, &'static str); 3] = [
        (
            "base_price",
            scenario.base_price,
            scenario.base_price.is_finite() && scenario.base_price > 0.0,
            "must be finite and positive",
        ),
        (
            "base_units",
            scenario.base_units,
            scenario.base_units.is_finite() && scenario.base_units >= 0.0,
            "must be finite and non-negative",
        ),
        (
            "price_pct_change",
            scenario.price_pct_change,
            scenario.price_pct_change.is_finite() && scenario.price_pct_change >= -100.0,
            "must be finite and >= -100 (price cannot go below zero)",
        ),
    ];

    for (field, value, ok, reason) in checks {
        if !ok {
            log::warn!("projector: rejected {field}={value}: {reason}");
            return Err(PricingError::InvalidInput {
                field,
                reason,
                value,
            });
        }
    }
    Ok(())
}
