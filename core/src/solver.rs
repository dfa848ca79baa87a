//! Optimal-discount solver — the revenue-maximizing discount percentage
//! under a linear demand approximation.
//!
//! NOTE: the linear model here is intentionally not reconciled with the
//! constant-elasticity response used by the projector. The two disagree
//! for large discounts; consumers display both as-is.

use crate::error::{PricingError, PricingResult};
use serde::{Deserialize, Serialize};

/// Default ceiling on the recommended discount percentage.
pub const DEFAULT_DISCOUNT_CAP: f64 = 50.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountRecommendation {
    pub optimal_discount_pct: f64,
    pub cap: f64,
    pub elasticity: f64,
}

/// `optimal_discount` with the default cap of 50%.
pub fn optimal_discount(elasticity: f64) -> PricingResult<DiscountRecommendation> {
    optimal_discount_capped(elasticity, DEFAULT_DISCOUNT_CAP)
}

/// Revenue-maximizing discount: `min(cap, round(100 / |elasticity|))`.
///
/// Rounding to the nearest whole percentage happens before capping.
/// The result depends only on the coefficient, never on price or volume.
pub fn optimal_discount_capped(
    elasticity: f64,
    cap: f64,
) -> PricingResult<DiscountRecommendation> {
    if elasticity == 0.0 || !elasticity.is_finite() {
        return Err(PricingError::DegenerateElasticity);
    }
    if !cap.is_finite() || cap <= 0.0 {
        return Err(PricingError::InvalidInput {
            field: "cap",
            reason: "must be finite and positive",
            value: cap,
        });
    }

    let uncapped = (100.0 / elasticity.abs()).round();
    let optimal_discount_pct = uncapped.min(cap);

    Ok(DiscountRecommendation {
        optimal_discount_pct,
        cap,
        elasticity,
    })
}
