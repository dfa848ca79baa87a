//! Revenue sweep — evaluates a scenario across a range of price changes
//! to feed chart series (revenue-change curves) in a consuming UI.
//!
//! Each swept point is an independent projector call; the sweep adds no
//! model of its own.

use crate::{
    error::{PricingError, PricingResult},
    projector::{project_impact, ImpactProjection, PromotionScenario},
};
use serde::{Deserialize, Serialize};

/// Inclusive sweep bounds in whole percentage points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SweepRange {
    pub start_pct: f64,
    pub end_pct: f64,
    pub step_pct: f64,
}

impl Default for SweepRange {
    /// The dashboard slider's conventional bounds.
    fn default() -> Self {
        Self {
            start_pct: -50.0,
            end_pct: 50.0,
            step_pct: 5.0,
        }
    }
}

impl SweepRange {
    pub fn validate(&self) -> PricingResult<()> {
        let checks: [(&'static str, f64, bool, &'static str); 3] = [
            (
                "start_pct",
                self.start_pct,
                self.start_pct.is_finite() && self.start_pct >= -100.0,
                "must be finite and >= -100",
            ),
            (
                "end_pct",
                self.end_pct,
                self.end_pct.is_finite() && self.end_pct >= self.start_pct,
                "must be finite and >= start_pct",
            ),
            (
                "step_pct",
                self.step_pct,
                self.step_pct.is_finite() && self.step_pct > 0.0,
                "must be finite and positive",
            ),
        ];
        for (field, value, ok, reason) in checks {
            if !ok {
                return Err(PricingError::InvalidInput {
                    field,
                    reason,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// A swept revenue curve: one projection per price point, ascending.
#[derive(Debug, Clone, Serialize)]
pub struct SweepCurve {
    pub elasticity: f64,
    pub points: Vec<ImpactProjection>,
}

impl SweepCurve {
    /// The swept point with the highest projected revenue.
    /// Ties keep the earliest (most negative) swept change.
    pub fn revenue_optimal_point(&self) -> Option<&ImpactProjection> {
        let mut best: Option<&ImpactProjection> = None;
        for point in &self.points {
            match best {
                Some(b) if point.projected_revenue <= b.projected_revenue => {}
                _ => best = Some(point),
            }
        }
        best
    }
}

/// Sweep `scenario` from `start_pct` to `end_pct` inclusive.
///
/// Points are generated as `start + i * step` rather than by repeated
/// addition, so long sweeps do not accumulate float drift.
pub fn sweep_revenue_curve(
    scenario: &PromotionScenario,
    elasticity: f64,
    range: &SweepRange,
) -> PricingResult<SweepCurve> {
    range.validate()?;

    let mut points = Vec::new();
    let mut i = 0u32;
    loop {
        let pct = range.start_pct + range.step_pct * f64::from(i);
        if pct > range.end_pct + 1e-9 {
            break;
        }
        points.push(project_impact(&scenario.at_pct_change(pct), elasticity)?);
        i += 1;
    }

    log::debug!(
        "sweep: {} points over [{}, {}] step {}",
        points.len(),
        range.start_pct,
        range.end_pct,
        range.step_pct
    );

    Ok(SweepCurve { elasticity, points })
}
