//! ShelfSense pricing core — price-sensitivity and promotion-impact
//! calculations behind a retail competitive-intelligence dashboard.
//!
//! The core is a set of pure, synchronous functions over an immutable
//! elasticity catalog:
//!   - `catalog`   resolves a coefficient for (category, subcategory, month)
//!   - `projector` projects units and revenue for a price change
//!   - `solver`    recommends the revenue-optimal discount
//!   - `sweep`     evaluates a scenario across a range of price changes
//!
//! `demo` fabricates deterministic sample scenarios for consumers;
//! nothing in the calculation modules depends on it.

pub mod catalog;
pub mod config;
pub mod demo;
pub mod error;
pub mod projector;
pub mod rng;
pub mod solver;
pub mod sweep;
pub mod types;

pub use catalog::{ElasticityCatalog, ResolutionLevel, ResolvedElasticity};
pub use config::PricingConfig;
pub use error::{PricingError, PricingResult};
pub use projector::{project_impact, ImpactProjection, PromotionScenario};
pub use solver::{
    optimal_discount, optimal_discount_capped, DiscountRecommendation, DEFAULT_DISCOUNT_CAP,
};
pub use sweep::{sweep_revenue_curve, SweepCurve, SweepRange};
pub use types::{Category, Month};
