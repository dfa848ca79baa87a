//! Demo data provider — fabricates plausible promotion scenarios for
//! demos, walkthroughs, and tests.
//!
//! This is the explicit stand-in for a dashboard's mock-data layer:
//! injected at the consumer boundary, never imported by the calculation
//! modules. Generation is fully deterministic per seed.

use crate::{
    projector::PromotionScenario,
    rng::{DemoRng, DemoStream},
    types::{Category, Month},
};

/// Per-category price shape: Pareto minimum and tail exponent.
/// Units are drawn uniformly from [units_lo, units_hi).
struct CategoryShape {
    price_xmin: f64,
    price_alpha: f64,
    units_lo: u64,
    units_hi: u64,
}

fn shape_for(category: Category) -> CategoryShape {
    match category {
        Category::Baby => CategoryShape {
            price_xmin: 8.0,
            price_alpha: 1.6,
            units_lo: 400,
            units_hi: 6_000,
        },
        Category::Books => CategoryShape {
            price_xmin: 10.0,
            price_alpha: 2.2,
            units_lo: 200,
            units_hi: 3_000,
        },
        Category::ToolsHome => CategoryShape {
            price_xmin: 25.0,
            price_alpha: 1.5,
            units_lo: 100,
            units_hi: 1_500,
        },
        Category::Electronics => CategoryShape {
            price_xmin: 60.0,
            price_alpha: 1.3,
            units_lo: 50,
            units_hi: 800,
        },
        Category::Grocery => CategoryShape {
            price_xmin: 2.5,
            price_alpha: 2.5,
            units_lo: 2_000,
            units_hi: 20_000,
        },
        Category::Apparel => CategoryShape {
            price_xmin: 15.0,
            price_alpha: 1.8,
            units_lo: 300,
            units_hi: 4_000,
        },
    }
}

pub struct DemoDataProvider {
    price_rng: DemoRng,
    units_rng: DemoRng,
    change_rng: DemoRng,
    pick_rng: DemoRng,
}

impl DemoDataProvider {
    pub fn new(seed: u64) -> Self {
        Self {
            price_rng: DemoRng::new(seed, DemoStream::Price),
            units_rng: DemoRng::new(seed, DemoStream::Units),
            change_rng: DemoRng::new(seed, DemoStream::Change),
            pick_rng: DemoRng::new(seed, DemoStream::Pick),
        }
    }

    /// A plausible scenario for `category`. Always passes projector
    /// validation: positive finite price, non-negative units, change a
    /// multiple of 5 within the slider bounds [-50, 50].
    pub fn scenario_for(&mut self, category: Category) -> PromotionScenario {
        let shape = shape_for(category);

        // Pareto gives a long but bounded tail of shelf prices.
        let raw_price = self
            .price_rng
            .pareto(shape.price_xmin, shape.price_alpha)
            .min(shape.price_xmin * 50.0);
        let base_price = round_cents(raw_price);

        let span = shape.units_hi - shape.units_lo;
        let base_units = (shape.units_lo + self.units_rng.next_u64_below(span)) as f64;

        // 21 slider stops: -50, -45, .. , +50.
        let stop = self.change_rng.next_u64_below(21) as f64;
        let price_pct_change = -50.0 + stop * 5.0;

        let mut scenario = PromotionScenario::new(base_price, base_units, price_pct_change)
            .with_category(category);

        let subcategories = category.subcategories();
        if self.pick_rng.chance(0.6) {
            let idx = self.pick_rng.next_u64_below(subcategories.len() as u64);
            scenario = scenario.with_subcategory(subcategories[idx as usize]);
        }
        if self.pick_rng.chance(0.5) {
            let month_number = 1 + self.pick_rng.next_u64_below(12) as u8;
            if let Ok(month) = Month::new(month_number) {
                scenario = scenario.with_month(month);
            }
        }

        scenario
    }

    /// A scenario in a category picked uniformly at random.
    pub fn scenario(&mut self) -> PromotionScenario {
        let idx = self.pick_rng.next_u64_below(Category::ALL.len() as u64);
        self.scenario_for(Category::ALL[idx as usize])
    }

    pub fn scenarios(&mut self, n: usize) -> Vec<PromotionScenario> {
        (0..n).map(|_| self.scenario()).collect()
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
