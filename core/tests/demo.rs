//! Demo data provider tests — determinism and validity.

use shelfsense_core::{demo::DemoDataProvider, project_impact, ElasticityCatalog};

/// Identical seeds must produce identical scenario sequences.
#[test]
fn same_seed_same_scenarios() {
    let mut a = DemoDataProvider::new(0xD15C_0517);
    let mut b = DemoDataProvider::new(0xD15C_0517);

    assert_eq!(
        a.scenarios(25),
        b.scenarios(25),
        "demo generation must be deterministic per seed"
    );
}

#[test]
fn different_seeds_diverge() {
    let mut a = DemoDataProvider::new(1);
    let mut b = DemoDataProvider::new(2);

    assert_ne!(
        a.scenarios(10),
        b.scenarios(10),
        "different seeds should not replay the same batch"
    );
}

/// Every generated scenario must pass projector validation with a
/// coefficient resolved from the builtin catalog.
#[test]
fn generated_scenarios_always_project() {
    let catalog = ElasticityCatalog::builtin();
    let mut provider = DemoDataProvider::new(99);

    for scenario in provider.scenarios(200) {
        let category = scenario.category.expect("demo scenarios carry a category");
        let elasticity = catalog
            .resolve(category, scenario.subcategory.as_deref(), scenario.month)
            .unwrap();
        let projection = project_impact(&scenario, elasticity)
            .expect("generated scenarios must be valid projector input");

        assert!(projection.projected_units >= 0.0);
        assert!(projection.new_price >= 0.0);
    }
}

#[test]
fn generated_fields_stay_in_bounds() {
    let mut provider = DemoDataProvider::new(7);

    for scenario in provider.scenarios(200) {
        assert!(scenario.base_price > 0.0, "price must be positive");
        assert!(scenario.base_units >= 0.0, "units must be non-negative");
        assert!(
            (-50.0..=50.0).contains(&scenario.price_pct_change),
            "change {} outside the slider bounds",
            scenario.price_pct_change
        );
        assert_eq!(
            scenario.price_pct_change % 5.0,
            0.0,
            "change must sit on a 5% slider stop"
        );

        if let Some(sub) = &scenario.subcategory {
            let category = scenario.category.unwrap();
            assert!(
                category.has_subcategory(sub),
                "{sub} is not a subcategory of {category}"
            );
        }
    }
}
