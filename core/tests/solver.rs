//! Optimal-discount solver tests.

use shelfsense_core::{
    optimal_discount, optimal_discount_capped, ElasticityCatalog, Month, PricingError,
    DEFAULT_DISCOUNT_CAP,
};

/// Baby products (base -0.27): 100/0.27 rounds to 370, capped at 50.
#[test]
fn low_sensitivity_coefficient_capped_at_default() {
    let rec = optimal_discount(-0.27).unwrap();
    assert_eq!(rec.optimal_discount_pct, 50.0);
    assert_eq!(rec.cap, DEFAULT_DISCOUNT_CAP);
}

/// Tools & Home April peak (-2.20): round(100/2.20) = 45, below cap.
#[test]
fn april_peak_coefficient_uncapped() {
    let rec = optimal_discount(-2.20).unwrap();
    assert_eq!(rec.optimal_discount_pct, 45.0);
}

/// Rounding to a whole percentage happens before capping.
#[test]
fn rounds_to_nearest_whole_percentage() {
    // 100/2.1 = 47.62 -> 48
    assert_eq!(optimal_discount(-2.1).unwrap().optimal_discount_pct, 48.0);
    // 100/1.9 = 52.63 -> 53 -> capped to 50
    assert_eq!(optimal_discount(-1.9).unwrap().optimal_discount_pct, 50.0);
}

#[test]
fn custom_cap_applies() {
    let rec = optimal_discount_capped(-2.20, 40.0).unwrap();
    assert_eq!(rec.optimal_discount_pct, 40.0, "45 must cap to 40");
    assert_eq!(rec.cap, 40.0);
}

/// The sign of the coefficient does not matter: the formula uses its
/// magnitude.
#[test]
fn magnitude_drives_the_recommendation() {
    let negative = optimal_discount(-2.5).unwrap();
    let positive = optimal_discount(2.5).unwrap();
    assert_eq!(
        negative.optimal_discount_pct,
        positive.optimal_discount_pct
    );
}

#[test]
fn zero_elasticity_is_degenerate() {
    let err = optimal_discount(0.0).unwrap_err();
    assert!(matches!(err, PricingError::DegenerateElasticity));
}

#[test]
fn nonfinite_elasticity_is_degenerate() {
    for e in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = optimal_discount(e).unwrap_err();
        assert!(
            matches!(err, PricingError::DegenerateElasticity),
            "expected DegenerateElasticity for {e}"
        );
    }
}

#[test]
fn invalid_cap_rejected() {
    for cap in [0.0, -5.0, f64::NAN] {
        let err = optimal_discount_capped(-1.5, cap).unwrap_err();
        assert!(
            matches!(err, PricingError::InvalidInput { field: "cap", .. }),
            "expected InvalidInput for cap {cap}"
        );
    }
}

/// Every coefficient the builtin catalog can resolve must produce a
/// recommendation inside [0, cap].
#[test]
fn recommendation_bounded_for_all_catalog_coefficients() {
    let catalog = ElasticityCatalog::builtin();

    for category in catalog.categories() {
        let mut keys: Vec<Option<&str>> = vec![None];
        keys.extend(category.subcategories().iter().map(|s| Some(*s)));

        for subcategory in keys {
            for month_number in 1..=12u8 {
                let month = Month::new(month_number).unwrap();
                let e = catalog.resolve(category, subcategory, Some(month)).unwrap();
                let rec = optimal_discount(e).unwrap();
                assert!(
                    (0.0..=DEFAULT_DISCOUNT_CAP).contains(&rec.optimal_discount_pct),
                    "{category}/{subcategory:?}/{month_number}: {} out of bounds",
                    rec.optimal_discount_pct
                );
            }
        }
    }
}
