//! Impact projector tests.

use shelfsense_core::{project_impact, PricingError, PromotionScenario};

/// A zero price change must reproduce the baseline exactly, whatever
/// the coefficient.
#[test]
fn zero_change_is_identity() {
    for elasticity in [-3.0, -0.78, -0.01, 1.2] {
        let scenario = PromotionScenario::new(29.99, 1000.0, 0.0);
        let p = project_impact(&scenario, elasticity).unwrap();

        assert_eq!(p.new_price, 29.99, "price must be unchanged at 0%");
        assert_eq!(p.projected_units, 1000.0, "units must be unchanged at 0%");
        assert_eq!(p.revenue_delta, 0.0, "delta must be zero at 0%");
        assert_eq!(p.revenue_delta_pct, Some(0.0));
    }
}

/// Reference scenario: $29.99, 1000 units, elasticity -0.78, 15% off.
#[test]
fn discount_scenario_matches_reference() {
    let scenario = PromotionScenario::new(29.99, 1000.0, -15.0);
    let p = project_impact(&scenario, -0.78).unwrap();

    assert!(
        (p.new_price - 25.4915).abs() < 1e-9,
        "new price should be $25.4915, got {}",
        p.new_price
    );
    assert!(
        (p.projected_units - 1117.0).abs() < 1e-6,
        "projected units should be 1117, got {}",
        p.projected_units
    );
    assert!(
        (p.projected_revenue - 28474.0055).abs() < 1e-2,
        "projected revenue should be ~$28474.01, got {}",
        p.projected_revenue
    );
    assert_eq!(p.baseline_revenue, 29.99 * 1000.0);
    assert!(
        (p.revenue_delta - (-1515.9945)).abs() < 1e-2,
        "revenue delta should be ~-$1515.99, got {}",
        p.revenue_delta
    );
}

/// Extreme elasticity x large increase drives the units multiplier
/// negative; demand floors at zero units, never negative.
#[test]
fn units_clamped_to_zero_on_negative_multiplier() {
    let scenario = PromotionScenario::new(10.0, 100.0, 60.0);
    let p = project_impact(&scenario, -3.0).unwrap();

    // multiplier = 1 + (-3.0)(0.6) = -0.8
    assert_eq!(p.projected_units, 0.0, "units must clamp to zero");
    assert_eq!(p.projected_revenue, 0.0);
    assert_eq!(p.revenue_delta, -1000.0);
}

/// With a negative coefficient, raising the price never raises
/// projected units.
#[test]
fn projected_units_non_increasing_in_price_change() {
    let mut previous = f64::INFINITY;
    for step in 0..=100 {
        let pct = -50.0 + step as f64;
        let scenario = PromotionScenario::new(19.99, 500.0, pct);
        let p = project_impact(&scenario, -1.2).unwrap();

        assert!(
            p.projected_units <= previous,
            "units increased from {previous} to {} at {pct}%",
            p.projected_units
        );
        previous = p.projected_units;
    }
}

#[test]
fn projected_units_never_negative() {
    for pct in [100.0, 200.0, 300.0, 1000.0] {
        let scenario = PromotionScenario::new(5.0, 10_000.0, pct);
        let p = project_impact(&scenario, -5.0).unwrap();
        assert!(
            p.projected_units >= 0.0,
            "units went negative at {pct}%: {}",
            p.projected_units
        );
    }
}

#[test]
fn zero_baseline_has_no_delta_pct() {
    let scenario = PromotionScenario::new(10.0, 0.0, -20.0);
    let p = project_impact(&scenario, -1.0).unwrap();

    assert_eq!(p.baseline_revenue, 0.0);
    assert_eq!(p.projected_units, 0.0);
    assert_eq!(
        p.revenue_delta_pct, None,
        "delta pct is undefined on a zero baseline"
    );
}

#[test]
fn delta_pct_matches_delta_over_baseline() {
    let scenario = PromotionScenario::new(29.99, 1000.0, -15.0);
    let p = project_impact(&scenario, -0.78).unwrap();

    let expected = p.revenue_delta / p.baseline_revenue * 100.0;
    let got = p.revenue_delta_pct.expect("baseline is non-zero");
    assert!((got - expected).abs() < 1e-12);
}

#[test]
fn rejects_nonpositive_price() {
    for price in [0.0, -1.0] {
        let scenario = PromotionScenario::new(price, 100.0, -10.0);
        let err = project_impact(&scenario, -1.0).unwrap_err();
        assert!(
            matches!(err, PricingError::InvalidInput { field: "base_price", .. }),
            "expected InvalidInput for price {price}, got {err}"
        );
    }
}

#[test]
fn rejects_negative_units() {
    let scenario = PromotionScenario::new(10.0, -5.0, -10.0);
    let err = project_impact(&scenario, -1.0).unwrap_err();
    assert!(matches!(
        err,
        PricingError::InvalidInput { field: "base_units", .. }
    ));
}

/// A change below -100% would mean a negative shelf price; rejected,
/// never coerced.
#[test]
fn rejects_change_below_minus_100() {
    let scenario = PromotionScenario::new(10.0, 100.0, -101.0);
    let err = project_impact(&scenario, -1.0).unwrap_err();
    assert!(matches!(
        err,
        PricingError::InvalidInput { field: "price_pct_change", .. }
    ));
}

#[test]
fn rejects_nonfinite_inputs() {
    let bad_price = PromotionScenario::new(f64::NAN, 100.0, -10.0);
    assert!(project_impact(&bad_price, -1.0).is_err());

    let bad_change = PromotionScenario::new(10.0, 100.0, f64::INFINITY);
    assert!(project_impact(&bad_change, -1.0).is_err());

    let scenario = PromotionScenario::new(10.0, 100.0, -10.0);
    let err = project_impact(&scenario, f64::NAN).unwrap_err();
    assert!(matches!(
        err,
        PricingError::InvalidInput { field: "elasticity", .. }
    ));
}
