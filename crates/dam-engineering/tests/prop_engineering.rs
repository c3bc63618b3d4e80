// ─────────────────────────────────────────────────────────────────────
// Dam Performance Core — Property-Based Tests (proptest) for dam-engineering
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for dam-engineering using proptest.
//!
//! Covers: positivity of geometric/load metrics, stability monotonicity in
//! bottom width, classification as a pure function of the stability factor,
//! zero-depth divisor guard, determinism, display rounding precision.

use dam_engineering::rounding::round_to;
use dam_engineering::{classify, compute, compute_detailed, rounded};
use dam_types::{DamParameters, SafetyStatus};
use proptest::prelude::*;

prop_compose! {
    fn valid_params()(
        top_width in 0.5f64..50.0,
        bottom_width in 0.5f64..200.0,
        height in 1.0f64..150.0,
        length in 1.0f64..1_000.0,
        reservoir_length in 1.0f64..10_000.0,
        water_depth in 0.1f64..150.0,
        flow_rate in 0.1f64..500.0,
        efficiency in 0.01f64..=1.0,
    ) -> DamParameters {
        DamParameters {
            top_width,
            bottom_width,
            height,
            length,
            reservoir_length,
            water_depth,
            flow_rate,
            efficiency,
        }
    }
}

// ── Calculator Invariants ────────────────────────────────────────────

proptest! {
    /// Positive input gives strictly positive geometry and load.
    #[test]
    fn positive_inputs_positive_metrics(params in valid_params()) {
        let r = compute(&params);
        prop_assert!(r.cross_sectional_area > 0.0);
        prop_assert!(r.dam_volume > 0.0);
        prop_assert!(r.concrete_needed > 0.0);
        prop_assert!(r.reservoir_volume > 0.0);
        prop_assert!(r.hydrostatic_force > 0.0);
        prop_assert!(r.stability_factor.is_finite());
    }

    /// Concrete includes exactly the 5% waste factor, actual power never
    /// exceeds theoretical power.
    #[test]
    fn derived_ratios_hold(params in valid_params()) {
        let r = compute(&params);
        prop_assert!((r.concrete_needed - 1.05 * r.dam_volume).abs() <= 1e-9 * r.concrete_needed);
        prop_assert!(r.actual_power <= r.theoretical_power);
        prop_assert_eq!(r.head_pressure, params.water_depth);
    }

    /// Widening the base never lowers the stability factor.
    #[test]
    fn stability_non_decreasing_in_bottom_width(
        params in valid_params(),
        extra in 0.0f64..100.0,
    ) {
        let wider = DamParameters { bottom_width: params.bottom_width + extra, ..params };
        let narrow_sf = compute(&params).stability_factor;
        let wide_sf = compute(&wider).stability_factor;
        prop_assert!(wide_sf >= narrow_sf * (1.0 - 1e-12),
            "b={} sf={} vs b={} sf={}", params.bottom_width, narrow_sf, wider.bottom_width, wide_sf);
    }

    /// The reported status is the classification of the reported factor.
    #[test]
    fn status_is_function_of_factor(params in valid_params()) {
        let r = compute(&params);
        prop_assert_eq!(r.safety_status, classify(r.stability_factor));
    }

    /// Zero water depth falls back to the restoring moment itself.
    #[test]
    fn zero_depth_guard(params in valid_params()) {
        let dry = DamParameters { water_depth: 0.0, ..params };
        let b = compute_detailed(&dry);
        prop_assert_eq!(b.results.overturning_moment, 0.0);
        prop_assert_eq!(b.results.stability_factor, b.restoring_moment);
        prop_assert!(!b.results.stability_factor.is_nan());
    }

    /// Recomputing from the same parameters is bit-for-bit identical.
    #[test]
    fn deterministic(params in valid_params()) {
        let a = compute(&params);
        let b = compute(&params);
        prop_assert_eq!(a.stability_factor.to_bits(), b.stability_factor.to_bits());
        prop_assert_eq!(a.annual_energy.to_bits(), b.annual_energy.to_bits());
        prop_assert_eq!(a, b);
    }
}

// ── Classification & Rounding ────────────────────────────────────────

proptest! {
    /// Thresholds partition the real line at 1.5 and 2.0.
    #[test]
    fn classification_thresholds(sf in -10.0f64..10.0) {
        let expected = if sf >= 2.0 {
            SafetyStatus::Safe
        } else if sf >= 1.5 {
            SafetyStatus::Warning
        } else {
            SafetyStatus::Critical
        };
        prop_assert_eq!(classify(sf), expected);
    }

    /// Display rounding moves each value by at most half a unit in the last place kept.
    #[test]
    fn rounding_precision(params in valid_params()) {
        let raw = compute(&params);
        let shown = rounded(&raw);
        prop_assert!((shown.dam_volume - raw.dam_volume).abs() <= 0.005 + 1e-9 * raw.dam_volume);
        prop_assert!((shown.actual_power - raw.actual_power).abs() <= 0.5 + 1e-9 * raw.actual_power);
        prop_assert!((shown.stability_factor - raw.stability_factor).abs() <= 0.005 + 1e-9 * raw.stability_factor);
        prop_assert_eq!(shown.safety_status, raw.safety_status);
        prop_assert_eq!(round_to(shown.stability_factor, 2), shown.stability_factor);
    }
}
