// ─────────────────────────────────────────────────────────────────────
// Dam Performance Core — Display Rounding
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Presentation rounding for result sets.
//!
//! Never feed a rounded result back into further computation; the safety
//! status is carried over from the unrounded factor.

use dam_types::DamResults;

/// Decimals for areas, volumes and head.
pub const GEOMETRY_DECIMALS: i32 = 2;

/// Decimals for forces, powers, energies and moments.
pub const LOAD_DECIMALS: i32 = 0;

/// Decimals for the stability factor.
pub const STABILITY_DECIMALS: i32 = 2;

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Display copy of a result set.
pub fn rounded(results: &DamResults) -> DamResults {
    let geo = |v| round_to(v, GEOMETRY_DECIMALS);
    let load = |v| round_to(v, LOAD_DECIMALS);

    DamResults {
        cross_sectional_area: geo(results.cross_sectional_area),
        dam_volume: geo(results.dam_volume),
        concrete_needed: geo(results.concrete_needed),
        reservoir_volume: geo(results.reservoir_volume),
        head_pressure: geo(results.head_pressure),
        theoretical_power: load(results.theoretical_power),
        actual_power: load(results.actual_power),
        annual_energy: load(results.annual_energy),
        hydrostatic_force: load(results.hydrostatic_force),
        overturning_moment: load(results.overturning_moment),
        stability_factor: round_to(results.stability_factor, STABILITY_DECIMALS),
        safety_status: results.safety_status,
    }
}
