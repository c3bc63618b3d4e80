// ─────────────────────────────────────────────────────────────────────
// Dam Performance Core — Performance Calculator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Gravity dam performance: geometry, hydropower and overturning stability.
//!
//! Closed-form, single pass. No validation is performed here; invalid input
//! yields degenerate numbers rather than an error.

use dam_types::constants::{
    CONCRETE_DENSITY, CONCRETE_WASTE_FACTOR, GRAVITY, HOURS_PER_YEAR, WATER_DENSITY,
};
use dam_types::{DamParameters, DamResults};

use crate::safety::classify;

/// Full calculation including the stability intermediates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceBreakdown {
    pub results: DamResults,
    /// Self weight of the dam body [N].
    pub dam_weight: f64,
    /// Horizontal distance from the toe to the section centroid [m].
    pub centroid_from_toe: f64,
    /// Weight moment about the toe [N·m].
    pub restoring_moment: f64,
}

/// Compute the derived metrics for one parameter set.
pub fn compute(params: &DamParameters) -> DamResults {
    compute_detailed(params).results
}

/// Compute the derived metrics and keep the stability intermediates.
pub fn compute_detailed(params: &DamParameters) -> PerformanceBreakdown {
    let top = params.top_width;
    let bottom = params.bottom_width;
    let depth = params.water_depth;

    // Trapezoidal section
    let cross_sectional_area = (top + bottom) / 2.0 * params.height;
    let dam_volume = cross_sectional_area * params.length;
    let concrete_needed = dam_volume * CONCRETE_WASTE_FACTOR;
    let reservoir_volume = params.reservoir_length * params.length * depth;

    // Hydropower, with head taken as the water depth
    let head_pressure = depth;
    let theoretical_power = WATER_DENSITY * GRAVITY * params.flow_rate * head_pressure;
    let actual_power = theoretical_power * params.efficiency;
    let annual_energy = actual_power / 1000.0 * HOURS_PER_YEAR;

    // Triangular pressure distribution, resultant at depth/3 above the base
    let hydrostatic_force = 0.5 * WATER_DENSITY * GRAVITY * depth * depth * params.length;
    let overturning_moment = hydrostatic_force * depth / 3.0;

    let dam_weight = dam_volume * CONCRETE_DENSITY * GRAVITY;
    let centroid_from_toe = bottom * (bottom + 2.0 * top) / (3.0 * (top + bottom));
    let restoring_moment = dam_weight * centroid_from_toe;

    let divisor = if overturning_moment == 0.0 {
        1.0
    } else {
        overturning_moment
    };
    let stability_factor = restoring_moment / divisor;

    PerformanceBreakdown {
        results: DamResults {
            cross_sectional_area,
            dam_volume,
            concrete_needed,
            reservoir_volume,
            head_pressure,
            theoretical_power,
            actual_power,
            annual_energy,
            hydrostatic_force,
            overturning_moment,
            stability_factor,
            safety_status: classify(stability_factor),
        },
        dam_weight,
        centroid_from_toe,
        restoring_moment,
    }
}
