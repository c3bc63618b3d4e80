// ─────────────────────────────────────────────────────────────────────
// Dam Performance Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Gravitational acceleration (m/s²)
pub const GRAVITY: f64 = 9.81;

/// Fresh water density (kg/m³)
pub const WATER_DENSITY: f64 = 1000.0;

/// Mass concrete density (kg/m³)
pub const CONCRETE_DENSITY: f64 = 2400.0;

/// Hours in a (non-leap) year, used for annual energy.
pub const HOURS_PER_YEAR: f64 = 8760.0;

/// Concrete ordered per cubic metre of dam body (5% waste).
pub const CONCRETE_WASTE_FACTOR: f64 = 1.05;

/// Stability factor at or above which a section is classified safe.
pub const SAFE_STABILITY_FACTOR: f64 = 2.0;

/// Stability factor at or above which a section is classified warning.
pub const WARNING_STABILITY_FACTOR: f64 = 1.5;
