// ─────────────────────────────────────────────────────────────────────
// Dam Performance Core — Overturning Safety Classification
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Threshold classification of the overturning stability factor.

use dam_types::constants::{SAFE_STABILITY_FACTOR, WARNING_STABILITY_FACTOR};
use dam_types::SafetyStatus;

/// `>= 2.0` safe, `>= 1.5` warning, anything else (including NaN) critical.
pub fn classify(stability_factor: f64) -> SafetyStatus {
    if stability_factor >= SAFE_STABILITY_FACTOR {
        SafetyStatus::Safe
    } else if stability_factor >= WARNING_STABILITY_FACTOR {
        SafetyStatus::Warning
    } else {
        SafetyStatus::Critical
    }
}
