// ─────────────────────────────────────────────────────────────────────
// Dam Performance Core — Result Metrics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

/// Three-way overturning safety classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyStatus {
    Safe,
    Warning,
    Critical,
}

impl SafetyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyStatus::Safe => "safe",
            SafetyStatus::Warning => "warning",
            SafetyStatus::Critical => "critical",
        }
    }
}

impl std::fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Derived performance metrics for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamResults {
    /// Trapezoidal cross-section [m²].
    pub cross_sectional_area: f64,
    /// Dam body volume [m³].
    pub dam_volume: f64,
    /// Concrete to order including waste [m³].
    pub concrete_needed: f64,
    /// Impounded water volume [m³].
    pub reservoir_volume: f64,
    /// Hydraulic head, taken equal to water depth [m].
    pub head_pressure: f64,
    /// Hydraulic power before losses [W].
    pub theoretical_power: f64,
    /// Electrical power after efficiency [W].
    pub actual_power: f64,
    /// Energy delivered per year [kWh].
    pub annual_energy: f64,
    /// Resultant water thrust on the upstream face [N].
    pub hydrostatic_force: f64,
    /// Water thrust moment about the toe [N·m].
    pub overturning_moment: f64,
    /// Restoring / overturning moment [-].
    pub stability_factor: f64,
    pub safety_status: SafetyStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safety_status_serializes_lowercase() {
        let json = serde_json::to_string(&SafetyStatus::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let back: SafetyStatus = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(back, SafetyStatus::Critical);
    }
}
