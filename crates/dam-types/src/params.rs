// ─────────────────────────────────────────────────────────────────────
// Dam Performance Core — Input Parameters
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::error::{DamError, DamResult};

/// Geometric and hydraulic description of a gravity dam section.
/// Field names serialize in camelCase to match stored simulation JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamParameters {
    /// Crest width [m].
    pub top_width: f64,
    /// Base width [m].
    pub bottom_width: f64,
    /// Dam height [m].
    pub height: f64,
    /// Crest length along the valley [m].
    pub length: f64,
    /// Upstream reservoir length [m].
    pub reservoir_length: f64,
    /// Water depth at the upstream face [m].
    pub water_depth: f64,
    /// Turbine flow rate [m³/s].
    pub flow_rate: f64,
    /// Turbine/generator efficiency, fraction in (0, 1].
    pub efficiency: f64,
}

impl Default for DamParameters {
    fn default() -> Self {
        DamParameters {
            top_width: 10.0,
            bottom_width: 50.0,
            height: 20.0,
            length: 200.0,
            reservoir_length: 500.0,
            water_depth: 20.0,
            flow_rate: 20.0,
            efficiency: 0.85,
        }
    }
}

impl DamParameters {
    /// Field names and values in declaration order.
    pub fn fields(&self) -> [(&'static str, f64); 8] {
        [
            ("topWidth", self.top_width),
            ("bottomWidth", self.bottom_width),
            ("height", self.height),
            ("length", self.length),
            ("reservoirLength", self.reservoir_length),
            ("waterDepth", self.water_depth),
            ("flowRate", self.flow_rate),
            ("efficiency", self.efficiency),
        ]
    }

    /// Reject non-finite or non-positive fields, and efficiency above 1.
    ///
    /// The first offending field in declaration order is reported.
    pub fn validate(&self) -> DamResult<()> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(DamError::InvalidParameter {
                    field,
                    value,
                    reason: "must be finite",
                });
            }
            if value <= 0.0 {
                return Err(DamError::InvalidParameter {
                    field,
                    value,
                    reason: "must be positive",
                });
            }
        }
        if self.efficiency > 1.0 {
            return Err(DamError::InvalidParameter {
                field: "efficiency",
                value: self.efficiency,
                reason: "must not exceed 1",
            });
        }
        Ok(())
    }

    /// Non-fatal observations about a parameter set that passes `validate`.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.water_depth > self.height {
            warnings.push(format!(
                "water depth {} m exceeds dam height {} m (overtopping)",
                self.water_depth, self.height
            ));
        }
        if self.top_width > self.bottom_width {
            warnings.push(format!(
                "top width {} m exceeds bottom width {} m (inverted section)",
                self.top_width, self.bottom_width
            ));
        }
        warnings
    }

    /// Load a parameter set from a JSON file.
    pub fn from_file(path: &str) -> DamResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&contents)?;
        Ok(params)
    }
}
