// ─────────────────────────────────────────────────────────────────────
// Dam Performance Core — Design Scanner
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Design-space exploration on top of the performance calculator.
//!
//! Bottom-width sweeps, minimum safe base width by bisection, and Monte Carlo
//! sampling with a Pareto frontier on concrete volume vs. stability.

use std::ops::RangeInclusive;

use dam_types::constants::SAFE_STABILITY_FACTOR;
use dam_types::{DamParameters, DamResults, SafetyStatus};
use rand::Rng;

use crate::performance::compute;

/// Upper bound on bisection steps in [`minimum_safe_bottom_width`].
const MAX_BISECTION_STEPS: usize = 200;

/// Sampling attempts allowed per requested design.
const ATTEMPTS_PER_SAMPLE: usize = 10;

/// One evaluated point of a bottom-width sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub bottom_width: f64,
    pub results: DamResults,
}

/// Evaluate `steps` linearly spaced bottom widths from `min` to `max`.
pub fn sweep_bottom_width(
    base: &DamParameters,
    min: f64,
    max: f64,
    steps: usize,
) -> Vec<SweepPoint> {
    if steps == 0 {
        return Vec::new();
    }

    let dw = if steps > 1 {
        (max - min) / (steps as f64 - 1.0)
    } else {
        0.0
    };

    (0..steps)
        .map(|i| {
            let bottom_width = if i == steps - 1 && steps > 1 {
                max
            } else {
                min + dw * i as f64
            };
            let params = DamParameters {
                bottom_width,
                ..*base
            };
            SweepPoint {
                bottom_width,
                results: compute(&params),
            }
        })
        .collect()
}

fn stability_at(base: &DamParameters, bottom_width: f64) -> f64 {
    compute(&DamParameters {
        bottom_width,
        ..*base
    })
    .stability_factor
}

/// Smallest bottom width in `[min, max]` that reaches the safe threshold.
///
/// Relies on the stability factor being non-decreasing in bottom width.
/// Returns `None` for an empty interval or when even `max` is not safe
/// (a NaN factor counts as not safe).
pub fn minimum_safe_bottom_width(
    base: &DamParameters,
    min: f64,
    max: f64,
    tolerance: f64,
) -> Option<f64> {
    if min.is_nan() || max.is_nan() || min > max {
        return None;
    }
    let at_max = stability_at(base, max);
    if at_max.is_nan() || at_max < SAFE_STABILITY_FACTOR {
        return None;
    }
    if stability_at(base, min) >= SAFE_STABILITY_FACTOR {
        return Some(min);
    }

    let (mut lo, mut hi) = (min, max);
    for _ in 0..MAX_BISECTION_STEPS {
        if hi - lo <= tolerance {
            break;
        }
        let mid = 0.5 * (lo + hi);
        if stability_at(base, mid) >= SAFE_STABILITY_FACTOR {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    Some(hi)
}

/// Inclusive sampling range for every input parameter.
#[derive(Debug, Clone)]
pub struct DesignBounds {
    pub top_width: RangeInclusive<f64>,
    pub bottom_width: RangeInclusive<f64>,
    pub height: RangeInclusive<f64>,
    pub length: RangeInclusive<f64>,
    pub reservoir_length: RangeInclusive<f64>,
    pub water_depth: RangeInclusive<f64>,
    pub flow_rate: RangeInclusive<f64>,
    pub efficiency: RangeInclusive<f64>,
}

impl Default for DesignBounds {
    fn default() -> Self {
        DesignBounds {
            top_width: 4.0..=20.0,
            bottom_width: 10.0..=120.0,
            height: 10.0..=80.0,
            length: 50.0..=500.0,
            reservoir_length: 200.0..=5_000.0,
            water_depth: 5.0..=75.0,
            flow_rate: 5.0..=200.0,
            efficiency: 0.70..=0.95,
        }
    }
}

impl DesignBounds {
    fn ranges(&self) -> [(&'static str, &RangeInclusive<f64>); 8] {
        [
            ("topWidth", &self.top_width),
            ("bottomWidth", &self.bottom_width),
            ("height", &self.height),
            ("length", &self.length),
            ("reservoirLength", &self.reservoir_length),
            ("waterDepth", &self.water_depth),
            ("flowRate", &self.flow_rate),
            ("efficiency", &self.efficiency),
        ]
    }

    /// First range that cannot be sampled from: reversed, NaN or infinite.
    pub fn unsampleable(&self) -> Option<&'static str> {
        self.ranges()
            .into_iter()
            .find(|(_, r)| r.is_empty() || !r.start().is_finite() || !r.end().is_finite())
            .map(|(name, _)| name)
    }

    /// Draw one design uniformly inside the bounds.
    ///
    /// Panics on a range [`DesignBounds::unsampleable`] reports;
    /// [`sample_designs`] checks that first.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DamParameters {
        DamParameters {
            top_width: rng.gen_range(self.top_width.clone()),
            bottom_width: rng.gen_range(self.bottom_width.clone()),
            height: rng.gen_range(self.height.clone()),
            length: rng.gen_range(self.length.clone()),
            reservoir_length: rng.gen_range(self.reservoir_length.clone()),
            water_depth: rng.gen_range(self.water_depth.clone()),
            flow_rate: rng.gen_range(self.flow_rate.clone()),
            efficiency: rng.gen_range(self.efficiency.clone()),
        }
    }
}

/// A sampled design and its evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignSample {
    pub params: DamParameters,
    pub results: DamResults,
}

/// Draw up to `n_samples` valid designs, rejecting those that fail validation.
///
/// Bounds with an unsampleable range yield no designs.
pub fn sample_designs<R: Rng + ?Sized>(
    bounds: &DesignBounds,
    n_samples: usize,
    rng: &mut R,
) -> Vec<DesignSample> {
    if let Some(field) = bounds.unsampleable() {
        tracing::warn!(field, "design bounds range is empty or non-finite, nothing sampled");
        return Vec::new();
    }

    let mut samples = Vec::with_capacity(n_samples);
    let mut attempts = 0;
    while samples.len() < n_samples && attempts < n_samples * ATTEMPTS_PER_SAMPLE {
        attempts += 1;
        let params = bounds.sample(rng);
        if params.validate().is_err() {
            continue;
        }
        samples.push(DesignSample {
            params,
            results: compute(&params),
        });
    }

    tracing::debug!(
        requested = n_samples,
        accepted = samples.len(),
        attempts,
        "design sampling finished"
    );
    samples
}

/// Safe designs not dominated by another safe design with both less
/// concrete and a higher stability factor.
pub fn find_pareto_frontier(designs: &[DesignSample]) -> Vec<DesignSample> {
    let safe: Vec<&DesignSample> = designs
        .iter()
        .filter(|d| d.results.safety_status == SafetyStatus::Safe)
        .collect();

    let mut pareto = Vec::new();
    for d in &safe {
        let dominated = safe.iter().any(|other| {
            other.results.concrete_needed < d.results.concrete_needed
                && other.results.stability_factor > d.results.stability_factor
        });
        if !dominated {
            pareto.push(**d);
        }
    }

    pareto
}
