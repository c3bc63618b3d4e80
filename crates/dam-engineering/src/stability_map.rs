// ─────────────────────────────────────────────────────────────────────
// Dam Performance Core — Stability Map
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use dam_types::{DamParameters, SafetyStatus};
use ndarray::{Array1, Array2};

use crate::performance::compute;
use crate::safety::classify;

/// Stability factor over a (water depth × bottom width) grid.
/// Rows follow water depth, columns follow bottom width.
#[derive(Debug, Clone)]
pub struct StabilityMap {
    pub bottom_widths: Array1<f64>, // [n_width]
    pub water_depths: Array1<f64>,  // [n_depth]
    pub factors: Array2<f64>,       // [n_depth, n_width]
}

/// Cell counts per safety class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub safe: usize,
    pub warning: usize,
    pub critical: usize,
}

impl StabilityMap {
    /// Each axis is `(min, max, points)`, spaced like `linspace`.
    pub fn new(
        base: &DamParameters,
        bottom_width: (f64, f64, usize),
        water_depth: (f64, f64, usize),
    ) -> Self {
        let bottom_widths = Array1::linspace(bottom_width.0, bottom_width.1, bottom_width.2);
        let water_depths = Array1::linspace(water_depth.0, water_depth.1, water_depth.2);

        let factors = Array2::from_shape_fn((water_depths.len(), bottom_widths.len()), |(i, j)| {
            let params = DamParameters {
                bottom_width: bottom_widths[j],
                water_depth: water_depths[i],
                ..*base
            };
            compute(&params).stability_factor
        });

        StabilityMap {
            bottom_widths,
            water_depths,
            factors,
        }
    }

    pub fn status_at(&self, depth_index: usize, width_index: usize) -> SafetyStatus {
        classify(self.factors[[depth_index, width_index]])
    }

    pub fn classify(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for &sf in self.factors.iter() {
            match classify(sf) {
                SafetyStatus::Safe => counts.safe += 1,
                SafetyStatus::Warning => counts.warning += 1,
                SafetyStatus::Critical => counts.critical += 1,
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_shape_and_axes() {
        let map = StabilityMap::new(&DamParameters::default(), (20.0, 80.0, 7), (5.0, 20.0, 4));
        assert_eq!(map.factors.shape(), &[4, 7]);
        assert!((map.bottom_widths[0] - 20.0).abs() < 1e-12);
        assert!((map.bottom_widths[6] - 80.0).abs() < 1e-12);
        assert!((map.water_depths[3] - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_map_monotone_along_both_axes() {
        let map = StabilityMap::new(&DamParameters::default(), (5.0, 60.0, 12), (5.0, 40.0, 8));
        let (nd, nw) = map.factors.dim();
        for i in 0..nd {
            for j in 1..nw {
                assert!(map.factors[[i, j]] >= map.factors[[i, j - 1]]);
            }
        }
        // Deeper water only adds overturning moment.
        for j in 0..nw {
            for i in 1..nd {
                assert!(map.factors[[i, j]] <= map.factors[[i - 1, j]]);
            }
        }
    }

    #[test]
    fn test_classify_counts_cover_grid() {
        let base = DamParameters {
            top_width: 5.0,
            height: 60.0,
            ..DamParameters::default()
        };
        let map = StabilityMap::new(&base, (5.0, 100.0, 10), (10.0, 60.0, 6));
        let counts = map.classify();
        assert_eq!(counts.safe + counts.warning + counts.critical, 60);
        assert!(counts.safe > 0);
        assert!(counts.critical > 0);
        assert_eq!(map.status_at(0, 9), SafetyStatus::Safe);
        assert_eq!(map.status_at(5, 0), SafetyStatus::Critical);
    }
}
