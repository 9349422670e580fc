// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Three-phase volumetric milling model

use serde::{Deserialize, Serialize};

use crate::config::MillingRates;
use crate::geometry::PartGeometry;

/// Removal volumes and costs for the coarse/medium/fine phases
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MillingPhases {
    /// Block-to-hull removal in mm³
    pub coarse_volume: f64,
    /// Hull-to-near-net removal in mm³
    pub medium_volume: f64,
    /// Near-net-to-part removal in mm³
    pub fine_volume: f64,
    pub coarse_cost: f64,
    pub medium_cost: f64,
    pub fine_cost: f64,
    /// Estimated spindle time across all phases
    pub spindle_secs: f64,
}

impl MillingPhases {
    /// Machine time cost before complexity and size multipliers
    pub fn base_cost(&self) -> f64 {
        self.coarse_cost + self.medium_cost + self.fine_cost
    }
}

/// Decompose the removal from stock block to finished part
///
/// The shrink-wrap volume stands in for a tight offset surface and is a
/// fixed fraction of the convex hull. Negative phase volumes collapse
/// to zero when the approximations overlap.
pub fn decompose(rates: &MillingRates, block_volume: f64, geometry: &PartGeometry) -> MillingPhases {
    let hull_volume = geometry.hull_volume;
    let shrink_volume = hull_volume * rates.shrink_wrap_factor;

    let coarse_volume = (block_volume - hull_volume).max(0.0);
    let medium_volume = (hull_volume - shrink_volume).max(0.0);
    let fine_volume = (shrink_volume - geometry.volume).max(0.0);

    let phase_secs = |volume: f64, rate: f64| -> f64 {
        if rate > 0.0 {
            volume / rate
        } else {
            0.0
        }
    };
    let spindle_secs = phase_secs(coarse_volume, rates.coarse_rate_mm3_per_sec)
        + phase_secs(medium_volume, rates.medium_rate_mm3_per_sec)
        + phase_secs(fine_volume, rates.fine_rate_mm3_per_sec);

    MillingPhases {
        coarse_volume,
        medium_volume,
        fine_volume,
        coarse_cost: coarse_volume * rates.coarse_cost_per_mm3,
        medium_cost: medium_volume * rates.medium_cost_per_mm3,
        fine_cost: fine_volume * rates.fine_cost_per_mm3,
        spindle_secs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoundingBox;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    fn flat_plate() -> PartGeometry {
        PartGeometry {
            bbox: BoundingBox::new(Point3::origin(), Point3::new(100.0, 80.0, 20.0)),
            volume: 150_000.0,
            surface_area: 30_000.0,
            hull_volume: 160_000.0,
            face_count: 500,
            edge_count: 1500,
        }
    }

    #[test]
    fn test_three_phase_decomposition() {
        let rates = MillingRates::default();
        let phases = decompose(&rates, 750_000.0, &flat_plate());

        assert_relative_eq!(phases.coarse_volume, 590_000.0);
        assert_relative_eq!(phases.medium_volume, 32_000.0);
        // shrink wrap (128k) sits below the part volume, so fine clamps
        assert_relative_eq!(phases.fine_volume, 0.0);
        assert_relative_eq!(phases.base_cost(), 77.38, epsilon = 1e-9);
    }

    #[test]
    fn test_spindle_time_sums_phases() {
        let rates = MillingRates::default();
        let phases = decompose(&rates, 750_000.0, &flat_plate());

        let expected = 590_000.0 / 350.0 + 32_000.0 / 100.0;
        assert_relative_eq!(phases.spindle_secs, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_block_smaller_than_hull_clamps_coarse() {
        let rates = MillingRates::default();
        let mut geometry = flat_plate();
        geometry.hull_volume = 900_000.0;
        let phases = decompose(&rates, 750_000.0, &geometry);

        assert_eq!(phases.coarse_volume, 0.0);
        assert!(phases.medium_volume > 0.0);
        assert!(phases.fine_volume > 0.0);
    }

    #[test]
    fn test_zero_rates_give_zero_spindle_time() {
        let rates = MillingRates {
            coarse_rate_mm3_per_sec: 0.0,
            medium_rate_mm3_per_sec: 0.0,
            fine_rate_mm3_per_sec: 0.0,
            ..MillingRates::default()
        };
        let phases = decompose(&rates, 750_000.0, &flat_plate());

        assert_eq!(phases.spindle_secs, 0.0);
    }
}
