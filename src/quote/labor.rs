// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Labor cost model

use serde::{Deserialize, Serialize};

use crate::config::LaborRates;

/// Setup-hour split across programming, machine setup and tool setup
const CAD_CAM_SHARE: f64 = 0.4;
const MACHINE_SETUP_SHARE: f64 = 0.3;
const TOOL_SETUP_SHARE: f64 = 0.3;

/// Inspection and finishing hours per m² of part surface
const INSPECTION_HOURS_PER_M2: f64 = 0.5;
const FINISHING_HOURS_PER_M2: f64 = 0.3;
/// Floor applied to inspection and finishing hours
const MIN_HANDLING_HOURS: f64 = 0.1;

/// Project management hours independent of part size
const PROJECT_MGMT_BASE_HOURS: f64 = 0.2;

/// Per-category labor costs for a single part
///
/// Category costs are stored per part. `total_cost` folds the quantity
/// in: setup categories (programming, machine setup, tool setup,
/// project management) are charged once per job, inspection and
/// finishing once per unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaborBreakdown {
    pub cad_cam_programming: f64,
    pub machine_setup: f64,
    pub tool_setup: f64,
    pub quality_inspection: f64,
    pub deburring_finishing: f64,
    pub project_management: f64,
    /// Job total across the requested quantity
    pub total_cost: f64,
    /// Single-part hours across all six categories
    pub total_hours: f64,
}

fn complexity_factor(score: f64) -> f64 {
    if score < 3.0 {
        0.8
    } else if score < 7.0 {
        1.0
    } else {
        1.4
    }
}

/// Price the six labor categories for a job
pub fn calculate(
    rates: &LaborRates,
    surface_area_mm2: f64,
    complexity_score: f64,
    quantity: u32,
) -> LaborBreakdown {
    let factor = complexity_factor(complexity_score);

    let cad_cam_hours = rates.base_setup_hours * CAD_CAM_SHARE * factor;
    let machine_setup_hours = rates.base_setup_hours * MACHINE_SETUP_SHARE * factor;
    let tool_setup_hours = rates.base_setup_hours * TOOL_SETUP_SHARE * factor;

    let surface_area_m2 = surface_area_mm2 / 1_000_000.0;
    let inspection_hours =
        (surface_area_m2 * INSPECTION_HOURS_PER_M2).max(MIN_HANDLING_HOURS) * factor;
    let finishing_hours =
        (surface_area_m2 * FINISHING_HOURS_PER_M2).max(MIN_HANDLING_HOURS) * factor;

    let project_mgmt_hours = PROJECT_MGMT_BASE_HOURS + complexity_score / 20.0;

    let cad_cam_programming = cad_cam_hours * rates.cad_cam_programming;
    let machine_setup = machine_setup_hours * rates.machine_setup;
    let tool_setup = tool_setup_hours * rates.tool_setup;
    let quality_inspection = inspection_hours * rates.quality_inspection;
    let deburring_finishing = finishing_hours * rates.deburring_finishing;
    let project_management = project_mgmt_hours * rates.project_management;

    let one_time = cad_cam_programming + machine_setup + tool_setup + project_management;
    let per_part = quality_inspection + deburring_finishing;
    let total_cost = if quantity > 1 {
        one_time + per_part * quantity as f64
    } else {
        one_time + per_part
    };

    let total_hours = cad_cam_hours
        + machine_setup_hours
        + tool_setup_hours
        + inspection_hours
        + finishing_hours
        + project_mgmt_hours;

    LaborBreakdown {
        cad_cam_programming,
        machine_setup,
        tool_setup,
        quality_inspection,
        deburring_finishing,
        project_management,
        total_cost,
        total_hours,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_part_totals() {
        let rates = LaborRates::default();
        let labor = calculate(&rates, 30_000.0, 4.27, 1);

        assert_relative_eq!(labor.cad_cam_programming, 17.6, epsilon = 1e-9);
        assert_relative_eq!(labor.machine_setup, 7.8, epsilon = 1e-9);
        assert_relative_eq!(labor.tool_setup, 6.6, epsilon = 1e-9);
        assert_relative_eq!(labor.quality_inspection, 6.5, epsilon = 1e-9);
        assert_relative_eq!(labor.deburring_finishing, 4.5, epsilon = 1e-9);
        assert_relative_eq!(labor.project_management, 35.1475, epsilon = 1e-9);
        assert_relative_eq!(labor.total_cost, 78.1475, epsilon = 1e-9);
        assert_relative_eq!(labor.total_hours, 1.0135, epsilon = 1e-9);
    }

    #[test]
    fn test_quantity_charges_handling_per_unit() {
        let rates = LaborRates::default();
        let single = calculate(&rates, 30_000.0, 4.27, 1);
        let batch = calculate(&rates, 30_000.0, 4.27, 10);

        let one_time = single.cad_cam_programming
            + single.machine_setup
            + single.tool_setup
            + single.project_management;
        let per_part = single.quality_inspection + single.deburring_finishing;
        assert_relative_eq!(batch.total_cost, one_time + per_part * 10.0, epsilon = 1e-9);
        assert_relative_eq!(batch.total_cost, 177.1475, epsilon = 1e-9);

        // category costs and hours stay per part
        assert_relative_eq!(batch.quality_inspection, single.quality_inspection);
        assert_relative_eq!(batch.total_hours, single.total_hours);
    }

    #[test]
    fn test_complexity_factor_boundaries() {
        assert_eq!(complexity_factor(2.999), 0.8);
        assert_eq!(complexity_factor(3.0), 1.0);
        assert_eq!(complexity_factor(6.999), 1.0);
        assert_eq!(complexity_factor(7.0), 1.4);
    }

    #[test]
    fn test_handling_hours_floor() {
        let rates = LaborRates::default();
        let labor = calculate(&rates, 100.0, 1.0, 1);

        // 100 mm² is far below the 0.1h floor threshold
        assert_relative_eq!(
            labor.quality_inspection,
            0.1 * 0.8 * rates.quality_inspection,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            labor.deburring_finishing,
            0.1 * 0.8 * rates.deburring_finishing,
            epsilon = 1e-9
        );
    }
}
