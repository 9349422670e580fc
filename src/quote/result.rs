// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Quote result types

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{FeatureCounts, LaborBreakdown, StockBlock};
use crate::geometry::BoundingBox;

/// Cost components and applied multipliers for one quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub coarse_milling_cost: f64,
    pub medium_milling_cost: f64,
    pub fine_milling_cost: f64,
    pub material_cost: f64,
    pub labor: LaborBreakdown,
    pub complexity_multiplier: f64,
    pub size_multiplier: f64,
    pub quantity_multiplier: f64,
    pub expedited_multiplier: f64,
    pub block: StockBlock,
    /// Stock block volume in mm³
    pub block_volume: f64,
    /// Waste fraction of the block relative to the part bbox
    pub waste_ratio: f64,
    pub coarse_volume: f64,
    pub medium_volume: f64,
    pub fine_volume: f64,
    /// Estimated spindle time across the milling phases
    pub spindle_secs: f64,
    pub expedited_description: Option<String>,
}

/// Final quote for a part at a given quantity
///
/// Immutable once produced; the CLI renders it and serializes it
/// without further computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub per_unit_cost: f64,
    /// per_unit_cost times quantity
    pub total_cost: f64,
    pub lead_time_days: u32,
    pub material_cost: f64,
    /// Machine time cost after complexity and size multipliers
    pub machine_time_cost: f64,
    pub bounding_box: BoundingBox,
    /// Part volume in mm³
    pub volume: f64,
    /// Part surface area in mm²
    pub surface_area: f64,
    pub complexity_score: f64,
    pub features: FeatureCounts,
    pub breakdown: CostBreakdown,
    pub expedited: bool,
    pub expedited_multiplier: f64,
}

impl QuoteResult {
    /// Expedite premium folded into the per-unit cost, if any
    pub fn expedited_premium(&self) -> Option<f64> {
        if self.expedited && self.expedited_multiplier > 1.0 {
            let base = self.per_unit_cost / self.expedited_multiplier;
            Some(base * (self.expedited_multiplier - 1.0))
        } else {
            None
        }
    }

    /// Flatten into the stable JSON shape consumed by downstream tools
    ///
    /// Bounding box and breakdown keys are part of the wire contract;
    /// field additions are allowed, renames are not.
    pub fn to_flat_json(&self) -> Value {
        let dims = self.bounding_box.dims();
        let labor = &self.breakdown.labor;

        json!({
            "per_unit_cost": self.per_unit_cost,
            "total_cost": self.total_cost,
            "material_cost": self.material_cost,
            "machine_time_cost": self.machine_time_cost,
            "lead_time_days": self.lead_time_days,
            "bounding_box": {
                "length": dims[0],
                "width": dims[1],
                "height": dims[2],
                "x_min": self.bounding_box.min.x,
                "y_min": self.bounding_box.min.y,
                "z_min": self.bounding_box.min.z,
                "x_max": self.bounding_box.max.x,
                "y_max": self.bounding_box.max.y,
                "z_max": self.bounding_box.max.z,
            },
            "volume": self.volume,
            "surface_area": self.surface_area,
            "complexity_score": self.complexity_score,
            "features": {
                "holes": self.features.holes,
                "cavities": self.features.cavities,
                "sharp_edges": self.features.sharp_edges,
                "pockets": self.features.pockets,
                "feature_score": self.features.feature_score,
            },
            "breakdown": {
                "coarse_milling_cost": self.breakdown.coarse_milling_cost,
                "medium_milling_cost": self.breakdown.medium_milling_cost,
                "fine_milling_cost": self.breakdown.fine_milling_cost,
                "material_cost": self.breakdown.material_cost,
                "labor_costs": {
                    "cad_cam_programming": labor.cad_cam_programming,
                    "machine_setup": labor.machine_setup,
                    "tool_setup": labor.tool_setup,
                    "quality_inspection": labor.quality_inspection,
                    "deburring_finishing": labor.deburring_finishing,
                    "project_management": labor.project_management,
                    "total_labor_cost": labor.total_cost,
                    "total_hours": labor.total_hours,
                },
                "total_labor_cost": labor.total_cost,
                "complexity_multiplier": self.breakdown.complexity_multiplier,
                "size_multiplier": self.breakdown.size_multiplier,
                "quantity_multiplier": self.breakdown.quantity_multiplier,
                "block_size": self.breakdown.block,
                "block_volume": self.breakdown.block_volume,
                "waste_ratio": self.breakdown.waste_ratio,
                "coarse_volume": self.breakdown.coarse_volume,
                "medium_volume": self.breakdown.medium_volume,
                "fine_volume": self.breakdown.fine_volume,
                "spindle_time_secs": self.breakdown.spindle_secs,
                "expedited_multiplier": self.breakdown.expedited_multiplier,
                "expedited_description": self.breakdown.expedited_description,
            },
        })
    }
}
