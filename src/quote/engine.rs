// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Quote pipeline

use crate::config::CalibrationConfig;
use crate::error::QuoteError;
use crate::geometry::{self, Mesh, PartGeometry};

use super::complexity::{self, SizeCategory};
use super::features;
use super::labor;
use super::milling;
use super::pricing::{self, ExpediteTier};
use super::result::{CostBreakdown, QuoteResult};
use super::stock;

/// Quantity and delivery options for one quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteRequest {
    pub quantity: u32,
    pub expedite: Option<ExpediteTier>,
}

impl Default for QuoteRequest {
    fn default() -> Self {
        Self {
            quantity: 1,
            expedite: None,
        }
    }
}

impl QuoteRequest {
    pub fn new(quantity: u32) -> Self {
        Self {
            quantity,
            expedite: None,
        }
    }

    pub fn with_expedite(mut self, tier: ExpediteTier) -> Self {
        self.expedite = Some(tier);
        self
    }
}

/// Stateless quoting pipeline driven by a calibration config
pub struct QuoteEngine {
    config: CalibrationConfig,
}

impl QuoteEngine {
    pub fn new() -> Self {
        Self {
            config: CalibrationConfig::default(),
        }
    }

    pub fn with_config(config: CalibrationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalibrationConfig {
        &self.config
    }

    /// Quote a part mesh at the requested quantity
    ///
    /// Single pass, no state carried between calls. The only hard
    /// failure is a part that fits no stock block; degenerate meshes
    /// flow through with degraded features and floor pricing.
    pub fn quote(&self, mesh: &Mesh, request: &QuoteRequest) -> Result<QuoteResult, QuoteError> {
        self.quote_geometry(&geometry::measure(mesh), request)
    }

    /// Quote from pre-measured geometry
    ///
    /// Entry point for callers that bring their own mesh pipeline and
    /// already hold the measurements.
    pub fn quote_geometry(
        &self,
        geometry: &PartGeometry,
        request: &QuoteRequest,
    ) -> Result<QuoteResult, QuoteError> {
        let features = features::detect(geometry);
        let complexity = complexity::score(geometry, &features);

        let selected = stock::select(&self.config.stock.blocks, &geometry.dims())?;
        let phases = milling::decompose(&self.config.milling, selected.volume, geometry);

        let complexity_multiplier = self
            .config
            .pricing
            .complexity_multiplier(complexity.category);
        let size_category = SizeCategory::from_longest_edge(geometry.bbox.longest_edge());
        let size_multiplier = self.config.pricing.size_multiplier(size_category);
        let machine_time_cost = phases.base_cost() * complexity_multiplier * size_multiplier;

        let material_cost = self.config.material.cost_for_volume(geometry.volume);
        let labor = labor::calculate(
            &self.config.labor,
            geometry.surface_area,
            complexity.score,
            request.quantity,
        );

        let quantity_multiplier =
            pricing::quantity_multiplier(&self.config.pricing.quantity_tiers, request.quantity);
        let mut per_unit_cost =
            (machine_time_cost + material_cost + labor.total_cost) * quantity_multiplier;

        // Price floor applies before any expedite premium
        if per_unit_cost < self.config.pricing.min_price_per_part {
            per_unit_cost = self.config.pricing.min_price_per_part;
        }

        let mut expedited_multiplier = 1.0;
        let mut expedited_description = None;
        let mut lead_time_days = pricing::standard_lead_time(&self.config.pricing, complexity.score);
        if let Some(tier) = request.expedite {
            expedited_multiplier = self.config.pricing.expedite_multiplier(tier);
            expedited_description = Some(tier.description().to_owned());
            per_unit_cost *= expedited_multiplier;
            lead_time_days = tier.days();
        }

        let total_cost = per_unit_cost * request.quantity as f64;

        Ok(QuoteResult {
            per_unit_cost,
            total_cost,
            lead_time_days,
            material_cost,
            machine_time_cost,
            bounding_box: geometry.bbox,
            volume: geometry.volume,
            surface_area: geometry.surface_area,
            complexity_score: complexity.score,
            features,
            breakdown: CostBreakdown {
                coarse_milling_cost: phases.coarse_cost,
                medium_milling_cost: phases.medium_cost,
                fine_milling_cost: phases.fine_cost,
                material_cost,
                labor,
                complexity_multiplier,
                size_multiplier,
                quantity_multiplier,
                expedited_multiplier,
                block: selected.block,
                block_volume: selected.volume,
                waste_ratio: selected.waste_ratio,
                coarse_volume: phases.coarse_volume,
                medium_volume: phases.medium_volume,
                fine_volume: phases.fine_volume,
                spindle_secs: phases.spindle_secs,
                expedited_description,
            },
            expedited: request.expedite.is_some(),
            expedited_multiplier,
        })
    }
}

impl Default for QuoteEngine {
    fn default() -> Self {
        Self::new()
    }
}
