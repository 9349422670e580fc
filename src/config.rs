// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Calibration configuration system
//!
//! Every pricing knob lives here so a shop can retune rates without
//! touching estimation code. Values load from TOML and default to the
//! aluminum 6061 reference calibration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::quote::{ComplexityCategory, ExpediteTier, QuantityTier, SizeCategory, StockBlock};

/// Material density and pricing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialRates {
    /// Material density in g/cm³
    pub density_g_cm3: f64,
    /// Material price in $/kg
    pub price_per_kg: f64,
}

impl Default for MaterialRates {
    fn default() -> Self {
        Self {
            density_g_cm3: 2.7,
            price_per_kg: 5.0,
        }
    }
}

impl MaterialRates {
    /// Material cost for a part volume given in mm³
    pub fn cost_for_volume(&self, volume_mm3: f64) -> f64 {
        let volume_cm3 = volume_mm3 / 1000.0;
        let mass_kg = volume_cm3 * self.density_g_cm3 / 1000.0;
        mass_kg * self.price_per_kg
    }
}

/// Removal rates and volumetric costs for the three milling phases
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MillingRates {
    /// Coarse roughing removal rate in mm³/s
    pub coarse_rate_mm3_per_sec: f64,
    /// Medium finishing removal rate in mm³/s
    pub medium_rate_mm3_per_sec: f64,
    /// Fine detail removal rate in mm³/s
    pub fine_rate_mm3_per_sec: f64,
    /// Coarse roughing cost in $/mm³
    pub coarse_cost_per_mm3: f64,
    /// Medium finishing cost in $/mm³
    pub medium_cost_per_mm3: f64,
    /// Fine detail cost in $/mm³
    pub fine_cost_per_mm3: f64,
    /// Shrink-wrap envelope as a fraction of convex hull volume
    pub shrink_wrap_factor: f64,
}

impl Default for MillingRates {
    fn default() -> Self {
        Self {
            coarse_rate_mm3_per_sec: 350.0,
            medium_rate_mm3_per_sec: 100.0,
            fine_rate_mm3_per_sec: 20.0,
            coarse_cost_per_mm3: 0.00011,
            medium_cost_per_mm3: 0.00039,
            fine_cost_per_mm3: 0.00175,
            shrink_wrap_factor: 0.8,
        }
    }
}

/// Shop labor rates in $/h
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaborRates {
    /// CAD/CAM programming rate
    pub cad_cam_programming: f64,
    /// Machine setup rate
    pub machine_setup: f64,
    /// Tool setup rate
    pub tool_setup: f64,
    /// Quality inspection rate
    pub quality_inspection: f64,
    /// Deburring and finishing rate
    pub deburring_finishing: f64,
    /// Project management rate
    pub project_management: f64,
    /// Fixed setup allowance split across programming and setup, in hours
    pub base_setup_hours: f64,
}

impl Default for LaborRates {
    fn default() -> Self {
        Self {
            cad_cam_programming: 110.0,
            machine_setup: 65.0,
            tool_setup: 55.0,
            quality_inspection: 65.0,
            deburring_finishing: 45.0,
            project_management: 85.0,
            base_setup_hours: 0.4,
        }
    }
}

/// Multipliers, price floor, lead times and volume discounts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingRules {
    /// Minimum price per part in $
    pub min_price_per_part: f64,
    /// Multiplier for low-complexity parts
    pub complexity_low: f64,
    /// Multiplier for medium-complexity parts
    pub complexity_medium: f64,
    /// Multiplier for high-complexity parts
    pub complexity_high: f64,
    /// Multiplier for parts under 50 mm
    pub size_small: f64,
    /// Multiplier for parts between 50 and 200 mm
    pub size_medium: f64,
    /// Multiplier for parts over 200 mm
    pub size_large: f64,
    /// Expedite multiplier for five-day delivery
    pub expedite_five_day: f64,
    /// Expedite multiplier for four-day delivery
    pub expedite_four_day: f64,
    /// Expedite multiplier for three-day delivery
    pub expedite_three_day: f64,
    /// Standard lead time for simple parts, in business days
    pub lead_time_simple_days: u32,
    /// Standard lead time for medium parts, in business days
    pub lead_time_medium_days: u32,
    /// Standard lead time for complex parts, in business days
    pub lead_time_complex_days: u32,
    /// Volume discount control points, ascending by quantity
    pub quantity_tiers: Vec<QuantityTier>,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            min_price_per_part: 200.0,
            complexity_low: 0.85,
            complexity_medium: 1.0,
            complexity_high: 1.35,
            size_small: 1.15,
            size_medium: 1.0,
            size_large: 0.9,
            expedite_five_day: 1.3,
            expedite_four_day: 1.6,
            expedite_three_day: 2.0,
            lead_time_simple_days: 7,
            lead_time_medium_days: 10,
            lead_time_complex_days: 11,
            quantity_tiers: vec![
                QuantityTier::new(1, 1.0),
                QuantityTier::new(2, 0.95),
                QuantityTier::new(3, 0.92),
                QuantityTier::new(4, 0.90),
                QuantityTier::new(5, 0.88),
                QuantityTier::new(10, 0.85),
                QuantityTier::new(15, 0.82),
                QuantityTier::new(20, 0.80),
                QuantityTier::new(25, 0.78),
                QuantityTier::new(50, 0.75),
                QuantityTier::new(100, 0.72),
            ],
        }
    }
}

impl PricingRules {
    /// Machining multiplier for a complexity category
    pub fn complexity_multiplier(&self, category: ComplexityCategory) -> f64 {
        match category {
            ComplexityCategory::Low => self.complexity_low,
            ComplexityCategory::Medium => self.complexity_medium,
            ComplexityCategory::High => self.complexity_high,
        }
    }

    /// Machining multiplier for a size category
    pub fn size_multiplier(&self, category: SizeCategory) -> f64 {
        match category {
            SizeCategory::Small => self.size_small,
            SizeCategory::Medium => self.size_medium,
            SizeCategory::Large => self.size_large,
        }
    }

    /// Price multiplier for an expedite tier
    pub fn expedite_multiplier(&self, tier: ExpediteTier) -> f64 {
        match tier {
            ExpediteTier::FiveDay => self.expedite_five_day,
            ExpediteTier::FourDay => self.expedite_four_day,
            ExpediteTier::ThreeDay => self.expedite_three_day,
        }
    }
}

/// Available stock blocks, dimensions in mm
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockCatalog {
    /// Blocks as (length, width, height) triples in mm
    pub blocks: Vec<StockBlock>,
}

impl Default for StockCatalog {
    fn default() -> Self {
        Self {
            blocks: vec![
                StockBlock::new(25.0, 25.0, 25.0),
                StockBlock::new(50.0, 50.0, 50.0),
                StockBlock::new(75.0, 75.0, 75.0),
                StockBlock::new(100.0, 100.0, 100.0),
                StockBlock::new(125.0, 125.0, 125.0),
                StockBlock::new(150.0, 125.0, 125.0),
                StockBlock::new(150.0, 150.0, 150.0),
                StockBlock::new(175.0, 150.0, 150.0),
                StockBlock::new(200.0, 150.0, 150.0),
                StockBlock::new(200.0, 200.0, 150.0),
                StockBlock::new(200.0, 200.0, 200.0),
                StockBlock::new(250.0, 200.0, 200.0),
                StockBlock::new(250.0, 250.0, 200.0),
                StockBlock::new(250.0, 250.0, 250.0),
                StockBlock::new(300.0, 250.0, 250.0),
                StockBlock::new(300.0, 300.0, 250.0),
                StockBlock::new(300.0, 300.0, 300.0),
                StockBlock::new(400.0, 300.0, 300.0),
                StockBlock::new(400.0, 400.0, 300.0),
                StockBlock::new(500.0, 400.0, 400.0),
                StockBlock::new(600.0, 500.0, 500.0),
            ],
        }
    }
}

/// Full calibration for the quoting pipeline
///
/// Sections omitted from a loaded file fall back to the reference
/// calibration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalibrationConfig {
    /// Material density and pricing
    #[serde(default)]
    pub material: MaterialRates,
    /// Milling phase rates and costs
    #[serde(default)]
    pub milling: MillingRates,
    /// Shop labor rates
    #[serde(default)]
    pub labor: LaborRates,
    /// Multipliers, floors and lead times
    #[serde(default)]
    pub pricing: PricingRules,
    /// Stock block catalog
    #[serde(default)]
    pub stock: StockCatalog,
}

impl CalibrationConfig {
    /// Load calibration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read calibration file: {:?}", path.as_ref()))?;
        let config: CalibrationConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse calibration file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load calibration from the environment
    ///
    /// Checks `MILLQUOTE_CONFIG` first, then `millquote.toml` in the
    /// working directory, then falls back to the reference calibration.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var("MILLQUOTE_CONFIG") {
            return Self::from_file(path);
        }
        if PathBuf::from("millquote.toml").exists() {
            return Self::from_file("millquote.toml");
        }
        Ok(Self::default())
    }

    /// Save calibration to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize calibration")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write calibration file: {:?}", path.as_ref()))?;
        Ok(())
    }
}
