// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Quantity discounts, expedite tiers and lead time

use serde::{Deserialize, Serialize};

use crate::config::PricingRules;
use crate::utils::math::lerp;

/// Quantity at or above which the deepest discount always applies
const BULK_QUANTITY: u32 = 5000;
/// Complexity score below which the simple-part lead time applies
const SIMPLE_SCORE_LIMIT: f64 = 5.0;
/// Complexity score below which the medium-part lead time applies
const MEDIUM_SCORE_LIMIT: f64 = 8.0;

/// One control point of the volume discount curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantityTier {
    /// Quantity at this control point
    pub quantity: u32,
    /// Price multiplier at this control point
    pub multiplier: f64,
}

impl QuantityTier {
    pub const fn new(quantity: u32, multiplier: f64) -> Self {
        Self {
            quantity,
            multiplier,
        }
    }
}

/// Expedited delivery tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpediteTier {
    FiveDay,
    FourDay,
    ThreeDay,
}

impl ExpediteTier {
    /// Parse a request string such as `5_days`
    ///
    /// Unknown strings mean standard delivery, never an error.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "5_days" => Some(Self::FiveDay),
            "4_days" => Some(Self::FourDay),
            "3_days" => Some(Self::ThreeDay),
            _ => None,
        }
    }

    /// Wire name of the tier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FiveDay => "5_days",
            Self::FourDay => "4_days",
            Self::ThreeDay => "3_days",
        }
    }

    /// Guaranteed lead time in business days
    pub fn days(&self) -> u32 {
        match self {
            Self::FiveDay => 5,
            Self::FourDay => 4,
            Self::ThreeDay => 3,
        }
    }

    /// Human-readable delivery promise
    pub fn description(&self) -> &'static str {
        match self {
            Self::FiveDay => "5 business days",
            Self::FourDay => "4 business days",
            Self::ThreeDay => "3 business days",
        }
    }
}

/// Volume discount multiplier for a quantity
///
/// Linearly interpolates between adjacent control points. Below quantity
/// 1 the first multiplier applies; at or above [`BULK_QUANTITY`] the last
/// one does. Quantities past the last control point but under the bulk
/// cutoff take the first multiplier.
pub fn quantity_multiplier(tiers: &[QuantityTier], quantity: u32) -> f64 {
    let Some(first) = tiers.first() else {
        return 1.0;
    };

    if quantity < 1 {
        return first.multiplier;
    }
    if quantity >= BULK_QUANTITY {
        return tiers[tiers.len() - 1].multiplier;
    }

    for window in tiers.windows(2) {
        let (lower, upper) = (window[0], window[1]);
        if lower.quantity <= quantity && quantity <= upper.quantity {
            if upper.quantity == lower.quantity {
                return upper.multiplier;
            }
            let t =
                (quantity - lower.quantity) as f64 / (upper.quantity - lower.quantity) as f64;
            return lerp(lower.multiplier, upper.multiplier, t);
        }
    }

    first.multiplier
}

/// Standard lead time bucketed by complexity score
pub fn standard_lead_time(rules: &PricingRules, complexity_score: f64) -> u32 {
    if complexity_score < SIMPLE_SCORE_LIMIT {
        rules.lead_time_simple_days
    } else if complexity_score < MEDIUM_SCORE_LIMIT {
        rules.lead_time_medium_days
    } else {
        rules.lead_time_complex_days
    }
}
