// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Complexity scoring

use serde::{Deserialize, Serialize};

use super::FeatureCounts;
use crate::geometry::PartGeometry;

/// Upper bound of the complexity score
const SCORE_CAP: f64 = 8.0;
/// Caps for the four additive terms
const AREA_TERM_CAP: f64 = 3.0;
const FACE_TERM_CAP: f64 = 4.0;
const EDGE_TERM_CAP: f64 = 3.0;
const FEATURE_TERM_CAP: f64 = 2.0;

/// Score below which a part counts as low complexity
const LOW_LIMIT: f64 = 4.0;
/// Score below which a part counts as medium complexity
const MEDIUM_LIMIT: f64 = 6.0;

/// Longest edge below which a part counts as small
const SMALL_LIMIT_MM: f64 = 50.0;
/// Longest edge below which a part counts as medium sized
const MEDIUM_LIMIT_MM: f64 = 200.0;

/// Complexity category derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityCategory {
    Low,
    Medium,
    High,
}

impl ComplexityCategory {
    pub fn from_score(score: f64) -> Self {
        if score < LOW_LIMIT {
            Self::Low
        } else if score < MEDIUM_LIMIT {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Size category derived from the longest bounding-box edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    Small,
    Medium,
    Large,
}

impl SizeCategory {
    pub fn from_longest_edge(longest_mm: f64) -> Self {
        if longest_mm < SMALL_LIMIT_MM {
            Self::Small
        } else if longest_mm < MEDIUM_LIMIT_MM {
            Self::Medium
        } else {
            Self::Large
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Complexity score with its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complexity {
    /// Heuristic score in [0, 8]
    pub score: f64,
    pub category: ComplexityCategory,
}

/// Score geometric complexity from shape statistics and features
///
/// Four additive terms, each independently capped, summed and capped at
/// 8.0. The caps and weights are calibration constants; changing them
/// shifts every downstream multiplier.
pub fn score(geometry: &PartGeometry, features: &FeatureCounts) -> Complexity {
    let sa_volume_ratio = if geometry.volume > 0.0 {
        geometry.surface_area / geometry.volume
    } else {
        0.0
    };
    let area_term = (sa_volume_ratio * 0.15).min(AREA_TERM_CAP);

    let face_term = ((geometry.face_count as f64 / 1000.0) * 2.0).min(FACE_TERM_CAP);
    let edge_term = ((geometry.edge_count as f64 / 1000.0) * 2.0).min(EDGE_TERM_CAP);
    let feature_term = (features.feature_score * 0.3).min(FEATURE_TERM_CAP);

    let score = (area_term + face_term + edge_term + feature_term).min(SCORE_CAP);

    Complexity {
        score,
        category: ComplexityCategory::from_score(score),
    }
}
