// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Feature estimation from shape statistics
//!
//! Holes, cavities, sharp edges and pockets are inferred from aggregate
//! ratios, not from a CAD feature graph. The counts feed the complexity
//! score and are reported alongside the quote.

use serde::{Deserialize, Serialize};

use crate::geometry::PartGeometry;

/// Surface-to-volume ratio above which drilled holes are assumed
const HOLE_RATIO_THRESHOLD: f64 = 0.15;
/// Hull volume deficit above which internal cavities are assumed
const CAVITY_RATIO_THRESHOLD: f64 = 0.2;
/// Edge-to-face ratio above which sharp corners are assumed
const SHARP_EDGE_RATIO_THRESHOLD: f64 = 3.0;
/// Face count above which the dense pocket rule applies
const POCKET_FACES_DENSE: usize = 2000;
/// Face count above which any pockets are assumed
const POCKET_FACES_SPARSE: usize = 1000;

const HOLE_WEIGHT: f64 = 0.8;
const CAVITY_WEIGHT: f64 = 0.6;
const SHARP_EDGE_WEIGHT: f64 = 0.4;
const POCKET_WEIGHT: f64 = 0.5;

/// Machining features inferred from mesh statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureCounts {
    /// Estimated drilled holes, capped at 5
    pub holes: u32,
    /// Estimated internal cavities, capped at 3
    pub cavities: u32,
    /// Estimated sharp corners needing small tools, capped at 4
    pub sharp_edges: u32,
    /// Estimated milled pockets, capped at 8
    pub pockets: u32,
    /// Weighted difficulty contribution of all features
    pub feature_score: f64,
    /// True when the mesh was unusable and every count fell back to zero
    pub degraded: bool,
}

impl FeatureCounts {
    /// Zero-valued counts for unmeasurable geometry
    pub fn degraded() -> Self {
        Self {
            holes: 0,
            cavities: 0,
            sharp_edges: 0,
            pockets: 0,
            feature_score: 0.0,
            degraded: true,
        }
    }
}

/// Estimate machining features from measured geometry
///
/// Unmeasurable input degrades to all-zero counts instead of failing;
/// the `degraded` flag records that this happened.
pub fn detect(geometry: &PartGeometry) -> FeatureCounts {
    if !geometry.is_measurable() {
        return FeatureCounts::degraded();
    }

    let mut holes = 0;
    let sa_volume_ratio = geometry.surface_area / geometry.volume;
    if sa_volume_ratio > HOLE_RATIO_THRESHOLD {
        holes = ((sa_volume_ratio * 5.0).round() as u32).clamp(1, 5);
    }

    let mut cavities = 0;
    let cavity_ratio = 1.0 - geometry.volume / geometry.hull_volume;
    if cavity_ratio > CAVITY_RATIO_THRESHOLD {
        cavities = ((cavity_ratio * 3.0).round() as u32).clamp(1, 3);
    }

    let mut sharp_edges = 0;
    let edge_face_ratio = geometry.edge_count as f64 / geometry.face_count as f64;
    if edge_face_ratio > SHARP_EDGE_RATIO_THRESHOLD {
        sharp_edges = ((edge_face_ratio * 1.5).round() as u32).clamp(1, 4);
    }

    let mut pockets = 0;
    if geometry.face_count > POCKET_FACES_DENSE {
        pockets = ((geometry.face_count as f64 / 1000.0).round() as u32).clamp(1, 8);
    } else if geometry.face_count > POCKET_FACES_SPARSE {
        pockets = ((geometry.face_count as f64 / 800.0).round() as u32).clamp(1, 4);
    }

    let feature_score = f64::from(holes) * HOLE_WEIGHT
        + f64::from(cavities) * CAVITY_WEIGHT
        + f64::from(sharp_edges) * SHARP_EDGE_WEIGHT
        + f64::from(pockets) * POCKET_WEIGHT;

    FeatureCounts {
        holes,
        cavities,
        sharp_edges,
        pockets,
        feature_score,
        degraded: false,
    }
}
