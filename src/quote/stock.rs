// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Stock block selection

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// Candidates above this waste ratio are ignored when a better fit exists
const MAX_WASTE_RATIO: f64 = 0.7;
/// Inclusive waste band preferred during selection
const OPTIMAL_WASTE_MIN: f64 = 0.2;
const OPTIMAL_WASTE_MAX: f64 = 0.6;
/// Waste ratio the in-band search steers towards
const TARGET_WASTE_RATIO: f64 = 0.3;

/// Rectangular stock block dimensions in mm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockBlock(pub [f64; 3]);

impl StockBlock {
    pub const fn new(length: f64, width: f64, height: f64) -> Self {
        Self([length, width, height])
    }

    pub fn volume(&self) -> f64 {
        self.0[0] * self.0[1] * self.0[2]
    }

    /// Dimensions sorted longest first
    pub fn sorted_dims(&self) -> [f64; 3] {
        let mut dims = self.0;
        dims.sort_by(|a, b| b.total_cmp(a));
        dims
    }

    /// Whether a part with the given sorted dimensions fits this block
    ///
    /// Both sides must be sorted longest first; orientation is free, so
    /// elementwise comparison of sorted extents decides the fit.
    pub fn fits(&self, part_sorted_dims: &[f64; 3]) -> bool {
        let dims = self.sorted_dims();
        part_sorted_dims
            .iter()
            .zip(dims.iter())
            .all(|(part, block)| part <= block)
    }
}

impl fmt::Display for StockBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0} × {:.0} × {:.0} mm",
            self.0[0], self.0[1], self.0[2]
        )
    }
}

/// Stock block chosen for a part
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectedStock {
    pub block: StockBlock,
    /// Block volume in mm³
    pub volume: f64,
    /// Fraction of the block removed as waste relative to the part bbox
    pub waste_ratio: f64,
}

/// Pick the stock block for a part with the given bbox dimensions
///
/// Prefers blocks whose waste ratio lands in [0.2, 0.6], choosing the
/// one closest to 0.3 and breaking ties by the smaller block. When no
/// candidate stays under 70% waste, falls back to the smallest fitting
/// block regardless of waste.
pub fn select(blocks: &[StockBlock], part_dims: &[f64; 3]) -> Result<SelectedStock, QuoteError> {
    let mut part_sorted = *part_dims;
    part_sorted.sort_by(|a, b| b.total_cmp(a));
    let part_bbox_volume = part_dims[0] * part_dims[1] * part_dims[2];

    let fitting: Vec<&StockBlock> = blocks
        .iter()
        .filter(|block| block.fits(&part_sorted))
        .collect();

    if fitting.is_empty() {
        let largest = blocks
            .iter()
            .copied()
            .max_by(|a, b| a.volume().total_cmp(&b.volume()))
            .unwrap_or(StockBlock::new(0.0, 0.0, 0.0));
        return Err(QuoteError::PartTooLarge {
            part_dims: *part_dims,
            largest_block: largest,
        });
    }

    let waste_for = |block: &StockBlock| -> f64 {
        let volume = block.volume();
        if volume > 0.0 {
            (volume - part_bbox_volume) / volume
        } else {
            0.0
        }
    };

    let candidates: Vec<&StockBlock> = fitting
        .iter()
        .copied()
        .filter(|block| waste_for(block) <= MAX_WASTE_RATIO)
        .collect();

    let chosen = if candidates.is_empty() {
        // Every fitting block is mostly waste; take the smallest anyway
        fitting
            .iter()
            .copied()
            .min_by(|a, b| a.volume().total_cmp(&b.volume()))
    } else {
        let in_band: Vec<&StockBlock> = candidates
            .iter()
            .copied()
            .filter(|block| {
                let waste = waste_for(block);
                (OPTIMAL_WASTE_MIN..=OPTIMAL_WASTE_MAX).contains(&waste)
            })
            .collect();

        if in_band.is_empty() {
            candidates
                .iter()
                .copied()
                .min_by(|a, b| a.volume().total_cmp(&b.volume()))
        } else {
            in_band.iter().copied().min_by(|a, b| {
                let da = (waste_for(a) - TARGET_WASTE_RATIO).abs();
                let db = (waste_for(b) - TARGET_WASTE_RATIO).abs();
                da.total_cmp(&db)
                    .then_with(|| a.volume().total_cmp(&b.volume()))
            })
        }
    };

    // fitting is non-empty, so chosen is always Some
    let block = chosen.copied().unwrap_or(StockBlock::new(0.0, 0.0, 0.0));

    Ok(SelectedStock {
        block,
        volume: block.volume(),
        waste_ratio: waste_for(&block),
    })
}
