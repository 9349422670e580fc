// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for quote generation

use thiserror::Error;

use crate::quote::StockBlock;

/// Errors produced while pricing a measured part.
///
/// Degenerate geometry does not fail the pipeline; it degrades to
/// zero-valued features instead. The only hard failure is a part that
/// cannot be machined from any catalog block.
#[derive(Debug, Clone, Error)]
pub enum QuoteError {
    /// No stock block in the catalog can contain the part.
    #[error(
        "part ({:.1} × {:.1} × {:.1} mm) exceeds the largest stock block ({})",
        .part_dims[0], .part_dims[1], .part_dims[2], .largest_block
    )]
    PartTooLarge {
        /// Bounding-box dimensions of the part in mm.
        part_dims: [f64; 3],
        /// Largest block the catalog offers.
        largest_block: StockBlock,
    },
}
