// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Quoting pipeline
//!
//! Measured geometry flows through feature detection, complexity
//! scoring, stock selection and the volumetric cost model into a
//! single immutable [`QuoteResult`].

pub mod complexity;
pub mod engine;
pub mod features;
pub mod labor;
pub mod milling;
pub mod pricing;
pub mod result;
pub mod stock;

pub use complexity::{Complexity, ComplexityCategory, SizeCategory};
pub use engine::{QuoteEngine, QuoteRequest};
pub use features::FeatureCounts;
pub use labor::LaborBreakdown;
pub use milling::MillingPhases;
pub use pricing::{ExpediteTier, QuantityTier};
pub use result::{CostBreakdown, QuoteResult};
pub use stock::{SelectedStock, StockBlock};
