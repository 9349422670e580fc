// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Millquote
//!
//! A CNC machining quote engine. Measures STL part meshes, estimates
//! machining features and complexity, selects stock, and prices the
//! job through volumetric milling and labor cost models.

pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod quote;
pub mod utils;

pub use config::CalibrationConfig;
pub use error::QuoteError;
pub use geometry::{measure, Mesh, PartGeometry, Primitive};
pub use io::{export_stl, import_stl};
pub use quote::{ExpediteTier, QuoteEngine, QuoteRequest, QuoteResult};

use anyhow::Result;
use std::path::Path;

/// Quote a part mesh with the reference calibration
pub fn quote_mesh(mesh: &Mesh, request: &QuoteRequest) -> Result<QuoteResult> {
    let engine = QuoteEngine::new();
    Ok(engine.quote(mesh, request)?)
}

/// Quote an STL file with the reference calibration
pub fn quote_stl(path: &Path, request: &QuoteRequest) -> Result<QuoteResult> {
    let mesh = import_stl(path)?;
    quote_mesh(&mesh, request)
}
