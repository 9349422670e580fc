// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! STL import, unit recovery and file-to-quote tests

use anyhow::Result;
use millquote::geometry::{measure, Primitive};
use millquote::{export_stl, import_stl, quote_stl, QuoteRequest};
use nalgebra::Vector3;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_exported_part_quotes_after_reimport() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("bracket.stl");

    let mesh = Primitive::cylinder(60.0, 25.0, 32).to_mesh();
    export_stl(&mesh, &path)?;

    let original = measure(&mesh);
    let imported = import_stl(&path)?;
    let reimported = measure(&imported);

    assert_eq!(reimported.face_count, original.face_count);
    // f32 storage in the STL container perturbs coordinates slightly
    let volume_error = ((reimported.volume - original.volume) / original.volume).abs();
    assert!(
        volume_error < 1e-3,
        "volume drifted {:.2e} through the container",
        volume_error
    );

    let quote = quote_stl(&path, &QuoteRequest::default())?;
    assert!(quote.per_unit_cost >= 200.0);
    assert_eq!(quote.lead_time_days, 7);

    Ok(())
}

#[test]
fn test_meter_scale_file_recovered_to_mm() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("meters.stl");

    // A 40 mm cube authored in meters
    let mesh = Primitive::cube(Vector3::new(0.04, 0.04, 0.04)).to_mesh();
    export_stl(&mesh, &path)?;

    let imported = import_stl(&path)?;
    let geometry = measure(&imported);

    for dim in geometry.dims() {
        assert!(
            (dim - 40.0).abs() < 1e-3,
            "dimension {dim} not rescaled to mm"
        );
    }

    // Quotes like the same part authored in mm
    let quote = quote_stl(&path, &QuoteRequest::default())?;
    let native = Primitive::cube(Vector3::new(40.0, 40.0, 40.0)).to_mesh();
    let reference = millquote::quote_mesh(&native, &QuoteRequest::default())?;

    assert_eq!(quote.per_unit_cost, reference.per_unit_cost);
    assert_eq!(quote.breakdown.block, reference.breakdown.block);
    assert_eq!(quote.lead_time_days, reference.lead_time_days);

    Ok(())
}

#[test]
fn test_millimeter_file_not_rescaled() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("native.stl");

    let mesh = Primitive::cube(Vector3::new(30.0, 20.0, 10.0)).to_mesh();
    export_stl(&mesh, &path)?;

    let geometry = measure(&import_stl(&path)?);
    assert_eq!(geometry.dims(), [30.0, 20.0, 10.0]);

    Ok(())
}

#[test]
fn test_truncated_file_is_rejected() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("broken.stl");
    fs::write(&path, b"solid nope")?;

    let err = match quote_stl(&path, &QuoteRequest::default()) {
        Err(err) => err,
        Ok(_) => panic!("expected truncated file to fail"),
    };
    assert!(
        err.to_string().contains("Failed to read STL file"),
        "unexpected error: {err:#}"
    );

    Ok(())
}

#[test]
fn test_missing_file_is_rejected() {
    let err = match import_stl(std::path::Path::new("/nonexistent/part.stl")) {
        Err(err) => err,
        Ok(_) => panic!("expected missing file to fail"),
    };
    assert!(err.to_string().contains("Failed to open STL file"));
}
