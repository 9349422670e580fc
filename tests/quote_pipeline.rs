// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! End-to-end quote pipeline tests

use anyhow::Result;
use approx::assert_relative_eq;
use millquote::geometry::{Mesh, Primitive};
use millquote::quote::{ExpediteTier, QuoteEngine, QuoteRequest, StockBlock};
use nalgebra::Vector3;

fn plate(length: f64, width: f64, height: f64) -> Mesh {
    Primitive::cube(Vector3::new(length, width, height)).to_mesh()
}

#[test]
fn test_flat_plate_floors_at_minimum_price() -> Result<()> {
    let engine = QuoteEngine::new();
    let mesh = plate(100.0, 80.0, 20.0);
    let result = engine.quote(&mesh, &QuoteRequest::default())?;

    println!("Flat plate 100×80×20:");
    println!("  Volume: {:.0} mm³", result.volume);
    println!("  Surface area: {:.0} mm²", result.surface_area);
    println!("  Complexity: {:.3}", result.complexity_score);
    println!("  Per unit: ${:.2}", result.per_unit_cost);

    assert_relative_eq!(result.volume, 160_000.0);
    assert_relative_eq!(result.surface_area, 23_200.0);
    assert!(result.complexity_score < 4.0);

    // no fitting block stays under 70% waste, so the smallest cube wins
    assert_eq!(result.breakdown.block, StockBlock::new(100.0, 100.0, 100.0));
    assert_relative_eq!(result.breakdown.block_volume, 1_000_000.0);
    assert_relative_eq!(result.breakdown.coarse_volume, 840_000.0, epsilon = 1e-6);
    assert_relative_eq!(result.breakdown.medium_volume, 32_000.0, epsilon = 1e-6);
    assert_relative_eq!(result.breakdown.fine_volume, 0.0);

    assert_relative_eq!(result.material_cost, 2.16, epsilon = 1e-9);
    // 104.88 base machine cost, low-complexity 0.85, medium size 1.0
    assert_relative_eq!(result.machine_time_cost, 89.148, epsilon = 1e-6);
    assert_relative_eq!(result.breakdown.labor.total_cost, 51.9004375, epsilon = 1e-6);

    // composite lands near $143; the $200 floor takes over
    assert_eq!(result.per_unit_cost, 200.0);
    assert_eq!(result.total_cost, 200.0);
    assert_eq!(result.lead_time_days, 7);
    assert!(!result.expedited);

    Ok(())
}

#[test]
fn test_large_plate_prices_above_floor() -> Result<()> {
    let engine = QuoteEngine::new();
    let mesh = plate(200.0, 160.0, 40.0);
    let result = engine.quote(&mesh, &QuoteRequest::default())?;

    println!("Large plate 200×160×40:");
    println!("  Machine: ${:.4}", result.machine_time_cost);
    println!("  Material: ${:.4}", result.material_cost);
    println!("  Labor: ${:.4}", result.breakdown.labor.total_cost);
    println!("  Per unit: ${:.4}", result.per_unit_cost);

    assert_relative_eq!(result.volume, 1_280_000.0);
    assert_eq!(result.breakdown.block, StockBlock::new(200.0, 200.0, 150.0));

    assert_relative_eq!(result.breakdown.coarse_milling_cost, 519.2, epsilon = 1e-6);
    assert_relative_eq!(result.breakdown.medium_milling_cost, 99.84, epsilon = 1e-6);
    assert_relative_eq!(result.breakdown.fine_milling_cost, 0.0);

    // low complexity 0.85, large size 0.9
    assert_relative_eq!(result.breakdown.complexity_multiplier, 0.85);
    assert_relative_eq!(result.breakdown.size_multiplier, 0.9);
    assert_relative_eq!(result.machine_time_cost, 473.5656, epsilon = 1e-6);
    assert_relative_eq!(result.material_cost, 17.28, epsilon = 1e-9);
    assert_relative_eq!(result.breakdown.labor.total_cost, 51.85421875, epsilon = 1e-6);

    assert_relative_eq!(result.per_unit_cost, 542.69981875, epsilon = 1e-6);
    assert_relative_eq!(result.total_cost, result.per_unit_cost);
    assert_eq!(result.lead_time_days, 7);

    Ok(())
}

#[test]
fn test_slender_bar_pays_for_its_oversize_block() -> Result<()> {
    let engine = QuoteEngine::new();
    // 150 cm³ of aluminium at 2.7 g/cm³ and $5/kg
    let mesh = plate(150.0, 40.0, 25.0);
    let result = engine.quote(&mesh, &QuoteRequest::default())?;

    println!("Bar 150×40×25:");
    println!("  Block: {}", result.breakdown.block);
    println!("  Waste: {:.1}%", result.breakdown.waste_ratio * 100.0);
    println!("  Material: ${:.4}", result.material_cost);
    println!("  Per unit: ${:.4}", result.per_unit_cost);

    assert_relative_eq!(result.volume, 150_000.0, epsilon = 1e-6);
    // the catalog has no shallow block for a 150 mm bar; the smallest
    // fitting block carries 93.6% waste
    assert_eq!(result.breakdown.block, StockBlock::new(150.0, 125.0, 125.0));
    assert_relative_eq!(result.breakdown.waste_ratio, 0.936);
    assert_relative_eq!(result.material_cost, 2.025, epsilon = 1e-9);

    // roughing away all that stock keeps the bar above the floor
    assert_relative_eq!(result.per_unit_cost, 268.985, epsilon = 1e-6);
    assert!(result.per_unit_cost > 200.0);
    assert_eq!(result.lead_time_days, 7);

    Ok(())
}

#[test]
fn test_quantity_discount_applies() -> Result<()> {
    let engine = QuoteEngine::new();
    let mesh = plate(200.0, 160.0, 40.0);

    let single = engine.quote(&mesh, &QuoteRequest::new(1))?;
    let batch = engine.quote(&mesh, &QuoteRequest::new(10))?;

    assert_relative_eq!(batch.breakdown.quantity_multiplier, 0.85);
    // setup labor spreads across units while handling repeats
    assert_relative_eq!(batch.per_unit_cost, 528.6148459375, epsilon = 1e-6);
    assert_relative_eq!(batch.total_cost, batch.per_unit_cost * 10.0, epsilon = 1e-6);
    assert!(batch.per_unit_cost < single.per_unit_cost);

    Ok(())
}

#[test]
fn test_expedite_overrides_lead_time_and_price() -> Result<()> {
    let engine = QuoteEngine::new();
    let mesh = plate(200.0, 160.0, 40.0);
    let base = engine.quote(&mesh, &QuoteRequest::default())?;

    let cases = [
        (ExpediteTier::FiveDay, 1.3, 5),
        (ExpediteTier::FourDay, 1.6, 4),
        (ExpediteTier::ThreeDay, 2.0, 3),
    ];
    for (tier, multiplier, days) in cases {
        let request = QuoteRequest::default().with_expedite(tier);
        let result = engine.quote(&mesh, &request)?;

        assert_eq!(result.lead_time_days, days);
        assert!(result.expedited);
        assert_relative_eq!(result.expedited_multiplier, multiplier);
        assert_relative_eq!(
            result.per_unit_cost,
            base.per_unit_cost * multiplier,
            epsilon = 1e-9
        );
    }

    Ok(())
}

#[test]
fn test_quote_is_bit_identical_across_runs() -> Result<()> {
    let engine = QuoteEngine::new();
    let mesh = Primitive::sphere(40.0, 64).to_mesh();
    let request = QuoteRequest::new(25).with_expedite(ExpediteTier::FourDay);

    let a = engine.quote(&mesh, &request)?;
    let b = engine.quote(&mesh, &request)?;

    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a.to_flat_json())?,
        serde_json::to_string(&b.to_flat_json())?
    );

    Ok(())
}

#[test]
fn test_degenerate_mesh_degrades_to_floor_quote() -> Result<()> {
    let engine = QuoteEngine::new();
    let mesh = Mesh::empty();
    let result = engine.quote(&mesh, &QuoteRequest::default())?;

    assert!(result.features.degraded);
    assert_eq!(result.volume, 0.0);
    assert_eq!(result.complexity_score, 0.0);
    assert_eq!(result.per_unit_cost, 200.0);

    Ok(())
}

#[test]
fn test_flat_json_carries_wire_keys() -> Result<()> {
    let engine = QuoteEngine::new();
    let mesh = plate(200.0, 160.0, 40.0);
    let result = engine.quote(&mesh, &QuoteRequest::new(2))?;
    let flat = result.to_flat_json();

    assert_eq!(flat["bounding_box"]["length"], 200.0);
    assert_eq!(flat["bounding_box"]["x_min"], 0.0);
    assert_eq!(flat["bounding_box"]["z_max"], 40.0);
    assert_eq!(flat["lead_time_days"], 7);
    assert!(flat["breakdown"]["labor_costs"]["total_labor_cost"].is_f64());
    assert!(flat["breakdown"]["quantity_multiplier"].is_f64());
    assert!(flat["breakdown"]["block_size"].is_array());

    Ok(())
}
