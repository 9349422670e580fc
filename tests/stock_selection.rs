// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Stock catalog selection tests

use anyhow::Result;
use millquote::config::StockCatalog;
use millquote::quote::stock;
use millquote::quote::StockBlock;
use millquote::QuoteError;

#[test]
fn test_mid_size_part_lands_in_waste_band() -> Result<()> {
    let catalog = StockCatalog::default();
    let selected = stock::select(&catalog.blocks, &[40.0, 40.0, 40.0])?;

    println!(
        "40³ part -> {} (waste {:.1}%)",
        selected.block,
        selected.waste_ratio * 100.0
    );

    assert_eq!(selected.block, StockBlock::new(50.0, 50.0, 50.0));
    assert!(selected.waste_ratio >= 0.2 && selected.waste_ratio <= 0.6);

    Ok(())
}

#[test]
fn test_selection_always_fits_the_part() -> Result<()> {
    let catalog = StockCatalog::default();

    for size in (10..=400).step_by(10) {
        let dims = [size as f64, size as f64 * 0.8, size as f64 * 0.2];
        let selected = stock::select(&catalog.blocks, &dims)?;

        let mut part_sorted = dims;
        part_sorted.sort_by(|a, b| b.total_cmp(a));
        assert!(
            selected.block.fits(&part_sorted),
            "block {} does not fit part {:?}",
            selected.block,
            dims
        );
        assert!(selected.volume >= dims[0] * dims[1] * dims[2]);
        assert!(selected.waste_ratio < 1.0);
    }

    Ok(())
}

#[test]
fn test_rotated_part_fits_by_sorted_dims() -> Result<()> {
    let catalog = StockCatalog::default();

    // same part in two orientations selects the same block
    let a = stock::select(&catalog.blocks, &[20.0, 140.0, 90.0])?;
    let b = stock::select(&catalog.blocks, &[140.0, 90.0, 20.0])?;

    assert_eq!(a.block, b.block);
    assert_eq!(a.volume, b.volume);

    Ok(())
}

#[test]
fn test_oversize_part_reports_largest_block() {
    let catalog = StockCatalog::default();
    let result = stock::select(&catalog.blocks, &[650.0, 80.0, 40.0]);

    match result {
        Err(QuoteError::PartTooLarge {
            part_dims,
            largest_block,
        }) => {
            assert_eq!(part_dims, [650.0, 80.0, 40.0]);
            assert_eq!(largest_block, StockBlock::new(600.0, 500.0, 500.0));
            let message = QuoteError::PartTooLarge {
                part_dims,
                largest_block,
            }
            .to_string();
            assert!(message.contains("exceeds the largest stock block"));
        }
        other => panic!("expected PartTooLarge, got {:?}", other),
    }
}

#[test]
fn test_tiny_part_falls_back_to_smallest_block() -> Result<()> {
    let catalog = StockCatalog::default();
    let selected = stock::select(&catalog.blocks, &[2.0, 2.0, 2.0])?;

    // every block wastes more than 70%; the smallest is still chosen
    assert_eq!(selected.block, StockBlock::new(25.0, 25.0, 25.0));
    assert!(selected.waste_ratio > 0.7);

    Ok(())
}
