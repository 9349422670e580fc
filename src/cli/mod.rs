// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI subsystem for Millquote

pub mod reporter;

pub use reporter::Reporter;

use anyhow::Result;
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::io::import_stl;
use crate::quote::{QuoteEngine, QuoteRequest, QuoteResult};

/// Discover .stl files under a path
///
/// A file path yields itself; a directory is walked recursively. The
/// extension check ignores case since scanners commonly emit `.STL`.
pub fn discover_stl_files(path: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    if path.is_file() && has_stl_extension(path) {
        files.push(path.to_path_buf());
    } else if path.is_dir() {
        for entry in WalkDir::new(path)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let entry_path = entry.path();
            if entry_path.is_file() && has_stl_extension(entry_path) {
                files.push(entry_path.to_path_buf());
            }
        }
    }

    // Sort for consistent ordering
    files.sort();

    Ok(files)
}

fn has_stl_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("stl"))
}

/// One successfully quoted part in a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchQuote {
    pub file: String,
    pub quantity: u32,
    pub quote: QuoteResult,
}

/// Error information for parts that failed to quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchFailure {
    pub file: String,
    pub error: String,
}

/// Complete batch quoting report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub timestamp: String,
    pub total_parts: usize,
    pub quoted: usize,
    pub failed: usize,
    /// Sum of total costs across all quoted parts
    pub total_value: f64,
    pub quotes: Vec<BatchQuote>,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self {
            timestamp: Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            total_parts: 0,
            quoted: 0,
            failed: 0,
            total_value: 0.0,
            quotes: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn add_quote(&mut self, file: String, quantity: u32, quote: QuoteResult) {
        self.total_parts += 1;
        self.quoted += 1;
        self.total_value += quote.total_cost;
        self.quotes.push(BatchQuote {
            file,
            quantity,
            quote,
        });
    }

    pub fn add_failure(&mut self, file: String, error: String) {
        self.total_parts += 1;
        self.failed += 1;
        self.failures.push(BatchFailure { file, error });
    }

    /// Write the report as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

impl Default for BatchReport {
    fn default() -> Self {
        Self::new()
    }
}

fn quote_stl_file(
    engine: &QuoteEngine,
    path: &Path,
    request: &QuoteRequest,
) -> Result<QuoteResult> {
    let mesh = import_stl(path)?;
    Ok(engine.quote(&mesh, request)?)
}

/// Quote every file with the same request parameters
///
/// Files are processed in parallel; report order follows the input
/// order regardless of completion order.
pub fn run_batch(
    engine: &QuoteEngine,
    files: &[PathBuf],
    request: &QuoteRequest,
    show_progress: bool,
) -> BatchReport {
    let pb = if show_progress {
        let p = ProgressBar::new(files.len() as u64);
        p.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(p)
    } else {
        None
    };

    let results: Vec<(String, Result<QuoteResult>)> = files
        .par_iter()
        .map(|file| {
            let result = quote_stl_file(engine, file, request);

            if let Some(ref p) = pb {
                p.inc(1);
            }

            (file.display().to_string(), result)
        })
        .collect();

    if let Some(p) = pb {
        p.finish_with_message("Batch complete");
    }

    let mut report = BatchReport::new();
    for (file, result) in results {
        match result {
            Ok(quote) => report.add_quote(file, request.quantity, quote),
            Err(e) => report.add_failure(file, e.to_string()),
        }
    }

    report
}
