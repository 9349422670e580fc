// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Millquote CLI

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::Path;

use millquote::cli::{discover_stl_files, run_batch, Reporter};
use millquote::config::CalibrationConfig;
use millquote::io::import_stl;
use millquote::quote::{ExpediteTier, QuoteEngine, QuoteRequest};

#[derive(Parser)]
#[command(name = "millquote")]
#[command(about = "Millquote - CNC machining quote engine for STL parts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input STL file
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Quantity of parts
    #[arg(short, long, default_value_t = 1)]
    quantity: u32,

    /// Expedited delivery (5_days, 4_days, 3_days)
    #[arg(short, long, value_name = "TIER")]
    expedite: Option<String>,

    /// Output JSON file
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Calibration config TOML file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote a single STL part
    Quote {
        /// Input STL file
        input: String,

        /// Quantity of parts
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        /// Expedited delivery (5_days, 4_days, 3_days)
        #[arg(short, long, value_name = "TIER")]
        expedite: Option<String>,

        /// Output JSON file
        #[arg(short, long, value_name = "FILE")]
        output: Option<String>,

        /// Calibration config TOML file
        #[arg(short, long, value_name = "FILE")]
        config: Option<String>,
    },

    /// Quote every STL file under a directory
    Batch {
        /// Directory or STL file(s)
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Quantity of each part
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        /// Expedited delivery (5_days, 4_days, 3_days)
        #[arg(short, long, value_name = "TIER")]
        expedite: Option<String>,

        /// Output JSON report file
        #[arg(short, long, value_name = "FILE")]
        output: Option<String>,

        /// Calibration config TOML file
        #[arg(short, long, value_name = "FILE")]
        config: Option<String>,
    },

    /// Write the reference calibration as a TOML file
    Config {
        /// Output TOML file
        #[arg(short, long, default_value = "millquote.toml")]
        output: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Quote {
            input,
            quantity,
            expedite,
            output,
            config,
        }) => {
            quote_command(
                input,
                *quantity,
                expedite.as_deref(),
                output.as_deref(),
                config.as_deref(),
                cli.verbose,
            )?;
        }
        Some(Commands::Batch {
            inputs,
            quantity,
            expedite,
            output,
            config,
        }) => {
            batch_command(
                inputs,
                *quantity,
                expedite.as_deref(),
                output.as_deref(),
                config.as_deref(),
                cli.verbose,
            )?;
        }
        Some(Commands::Config { output }) => {
            config_command(output)?;
        }
        Some(Commands::Version) => {
            println!("Millquote v{}", env!("CARGO_PKG_VERSION"));
        }
        None => {
            // Default behavior: quote the positional input
            if let Some(input) = &cli.input {
                quote_command(
                    input,
                    cli.quantity,
                    cli.expedite.as_deref(),
                    cli.output.as_deref(),
                    cli.config.as_deref(),
                    cli.verbose,
                )?;
            } else {
                eprintln!("Error: Input STL file required");
                eprintln!("Usage: millquote <FILE> [--quantity N] [--expedite TIER]");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn load_config(config: Option<&str>) -> Result<CalibrationConfig> {
    match config {
        Some(path) => CalibrationConfig::from_file(path),
        None => CalibrationConfig::load(),
    }
}

fn parse_expedite(raw: Option<&str>) -> Option<ExpediteTier> {
    let raw = raw?;
    let tier = ExpediteTier::parse(raw);
    if tier.is_none() {
        Reporter::report_warning(&format!(
            "Unknown expedite tier '{}'; expected 5_days, 4_days or 3_days. Standard lead time applies.",
            raw
        ));
    }
    tier
}

fn quote_command(
    input: &str,
    quantity: u32,
    expedite: Option<&str>,
    output: Option<&str>,
    config: Option<&str>,
    verbose: bool,
) -> Result<()> {
    if !Path::new(input).exists() {
        eprintln!("Error: Input file not found: {}", input);
        std::process::exit(1);
    }

    if verbose {
        println!("Loading STL file: {}", input);
    }

    let engine = QuoteEngine::with_config(load_config(config)?);
    let mut request = QuoteRequest::new(quantity);
    if let Some(tier) = parse_expedite(expedite) {
        request = request.with_expedite(tier);
    }

    let start = std::time::Instant::now();
    let mesh = import_stl(Path::new(input))?;
    if verbose {
        println!("Loaded in {:.2?}", start.elapsed());
        println!("Vertices: {}", mesh.vertex_count());
        println!("Triangles: {}", mesh.triangle_count());
    }

    let result = match engine.quote(&mesh, &request) {
        Ok(result) => result,
        Err(e) => {
            Reporter::report_error(&e.to_string());
            std::process::exit(1);
        }
    };

    Reporter::print_quote(input, quantity, &result, verbose);

    if let Some(output_path) = output {
        let envelope = json!({
            "input_file": input,
            "quantity": quantity,
            "expedited": request.expedite.map(|t| t.as_str()),
            "generated_at": Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            "quote": result.to_flat_json(),
        });
        std::fs::write(output_path, serde_json::to_string_pretty(&envelope)?)?;
        Reporter::success(&format!("Quote saved to: {}", output_path));
    }

    Ok(())
}

fn batch_command(
    inputs: &[String],
    quantity: u32,
    expedite: Option<&str>,
    output: Option<&str>,
    config: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let mut files = Vec::new();
    for input in inputs {
        let path = Path::new(input);
        if !path.exists() {
            eprintln!("Error: Path not found: {}", input);
            continue;
        }
        files.extend(discover_stl_files(path)?);
    }

    if files.is_empty() {
        eprintln!("Error: No STL files found");
        std::process::exit(1);
    }

    if verbose {
        println!("Quoting {} STL files", files.len());
    }

    let engine = QuoteEngine::with_config(load_config(config)?);
    let mut request = QuoteRequest::new(quantity);
    if let Some(tier) = parse_expedite(expedite) {
        request = request.with_expedite(tier);
    }

    let report = run_batch(&engine, &files, &request, verbose);
    Reporter::print_batch_summary(&report);

    if let Some(output_path) = output {
        report.write_json(Path::new(output_path))?;
        Reporter::success(&format!("Batch report saved to: {}", output_path));
    }

    if report.failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn config_command(output: &str) -> Result<()> {
    CalibrationConfig::default().save(output)?;
    Reporter::success(&format!("Reference calibration written to: {}", output));
    Ok(())
}
