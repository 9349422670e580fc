// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use colored::*;

use super::BatchReport;
use crate::quote::{ComplexityCategory, QuoteResult};

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Print a full quote report
    pub fn print_quote(input: &str, quantity: u32, result: &QuoteResult, verbose: bool) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "Quote:".bold(), input.cyan());
        println!("{}", "━".repeat(80).bright_black());
        println!(
            "  {} {}",
            "Quantity:".bright_black(),
            quantity.to_string().cyan()
        );
        if let Some(ref description) = result.breakdown.expedited_description {
            println!(
                "  {} {} (+{:.0}% premium)",
                "Expedited:".bright_black(),
                description.yellow(),
                (result.expedited_multiplier - 1.0) * 100.0
            );
        }

        if quantity > 1 {
            let discount = (1.0 - result.breakdown.quantity_multiplier) * 100.0;
            println!("\n{}", "Quantity Discount:".bold());
            if discount > 0.0 {
                println!(
                    "  {} {}",
                    "Discount:".bright_black(),
                    format!("{:.1}%", discount).green()
                );
            }
            println!(
                "  {} {:.2}x",
                "Multiplier applied:".bright_black(),
                result.breakdown.quantity_multiplier
            );
        }

        println!("\n{}", "Cost Breakdown:".bold());
        Self::print_money("Per unit cost", result.per_unit_cost, true);
        Self::print_money("Total cost", result.total_cost, true);
        Self::print_money("Material cost", result.material_cost, false);
        Self::print_money("Machine time cost", result.machine_time_cost, false);
        Self::print_money("Labor costs", result.breakdown.labor.total_cost, false);
        if let Some(premium) = result.expedited_premium() {
            Self::print_money("Expedited premium", premium, false);
        }

        println!("\n{}", "Lead Time:".bold());
        println!(
            "  {} {}",
            "Estimated lead time:".bright_black(),
            format!("{} days", result.lead_time_days).cyan()
        );
        if let Some(ref description) = result.breakdown.expedited_description {
            println!(
                "  {} {}",
                "Expedited delivery:".bright_black(),
                description.yellow()
            );
        }

        let dims = result.bounding_box.dims();
        let category = ComplexityCategory::from_score(result.complexity_score);
        println!("\n{}", "Part Analysis:".bold());
        println!(
            "  {} {:.1} × {:.1} × {:.1} mm",
            "Dimensions (L×W×H):".bright_black(),
            dims[0],
            dims[1],
            dims[2]
        );
        println!(
            "  {} {} mm³",
            "Volume:".bright_black(),
            Self::thousands(result.volume).cyan()
        );
        println!(
            "  {} {} mm²",
            "Surface area:".bright_black(),
            Self::thousands(result.surface_area).cyan()
        );
        println!(
            "  {} {:.1} ({})",
            "Complexity score:".bright_black(),
            result.complexity_score,
            category.as_str()
        );
        println!(
            "  {} {}",
            "Stock block:".bright_black(),
            result.breakdown.block.to_string().cyan()
        );

        let waste_volume = result.breakdown.block_volume - result.volume;
        let waste_percentage = if result.breakdown.block_volume > 0.0 {
            waste_volume / result.breakdown.block_volume * 100.0
        } else {
            0.0
        };
        println!("\n{}", "Material Analysis:".bold());
        println!(
            "  {} {} mm³",
            "Block volume:".bright_black(),
            Self::thousands(result.breakdown.block_volume).cyan()
        );
        println!(
            "  {} {} mm³ ({:.1}%)",
            "Material waste:".bright_black(),
            Self::thousands(waste_volume),
            waste_percentage
        );
        println!(
            "  {} {:.1}%",
            "Material efficiency:".bright_black(),
            100.0 - waste_percentage
        );

        println!("\n{}", "Detected Features:".bold());
        if result.features.degraded {
            println!(
                "  {}",
                "Mesh was degenerate; feature detection degraded to zero counts".yellow()
            );
        }
        println!(
            "  {} {}  {} {}  {} {}  {} {}",
            "Holes:".bright_black(),
            result.features.holes,
            "Cavities:".bright_black(),
            result.features.cavities,
            "Sharp edges:".bright_black(),
            result.features.sharp_edges,
            "Pockets:".bright_black(),
            result.features.pockets
        );
        println!(
            "  {} {:.1}",
            "Feature score:".bright_black(),
            result.features.feature_score
        );

        println!("\n{}", "Calibration Factors:".bold());
        println!(
            "  {} {:.2}x",
            "Complexity multiplier:".bright_black(),
            result.breakdown.complexity_multiplier
        );
        println!(
            "  {} {:.2}x",
            "Size multiplier:".bright_black(),
            result.breakdown.size_multiplier
        );
        println!(
            "  {} {:.2}x",
            "Quantity multiplier:".bright_black(),
            result.breakdown.quantity_multiplier
        );
        if result.expedited {
            println!(
                "  {} {:.2}x",
                "Expedited multiplier:".bright_black(),
                result.breakdown.expedited_multiplier
            );
        }

        println!("\n{}", "Milling Breakdown:".bold());
        Self::print_money("Coarse milling", result.breakdown.coarse_milling_cost, false);
        Self::print_money("Medium milling", result.breakdown.medium_milling_cost, false);
        Self::print_money("Fine milling", result.breakdown.fine_milling_cost, false);
        println!(
            "  {} {}",
            "Spindle time:".bright_black(),
            Self::format_spindle(result.breakdown.spindle_secs).yellow()
        );

        let labor = &result.breakdown.labor;
        println!("\n{}", "Labor Cost Breakdown:".bold());
        Self::print_money("CAD/CAM programming", labor.cad_cam_programming, false);
        Self::print_money("Machine setup", labor.machine_setup, false);
        Self::print_money("Tool setup", labor.tool_setup, false);
        Self::print_money("Quality inspection", labor.quality_inspection, false);
        Self::print_money("Deburring/finishing", labor.deburring_finishing, false);
        Self::print_money("Project management", labor.project_management, false);
        println!(
            "  {} {:.2} hours",
            "Total labor hours:".bright_black(),
            labor.total_hours
        );

        if verbose {
            println!("\n{}", "Pricing Model Notes:".bold());
            println!("  • Material: 6061 aluminum at $5.00/kg");
            println!("  • Machine time: three-phase milling, coarse 350 / medium 100 / fine 20 mm³/sec");
            println!("  • Complexity: surface ratios, face/edge counts and detected features");
            println!("  • Quantity discounts: interpolated tiers up to 28% off");
            println!("  • Minimum price: $200.00 per part");
        }

        println!("{}", "━".repeat(80).bright_black());
    }

    /// Print a batch summary table
    pub fn print_batch_summary(report: &BatchReport) {
        println!("\n{}", "═".repeat(80).bright_black());
        println!("{}", "Batch Summary".bold());
        println!("{}", "═".repeat(80).bright_black());
        println!(
            "  {} {}",
            "Total parts:".bright_black(),
            report.total_parts.to_string().cyan()
        );
        println!(
            "  {} {}",
            "Quoted:".bright_black(),
            report.quoted.to_string().green()
        );
        println!(
            "  {} {}",
            "Failed:".bright_black(),
            if report.failed > 0 {
                report.failed.to_string().red()
            } else {
                report.failed.to_string().green()
            }
        );
        println!(
            "  {} {}",
            "Total value:".bright_black(),
            format!("${:.2}", report.total_value).green()
        );

        if !report.failures.is_empty() {
            println!("\n  {}", "Failed files:".red().bold());
            for failure in &report.failures {
                println!("    {} {}", "❌".red(), failure.file);
                println!("       {}", failure.error.bright_black());
            }
        }

        println!("{}", "═".repeat(80).bright_black());
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("\n{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }

    fn print_money(label: &str, value: f64, highlight: bool) {
        let formatted = format!("${:.2}", value);
        println!(
            "  {} {}",
            format!("{}:", label).bright_black(),
            if highlight {
                formatted.green().bold()
            } else {
                formatted.normal()
            }
        );
    }

    /// Group the integer part of a value with thousands separators
    fn thousands(value: f64) -> String {
        let whole = value.round() as i64;
        let digits = whole.abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);

        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }

        if whole < 0 {
            format!("-{}", out)
        } else {
            out
        }
    }

    /// Format spindle time for display
    fn format_spindle(secs: f64) -> String {
        if secs < 60.0 {
            format!("{:.0}s", secs)
        } else if secs < 3600.0 {
            format!("{:.1} min", secs / 60.0)
        } else {
            format!("{:.2} h", secs / 3600.0)
        }
    }
}
