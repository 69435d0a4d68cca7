//! Pricing commands: `programs`, `discounts`, `estimate`

use super::report;
use std::path::PathBuf;
use tuition_pathways::config::Config;
use tuition_pathways::core::analytics::AnalyticsSink;
use tuition_pathways::core::calculator::TuitionCalculator;
use tuition_pathways::core::catalog::PricingTable;
use tuition_pathways::core::models::DISCOUNT_ORDER;
use tuition_pathways::core::pricing::format_currency;
use tuition_pathways::core::report::EstimateReport;
use tuition_pathways::{info, verbose, warn};

/// Arguments of the `estimate` command
#[derive(Debug, Clone, Default)]
pub struct EstimateArgs {
    /// Program code
    pub program: String,
    /// Workforce partner discount requested
    pub partner: bool,
    /// Hoboken resident discount requested
    pub resident: bool,
    /// Alumni discount requested
    pub alumni: bool,
    /// Raw annual reimbursement input
    pub reimbursement: Option<String>,
    /// Print JSON
    pub json: bool,
    /// Report format
    pub report: Option<String>,
    /// Report path
    pub output: Option<PathBuf>,
}

/// List every priced program
pub fn programs(table: &PricingTable, json: bool) -> Result<(), String> {
    if json {
        let out = serde_json::to_string_pretty(table.programs())
            .map_err(|e| format!("✗ Failed to serialize programs: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    println!("\n=== Programs ===\n");
    println!("{:<12} {:<48} {:<14} {:>8} {:>14}", "Code", "Name", "Credits", "Years", "Base tuition");
    for program in table.programs() {
        println!(
            "{:<12} {:<48} {:<14} {:>8} {:>14}",
            program.code,
            program.name,
            program.credits.describe(),
            program.duration_years,
            format_currency(program.base_price())
        );
    }
    Ok(())
}

/// Print the discount rules
pub fn discounts(table: &PricingTable, json: bool) -> Result<(), String> {
    let rules = &table.discounts;
    if json {
        let out = serde_json::to_string_pretty(rules)
            .map_err(|e| format!("✗ Failed to serialize discount rules: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    println!("\n=== Discounts (applied in this order) ===\n");
    for (i, kind) in DISCOUNT_ORDER.iter().enumerate() {
        let detail = rules.percentage(*kind).map_or_else(
            || {
                format!(
                    "up to {}/year, times program years",
                    format_currency(rules.employer_reimbursement.max_annual)
                )
            },
            |pct| format!("{:.0}% of the remaining balance", pct * 100.0),
        );
        println!("  {}. {:<32} {detail}", i + 1, kind.label());
    }
    println!(
        "\nCertificates (codes starting with '{}') are not eligible for the workforce partner discount.",
        rules.certificate_prefix
    );
    Ok(())
}

/// Estimate one program
pub fn run(
    table: &PricingTable,
    analytics: &dyn AnalyticsSink,
    args: &EstimateArgs,
    config: &Config,
) -> Result<(), String> {
    let record = table.program(&args.program).ok_or_else(|| {
        format!(
            "✗ No pricing available for '{}'. Run `pathways programs` to list codes.",
            args.program
        )
    })?;

    let mut calc = TuitionCalculator::new(table, &args.program, analytics).with_source("cli");
    if args.partner {
        if !calc.offers_workforce_partner() {
            warn!("Workforce partner discount does not apply to certificate '{}'", args.program);
            println!("ℹ The workforce partner discount does not apply to certificates.");
        }
        calc.set_workforce_partner(true);
    }
    if args.resident {
        calc.set_hoboken_resident(true);
    }
    if args.alumni {
        calc.set_stevens_alumni(true);
    }
    if let Some(raw) = &args.reimbursement {
        calc.set_reimbursement(raw);
        verbose!("Reimbursement input '{raw}' normalized to '{}'", calc.reimbursement_input());
    }

    let breakdown = calc
        .breakdown()
        .ok_or_else(|| format!("✗ No pricing available for '{}'", args.program))?;

    if args.json {
        let out = serde_json::to_string_pretty(breakdown)
            .map_err(|e| format!("✗ Failed to serialize estimate: {e}"))?;
        println!("{out}");
    } else {
        print_estimate(&EstimateReport::new(record, breakdown));
    }

    if let Some(format) = &args.report {
        let view = EstimateReport::new(record, breakdown);
        let path = report::write(&view, format, args.output.as_deref(), &args.program, config)?;
        println!("✓ Report generated: {}", path.display());
    }

    info!("Estimated '{}' at {}", args.program, format_currency(breakdown.final_price));
    Ok(())
}

fn print_estimate(view: &EstimateReport) {
    println!("\n=== {} ({}) ===\n", view.program_name, view.program_code);
    println!("Credits:  {}", view.credits);
    println!("Duration: {}\n", view.duration);
    println!("{:<40} {:>14}", "Base tuition", view.base_price);
    for (i, step) in view.steps.iter().enumerate() {
        println!(
            "  {}. {:<35} {:>14}  ({})",
            i + 1,
            step.name,
            format!("-{}", step.amount),
            step.description
        );
    }
    println!("{:<40} {:>14}", "Estimated total", view.final_price);
    if view.steps.is_empty() {
        println!("\nNo discounts applied.");
    } else {
        println!("\nYou save {} ({}%).", view.total_savings, view.percent_saved);
    }
}
