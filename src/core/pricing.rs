//! Tuition discount calculation engine.
//!
//! A pure function layer: given a program code and the user's discount
//! eligibility, produce an itemized [`CostBreakdown`]. Percentage discounts
//! are taken from the running balance in [`DISCOUNT_ORDER`], so they compound
//! rather than add. Employer reimbursement is a flat, capped subtraction
//! applied last.

use crate::core::catalog::PricingTable;
use crate::core::models::{
    CostBreakdown, DiscountKind, DiscountOptions, DiscountRuleSet, DiscountStep, PricingRecord,
    StepKind, DISCOUNT_ORDER,
};
use crate::debug;

/// Estimate the cost of a program from the built-in pricing table.
///
/// Returns `None` when the program code is unknown; callers render a
/// "no pricing available" fallback in that case.
#[must_use]
pub fn calculate_program_cost(program_code: &str, options: &DiscountOptions) -> Option<CostBreakdown> {
    calculate_program_cost_with(PricingTable::builtin(), program_code, options)
}

/// Estimate the cost of a program from an explicit pricing table.
#[must_use]
pub fn calculate_program_cost_with(
    table: &PricingTable,
    program_code: &str,
    options: &DiscountOptions,
) -> Option<CostBreakdown> {
    let Some(program) = table.program(program_code) else {
        debug!("No pricing record for program '{program_code}'");
        return None;
    };
    let rules = &table.discounts;

    let base_price = program.base_price();
    let mut remaining = base_price;
    let mut steps = Vec::new();

    for kind in DISCOUNT_ORDER {
        if !options.requests(kind) {
            continue;
        }
        let step = match kind {
            DiscountKind::EmployerReimbursement => {
                reimbursement_step(rules, program, options, remaining)
            }
            DiscountKind::WorkforcePartner if table.is_certificate(program_code) => {
                debug!("Skipping workforce partner discount for certificate '{program_code}'");
                None
            }
            _ => percentage_step(rules, kind, remaining),
        };
        if let Some(step) = step {
            remaining -= step.amount;
            steps.push(step);
        }
    }

    let final_price = remaining.max(0.0);
    let breakdown = CostBreakdown {
        program_code: program.code.clone(),
        base_price,
        steps,
        final_price,
        percent_saved: percent_saved(base_price, final_price),
        duration_years: program.duration_years,
        credits: program.credits,
    };
    debug!(
        "Estimated '{program_code}': base {base_price:.2}, final {final_price:.2}, {} step(s)",
        breakdown.steps.len()
    );
    Some(breakdown)
}

/// The discount rules of the built-in pricing table
#[must_use]
pub fn get_discount_info() -> &'static DiscountRuleSet {
    &PricingTable::builtin().discounts
}

/// The built-in pricing record for a program, if any
#[must_use]
pub fn get_program_pricing(program_code: &str) -> Option<&'static PricingRecord> {
    PricingTable::builtin().program(program_code)
}

/// `round((base - final) / base * 100)`; zero for a free program
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percent_saved(base_price: f64, final_price: f64) -> u32 {
    if base_price <= 0.0 {
        return 0;
    }
    let pct = ((base_price - final_price) / base_price * 100.0).round();
    pct.clamp(0.0, 100.0) as u32
}

/// Dollar amount with thousands separators and cents, e.g. `$52,500.00`
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

fn percentage_step(rules: &DiscountRuleSet, kind: DiscountKind, remaining: f64) -> Option<DiscountStep> {
    let pct = rules.percentage(kind)?;
    Some(DiscountStep {
        discount: kind,
        name: kind.label().to_string(),
        description: format!("{} off remaining tuition", format_percent(pct)),
        icon: kind.icon().to_string(),
        amount: remaining * pct,
        kind: StepKind::Discount,
    })
}

/// Flat reimbursement: the annual amount (clamped to the cap) times the
/// program duration, never more than what is left to pay.
fn reimbursement_step(
    rules: &DiscountRuleSet,
    program: &PricingRecord,
    options: &DiscountOptions,
    remaining: f64,
) -> Option<DiscountStep> {
    let annual = options
        .reimbursement()?
        .min(rules.employer_reimbursement.max_annual);
    let total = annual * program.duration_years;
    let amount = total.min(remaining.max(0.0));
    let kind = DiscountKind::EmployerReimbursement;
    Some(DiscountStep {
        discount: kind,
        name: kind.label().to_string(),
        description: format!(
            "{}/year for {} year(s)",
            format_currency(annual),
            program.duration_years
        ),
        icon: kind.icon().to_string(),
        amount,
        kind: StepKind::Reimbursement,
    })
}

fn format_percent(fraction: f64) -> String {
    let pct = fraction * 100.0;
    if (pct - pct.round()).abs() < 1e-9 {
        format!("{pct:.0}%")
    } else {
        format!("{pct:.1}%")
    }
}
