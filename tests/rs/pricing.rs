//! Integration tests for the tuition discount engine

use tuition_pathways::core::catalog::PricingTable;
use tuition_pathways::core::models::{DiscountKind, DiscountOptions, StepKind};
use tuition_pathways::core::pricing::{
    calculate_program_cost, calculate_program_cost_with, get_discount_info, get_program_pricing,
    percent_saved,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

const TWO_YEAR_TABLE: &str = r#"
[discounts]
workforce_partner = 0.20
hoboken_resident = 0.10
alumni = 0.15
certificate_prefix = "cert-"

[discounts.employer_reimbursement]
max_annual = 20500.0

[[programs]]
code = "ms-big"
name = "Large Program"
credits = { model = "fixed", credits = 30.0 }
price = { kind = "flat", amount = 60000.0 }
duration_years = 2.0

[[programs]]
code = "ms-small"
name = "Small Program"
credits = { model = "fixed", credits = 30.0 }
price = { kind = "flat", amount = 30000.0 }
duration_years = 2.0
"#;

#[test]
fn certificate_ignores_workforce_partner() {
    let options = DiscountOptions {
        is_workforce_partner: true,
        ..DiscountOptions::default()
    };
    let breakdown = calculate_program_cost("cert-eai", &options).expect("priced");

    assert!(close(breakdown.base_price, 5_250.0));
    assert!(breakdown.step(DiscountKind::WorkforcePartner).is_none());
    assert!(breakdown.steps.is_empty());
    assert!(close(breakdown.final_price, 5_250.0));
    assert_eq!(breakdown.percent_saved, 0);
}

#[test]
fn percentage_discounts_compound_in_order() {
    let options = DiscountOptions {
        is_workforce_partner: true,
        is_hoboken_resident: true,
        ..DiscountOptions::default()
    };
    let breakdown = calculate_program_cost("mba", &options).expect("priced");

    let amounts: Vec<f64> = breakdown.steps.iter().map(|s| s.amount).collect();
    assert_eq!(amounts.len(), 2);
    assert!(close(amounts[0], 10_000.0));
    assert!(close(amounts[1], 4_000.0));
    assert!(close(breakdown.final_price, 36_000.0));
    assert_eq!(breakdown.percent_saved, 28);
    assert!(close(breakdown.total_savings(), 14_000.0));
}

#[test]
fn every_discount_applies_in_fixed_order() {
    let options = DiscountOptions {
        is_workforce_partner: true,
        is_hoboken_resident: true,
        is_stevens_alumni: true,
        annual_reimbursement: Some(1_000.0),
    };
    let breakdown = calculate_program_cost("mba", &options).expect("priced");

    let kinds: Vec<DiscountKind> = breakdown.steps.iter().map(|s| s.discount).collect();
    assert_eq!(
        kinds,
        vec![
            DiscountKind::WorkforcePartner,
            DiscountKind::HobokenResident,
            DiscountKind::StevensAlumni,
            DiscountKind::EmployerReimbursement,
        ]
    );
    // 50,000 -> 40,000 -> 36,000 -> 30,600 -> 28,600
    assert!(close(breakdown.steps[2].amount, 5_400.0));
    assert!(close(breakdown.steps[3].amount, 2_000.0));
    assert!(close(breakdown.final_price, 28_600.0));
    assert_eq!(breakdown.steps[3].kind, StepKind::Reimbursement);
    assert_eq!(breakdown.steps[0].kind, StepKind::Discount);
}

#[test]
fn reimbursement_capped_per_year_times_duration() {
    let table = PricingTable::from_toml(TWO_YEAR_TABLE).expect("valid table");
    let options = DiscountOptions {
        annual_reimbursement: Some(25_000.0),
        ..DiscountOptions::default()
    };
    let breakdown = calculate_program_cost_with(&table, "ms-big", &options).expect("priced");

    let step = breakdown
        .step(DiscountKind::EmployerReimbursement)
        .expect("reimbursement step");
    assert!(close(step.amount, 41_000.0));
    assert!(close(breakdown.final_price, 19_000.0));
}

#[test]
fn reimbursement_clamped_to_remaining_balance() {
    let table = PricingTable::from_toml(TWO_YEAR_TABLE).expect("valid table");
    let options = DiscountOptions {
        is_hoboken_resident: true,
        annual_reimbursement: Some(25_000.0),
        ..DiscountOptions::default()
    };
    let breakdown = calculate_program_cost_with(&table, "ms-small", &options).expect("priced");

    let step = breakdown
        .step(DiscountKind::EmployerReimbursement)
        .expect("reimbursement step");
    assert!(close(step.amount, 27_000.0));
    assert!(close(breakdown.final_price, 0.0));
    assert_eq!(breakdown.percent_saved, 100);
}

#[test]
fn nonsense_reimbursement_is_ignored() {
    for amount in [0.0, -500.0, f64::NAN, f64::INFINITY] {
        let options = DiscountOptions {
            annual_reimbursement: Some(amount),
            ..DiscountOptions::default()
        };
        let breakdown = calculate_program_cost("msds", &options).expect("msds priced");
        assert!(breakdown.steps.is_empty(), "amount {amount} should not apply");
        assert!(close(breakdown.final_price, breakdown.base_price));
    }
}

#[test]
fn per_credit_programs_use_default_credits() {
    let mscs = get_program_pricing("mscs").expect("mscs priced");
    assert!(close(mscs.base_price(), 54_000.0));
    let mem = get_program_pricing("mem").expect("mem priced");
    assert!(close(mem.base_price(), 33.0 * 1_700.0));
}

#[test]
fn unknown_program_has_no_breakdown() {
    assert!(calculate_program_cost("ghost", &DiscountOptions::default()).is_none());
    assert!(get_program_pricing("ghost").is_none());
}

#[test]
fn final_price_never_negative() {
    let options = DiscountOptions {
        is_workforce_partner: true,
        is_hoboken_resident: true,
        is_stevens_alumni: true,
        annual_reimbursement: Some(20_500.0),
    };
    for program in PricingTable::builtin().programs() {
        let breakdown = calculate_program_cost(&program.code, &options).expect("priced");
        assert!(breakdown.final_price >= 0.0, "{}", program.code);
        assert!(breakdown.percent_saved <= 100, "{}", program.code);
    }
}

#[test]
fn discount_info_matches_table() {
    let rules = get_discount_info();
    assert!(close(rules.workforce_partner, 0.20));
    assert!(close(rules.hoboken_resident, 0.10));
    assert!(close(rules.employer_reimbursement.max_annual, 20_500.0));
    assert!(rules.is_certificate("cert-dsa"));
    assert!(!rules.is_certificate("mba"));
}

#[test]
fn percent_saved_rounds() {
    assert_eq!(percent_saved(50_000.0, 36_000.0), 28);
    assert_eq!(percent_saved(3.0, 2.0), 33);
    assert_eq!(percent_saved(0.0, 0.0), 0);
}

#[test]
fn reimbursement_description_uses_currency_format() {
    let options = DiscountOptions {
        annual_reimbursement: Some(1_234.5),
        ..DiscountOptions::default()
    };
    let breakdown = calculate_program_cost("msds", &options).expect("msds priced");
    let step = breakdown
        .step(DiscountKind::EmployerReimbursement)
        .expect("reimbursement step");
    assert_eq!(step.description, "$1,234.50/year for 2 year(s)");
}
