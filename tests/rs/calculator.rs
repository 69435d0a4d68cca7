//! Integration tests for the calculator component, its shells, modal
//! lifecycle and the session handoff

use std::cell::RefCell;
use tuition_pathways::core::analytics::{
    RecordingSink, MODAL_CLOSE, MODAL_OPEN, PROGRAM_SELECTED, TUITION_CALCULATOR_UPDATE,
};
use tuition_pathways::core::calculator::{CalculatorShell, ModalSession, ScrollLock, TuitionCalculator};
use tuition_pathways::core::catalog::PricingTable;
use tuition_pathways::core::models::{CostBreakdown, DiscountKind};
use tuition_pathways::core::session::{
    clear_selected_program, selected_program, MemorySessionStore, SessionStore,
    SELECTED_PARTNER_KEY,
};

#[test]
fn listener_tracks_final_price_through_edits() {
    let sink = RecordingSink::new();
    let prices = RefCell::new(Vec::new());
    let mut calc = TuitionCalculator::new(PricingTable::builtin(), "mba", &sink)
        .with_source("inline")
        .with_cost_listener(|b: &CostBreakdown| prices.borrow_mut().push(b.final_price));

    calc.set_workforce_partner(true);
    calc.set_stevens_alumni(true);
    calc.set_reimbursement("$50,000");
    assert_eq!(calc.reimbursement_input(), "20500");
    calc.set_workforce_partner(false);
    drop(calc);

    let prices = prices.into_inner();
    assert_eq!(prices.len(), 5);
    assert!((prices[0] - 50_000.0).abs() < 1e-6);
    assert!((prices[1] - 40_000.0).abs() < 1e-6);
    assert!((prices[2] - 34_000.0).abs() < 1e-6);
    // 34,000 left, reimbursement worth 41,000 over two years
    assert!(prices[3].abs() < 1e-6);
    // 50,000 less 15% is 42,500; the reimbursement covers all but 1,500
    assert!((prices[4] - 1_500.0).abs() < 1e-6);

    let names = sink.names();
    assert_eq!(names.len(), 4);
    assert!(names.iter().all(|n| n == TUITION_CALCULATOR_UPDATE));
}

#[test]
fn switching_program_keeps_inputs() {
    let sink = RecordingSink::new();
    let mut calc = TuitionCalculator::new(PricingTable::builtin(), "mba", &sink);
    calc.set_workforce_partner(true);
    calc.set_program("cert-cyber");

    let breakdown = calc.breakdown().expect("cert-cyber priced");
    assert!(breakdown.step(DiscountKind::WorkforcePartner).is_none());
    assert!(calc.options().is_workforce_partner);

    calc.set_program("mscs");
    let breakdown = calc.breakdown().expect("mscs priced");
    assert!(breakdown.step(DiscountKind::WorkforcePartner).is_some());
    assert_eq!(sink.last().map(|e| e.payload["program"].clone()), Some("mscs".into()));
}

#[test]
fn corporate_landing_hands_program_to_application_page() {
    let sink = RecordingSink::new();
    let table = PricingTable::builtin();
    let mut store = MemorySessionStore::new();
    let mut shell = CalculatorShell::CorporateLanding {
        partner: "Initech".to_string(),
        program_codes: vec!["cert-dsa".to_string(), "msds".to_string()],
        selected: 0,
    };

    assert!(shell.select_program(1, table, &mut store, &sink));
    assert_eq!(sink.names(), vec![PROGRAM_SELECTED]);

    let mut calc = shell.calculator(table, &sink);
    calc.set_hoboken_resident(true);
    assert_eq!(calc.program_code(), "msds");
    assert_eq!(
        sink.last().map(|e| e.payload["source"].clone()),
        Some("corporate-landing".into())
    );

    // Application page reads the handoff back, then forgets it
    let record = selected_program(&store, table).expect("handed off");
    assert_eq!(record.code, "msds");
    assert_eq!(store.get(SELECTED_PARTNER_KEY).as_deref(), Some("Initech"));
    clear_selected_program(&mut store);
    assert!(selected_program(&store, table).is_none());
}

#[test]
fn modal_calculator_unlocks_on_close() {
    let sink = RecordingSink::new();
    let lock = ScrollLock::new();
    let shell = CalculatorShell::Modal {
        program_code: "msbia".to_string(),
        title: "Estimate your tuition".to_string(),
    };

    {
        let modal = ModalSession::open("tuition-calculator", &lock, &sink);
        assert!(lock.is_locked());
        let mut calc = shell.calculator(PricingTable::builtin(), &sink);
        calc.set_stevens_alumni(true);
        assert_eq!(modal.name(), "tuition-calculator");
    }

    assert!(!lock.is_locked());
    assert_eq!(
        sink.names(),
        vec![MODAL_OPEN, TUITION_CALCULATOR_UPDATE, MODAL_CLOSE]
    );
}
