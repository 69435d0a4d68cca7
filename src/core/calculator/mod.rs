//! Tuition calculator component.
//!
//! Owns the four discount inputs, recomputes the breakdown through the
//! pricing engine on every change, and tells the outside world about it
//! through exactly two channels: the cost-change listener and the analytics
//! sink. Every presentation shell wraps this one type.

pub mod shell;

pub use shell::{CalculatorShell, ModalSession, ScrollGuard, ScrollLock};

use crate::core::analytics::{AnalyticsEvent, AnalyticsSink, TUITION_CALCULATOR_UPDATE};
use crate::core::catalog::PricingTable;
use crate::core::models::{CostBreakdown, DiscountOptions};
use crate::core::pricing::calculate_program_cost_with;
use crate::debug;
use serde_json::json;

type CostListener<'a> = Box<dyn FnMut(&CostBreakdown) + 'a>;

/// Interactive tuition estimate for one program
pub struct TuitionCalculator<'a> {
    table: &'a PricingTable,
    analytics: &'a dyn AnalyticsSink,
    source: &'static str,
    program_code: String,
    workforce_partner: bool,
    hoboken_resident: bool,
    stevens_alumni: bool,
    /// Raw reimbursement input; empty means "none entered"
    reimbursement: String,
    breakdown: Option<CostBreakdown>,
    listener: Option<CostListener<'a>>,
}

impl<'a> TuitionCalculator<'a> {
    /// Create a calculator for a program with every discount off.
    ///
    /// The initial breakdown is computed immediately but nothing is
    /// announced until an input changes or a listener is attached.
    #[must_use]
    pub fn new(table: &'a PricingTable, program_code: &str, analytics: &'a dyn AnalyticsSink) -> Self {
        let mut calculator = Self {
            table,
            analytics,
            source: "inline",
            program_code: program_code.to_string(),
            workforce_partner: false,
            hoboken_resident: false,
            stevens_alumni: false,
            reimbursement: String::new(),
            breakdown: None,
            listener: None,
        };
        calculator.breakdown = calculator.compute();
        calculator
    }

    /// Label the surface this calculator is embedded in (used in analytics)
    #[must_use]
    pub fn with_source(mut self, source: &'static str) -> Self {
        self.source = source;
        self
    }

    /// Attach the cost-change listener. It is called right away with the
    /// current breakdown (if the program is priced) so the parent starts in sync.
    #[must_use]
    pub fn with_cost_listener(mut self, listener: impl FnMut(&CostBreakdown) + 'a) -> Self {
        self.listener = Some(Box::new(listener));
        self.notify();
        self
    }

    /// Current breakdown; `None` means "no pricing available" and the
    /// surface renders nothing
    #[must_use]
    pub const fn breakdown(&self) -> Option<&CostBreakdown> {
        self.breakdown.as_ref()
    }

    /// Program being estimated
    #[must_use]
    pub fn program_code(&self) -> &str {
        &self.program_code
    }

    /// Raw reimbursement input as shown in the field
    #[must_use]
    pub fn reimbursement_input(&self) -> &str {
        &self.reimbursement
    }

    /// Whether the workforce partner toggle is offered (never for certificates)
    #[must_use]
    pub fn offers_workforce_partner(&self) -> bool {
        !self.table.is_certificate(&self.program_code)
    }

    /// Options currently in effect
    #[must_use]
    pub fn options(&self) -> DiscountOptions {
        DiscountOptions {
            is_workforce_partner: self.workforce_partner,
            is_hoboken_resident: self.hoboken_resident,
            is_stevens_alumni: self.stevens_alumni,
            annual_reimbursement: self.reimbursement.parse::<f64>().ok(),
        }
    }

    /// Switch to another program, keeping the discount inputs
    pub fn set_program(&mut self, program_code: &str) {
        program_code.clone_into(&mut self.program_code);
        self.recalculate();
    }

    /// Toggle the workforce partner discount
    pub fn set_workforce_partner(&mut self, enabled: bool) {
        self.workforce_partner = enabled;
        self.recalculate();
    }

    /// Toggle the Hoboken resident discount
    pub fn set_hoboken_resident(&mut self, enabled: bool) {
        self.hoboken_resident = enabled;
        self.recalculate();
    }

    /// Toggle the alumni discount
    pub fn set_stevens_alumni(&mut self, enabled: bool) {
        self.stevens_alumni = enabled;
        self.recalculate();
    }

    /// Update the reimbursement field. The value is clamped to
    /// `[0, max_annual]`; anything that is not a number clears the field.
    pub fn set_reimbursement(&mut self, raw: &str) {
        self.reimbursement = sanitize_reimbursement(
            raw,
            self.table.discounts.employer_reimbursement.max_annual,
        );
        self.recalculate();
    }

    fn compute(&self) -> Option<CostBreakdown> {
        calculate_program_cost_with(self.table, &self.program_code, &self.options())
    }

    fn recalculate(&mut self) {
        self.breakdown = self.compute();
        self.notify();
        self.track();
    }

    fn notify(&mut self) {
        if let (Some(listener), Some(breakdown)) = (self.listener.as_mut(), self.breakdown.as_ref()) {
            listener(breakdown);
        }
    }

    fn track(&self) {
        let options = self.options();
        let payload = json!({
            "source": self.source,
            "program": self.program_code,
            "pricing_available": self.breakdown.is_some(),
            "discounts": options.active_kinds(),
            "workforce_partner": options.is_workforce_partner,
            "hoboken_resident": options.is_hoboken_resident,
            "stevens_alumni": options.is_stevens_alumni,
            "annual_reimbursement": options.annual_reimbursement,
            "final_price": self.breakdown.as_ref().map(|b| b.final_price),
        });
        debug!("Calculator update from {} for '{}'", self.source, self.program_code);
        self.analytics
            .track(AnalyticsEvent::new(TUITION_CALCULATOR_UPDATE, payload));
    }
}

/// Normalize user input for the reimbursement field.
///
/// Empty stays empty, `$` and `,` are ignored, non-numbers clear the field,
/// numbers are clamped to `[0, max_annual]`.
#[must_use]
pub fn sanitize_reimbursement(raw: &str, max_annual: f64) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return String::new();
    }
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => value.clamp(0.0, max_annual.max(0.0)).to_string(),
        _ => String::new(),
    }
}
