//! Cost breakdown model

use super::{CreditModel, DiscountKind, DiscountStep};
use serde::{Deserialize, Serialize};

/// Itemized estimate produced by the pricing engine.
///
/// Built fresh on every input change and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// Program code the estimate is for
    pub program_code: String,

    /// Price before any reduction
    pub base_price: f64,

    /// Applied reductions, in application order
    pub steps: Vec<DiscountStep>,

    /// Price after every reduction, never negative
    pub final_price: f64,

    /// `round((base - final) / base * 100)`
    pub percent_saved: u32,

    /// Program duration in years
    pub duration_years: f64,

    /// Echo of the program's credit model
    pub credits: CreditModel,
}

impl CostBreakdown {
    /// Total dollars removed by all steps
    #[must_use]
    pub fn total_savings(&self) -> f64 {
        self.base_price - self.final_price
    }

    /// The step produced by a given discount, if it was applied
    #[must_use]
    pub fn step(&self, kind: DiscountKind) -> Option<&DiscountStep> {
        self.steps.iter().find(|step| step.discount == kind)
    }

    /// Whether any reduction applied
    #[must_use]
    pub fn has_savings(&self) -> bool {
        !self.steps.is_empty()
    }
}
