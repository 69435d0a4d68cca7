//! Tuition estimate report

use super::{ReportFormat, ReportGenerator};
use crate::core::models::{CostBreakdown, PricingRecord, StepKind};
use crate::core::pricing::format_currency;
use askama::Template;
use std::error::Error;

/// One discount line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepLine {
    /// Discount name
    pub name: String,
    /// How the amount was derived
    pub description: String,
    /// Formatted amount removed
    pub amount: String,
    /// `discount` or `reimbursement`
    pub kind: &'static str,
}

/// A formatted tuition estimate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateReport {
    /// Program code
    pub program_code: String,
    /// Program name
    pub program_name: String,
    /// Credit description, e.g. `30-42 credits`
    pub credits: String,
    /// Duration, e.g. `2 years`
    pub duration: String,
    /// Formatted base price
    pub base_price: String,
    /// Applied discounts in order
    pub steps: Vec<StepLine>,
    /// Formatted final price
    pub final_price: String,
    /// Formatted total savings
    pub total_savings: String,
    /// Whole percent saved
    pub percent_saved: u32,
}

impl EstimateReport {
    /// Build the report view from a program record and its breakdown
    #[must_use]
    pub fn new(record: &PricingRecord, breakdown: &CostBreakdown) -> Self {
        let years = breakdown.duration_years;
        let duration = if (years - 1.0).abs() < f64::EPSILON {
            "1 year".to_string()
        } else {
            format!("{years} years")
        };
        Self {
            program_code: record.code.clone(),
            program_name: record.name.clone(),
            credits: breakdown.credits.describe(),
            duration,
            base_price: format_currency(breakdown.base_price),
            steps: breakdown
                .steps
                .iter()
                .map(|step| StepLine {
                    name: step.name.clone(),
                    description: step.description.clone(),
                    amount: format_currency(step.amount),
                    kind: match step.kind {
                        StepKind::Discount => "discount",
                        StepKind::Reimbursement => "reimbursement",
                    },
                })
                .collect(),
            final_price: format_currency(breakdown.final_price),
            total_savings: format_currency(breakdown.total_savings()),
            percent_saved: breakdown.percent_saved,
        }
    }
}

#[derive(Template)]
#[template(path = "estimate.md")]
struct EstimateMarkdown<'a> {
    r: &'a EstimateReport,
}

#[derive(Template)]
#[template(path = "estimate.html")]
struct EstimateHtml<'a> {
    r: &'a EstimateReport,
}

impl ReportGenerator for EstimateReport {
    fn render(&self, format: ReportFormat) -> Result<String, Box<dyn Error>> {
        let content = match format {
            ReportFormat::Markdown => EstimateMarkdown { r: self }.render()?,
            ReportFormat::Html => EstimateHtml { r: self }.render()?,
        };
        Ok(content)
    }
}
