//! Program pricing table and discount rules

use super::{read_file, CatalogError};
use crate::core::models::{DiscountRuleSet, PricingRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

/// Compiled-in pricing table
const PRICING_DATA: &str = include_str!("../../assets/pricing.toml");

static BUILTIN: LazyLock<PricingTable> = LazyLock::new(|| {
    PricingTable::from_toml(PRICING_DATA).expect("Failed to parse compiled-in pricing table")
});

/// Every offered program plus the discount rules that apply to them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTable {
    /// Discount rules
    pub discounts: DiscountRuleSet,

    /// Programs in display order
    programs: Vec<PricingRecord>,
}

impl PricingTable {
    /// The table compiled into the binary
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Build a table from parts, validating it
    ///
    /// # Errors
    /// Returns [`CatalogError::Invalid`] if the data breaks an invariant
    pub fn new(discounts: DiscountRuleSet, programs: Vec<PricingRecord>) -> Result<Self, CatalogError> {
        let table = Self { discounts, programs };
        table.validate()?;
        Ok(table)
    }

    /// Parse and validate a pricing table from TOML
    ///
    /// # Errors
    /// Returns an error if the TOML does not match the schema or the data is invalid
    pub fn from_toml(toml_str: &str) -> Result<Self, CatalogError> {
        let table: Self = toml::from_str(toml_str)?;
        table.validate()?;
        Ok(table)
    }

    /// Load a pricing table from a TOML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is invalid
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        Self::from_toml(&read_file(path)?)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let rules = &self.discounts;
        for (label, pct) in [
            ("workforce_partner", rules.workforce_partner),
            ("hoboken_resident", rules.hoboken_resident),
            ("alumni", rules.alumni),
        ] {
            if !(0.0..=1.0).contains(&pct) {
                return Err(CatalogError::Invalid(format!(
                    "discount '{label}' must be between 0 and 1, got {pct}"
                )));
            }
        }
        let cap = rules.employer_reimbursement.max_annual;
        if !cap.is_finite() || cap < 0.0 {
            return Err(CatalogError::Invalid(format!(
                "employer reimbursement cap must be a non-negative amount, got {cap}"
            )));
        }
        if rules.certificate_prefix.is_empty() {
            return Err(CatalogError::Invalid(
                "certificate prefix must not be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for program in &self.programs {
            if !seen.insert(program.code.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate program code '{}'",
                    program.code
                )));
            }
            if program.duration_years.is_nan() || program.duration_years <= 0.0 {
                return Err(CatalogError::Invalid(format!(
                    "program '{}' must have a positive duration",
                    program.code
                )));
            }
            let base = program.base_price();
            if !base.is_finite() || base < 0.0 {
                return Err(CatalogError::Invalid(format!(
                    "program '{}' has an invalid base price {base}",
                    program.code
                )));
            }
        }
        Ok(())
    }

    /// Look up a program by code
    #[must_use]
    pub fn program(&self, code: &str) -> Option<&PricingRecord> {
        self.programs.iter().find(|p| p.code == code)
    }

    /// All programs in display order
    #[must_use]
    pub fn programs(&self) -> &[PricingRecord] {
        &self.programs
    }

    /// Whether a program code names a certificate
    #[must_use]
    pub fn is_certificate(&self, code: &str) -> bool {
        self.discounts.is_certificate(code)
    }
}
