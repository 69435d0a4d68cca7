//! Program pricing model

use serde::{Deserialize, Serialize};

/// How a program counts credits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "lowercase")]
pub enum CreditModel {
    /// A fixed credit count (e.g., a 12-credit certificate)
    Fixed {
        /// Total credits
        credits: f32,
    },
    /// A credit range; estimates always use `typical`
    Variable {
        /// Fewest credits a student may complete the program with
        min: f32,
        /// Credit count used for default estimates
        typical: f32,
        /// Most credits a student may take
        max: f32,
    },
}

impl CreditModel {
    /// Credit count used for default estimates
    #[must_use]
    pub const fn default_credits(&self) -> f32 {
        match self {
            Self::Fixed { credits } => *credits,
            Self::Variable { typical, .. } => *typical,
        }
    }

    /// Human-readable descriptor (e.g., "36 credits" or "30-42 credits")
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Fixed { credits } => format!("{credits} credits"),
            Self::Variable { min, max, .. } => format!("{min}-{max} credits"),
        }
    }
}

/// How a program is priced
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceModel {
    /// Priced per credit
    PerCredit {
        /// Dollars per credit
        rate: f64,
    },
    /// One flat program price
    Flat {
        /// Total dollars
        amount: f64,
    },
}

/// Pricing record for a single program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRecord {
    /// Program code, unique across the table (e.g., "mba", "cert-eai")
    pub code: String,

    /// Display name
    pub name: String,

    /// Credit model
    pub credits: CreditModel,

    /// Price model
    pub price: PriceModel,

    /// Program duration in years (multiplies the annual reimbursement cap)
    #[serde(alias = "duration_years")]
    pub duration_years: f64,
}

impl PricingRecord {
    /// Base price before any discount
    #[must_use]
    pub fn base_price(&self) -> f64 {
        match self.price {
            PriceModel::Flat { amount } => amount,
            PriceModel::PerCredit { rate } => rate * f64::from(self.credits.default_credits()),
        }
    }
}
