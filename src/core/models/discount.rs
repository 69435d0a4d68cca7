//! Discount rules, eligibility options and breakdown steps

use serde::{Deserialize, Serialize};

/// The kinds of discount the estimator knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiscountKind {
    /// Employer is a workforce partner (non-certificate programs only)
    WorkforcePartner,
    /// Student lives in Hoboken
    HobokenResident,
    /// Student is an alumnus
    StevensAlumni,
    /// Employer tuition reimbursement (flat dollars, not a percentage)
    EmployerReimbursement,
}

/// Order in which discounts are applied to the running balance.
///
/// Percentage discounts compound, so each one is taken from whatever the
/// previous steps left over. Changing this order changes the dollar amount
/// of every step after the first.
pub const DISCOUNT_ORDER: [DiscountKind; 4] = [
    DiscountKind::WorkforcePartner,
    DiscountKind::HobokenResident,
    DiscountKind::StevensAlumni,
    DiscountKind::EmployerReimbursement,
];

impl DiscountKind {
    /// Step title shown in the breakdown
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WorkforcePartner => "Workforce Partner Discount",
            Self::HobokenResident => "Hoboken Resident Discount",
            Self::StevensAlumni => "Stevens Alumni Discount",
            Self::EmployerReimbursement => "Employer Tuition Reimbursement",
        }
    }

    /// Icon tag rendered next to the step
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::WorkforcePartner => "building",
            Self::HobokenResident => "home",
            Self::StevensAlumni => "graduation-cap",
            Self::EmployerReimbursement => "briefcase",
        }
    }
}

/// Employer reimbursement rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerReimbursement {
    /// Largest annual amount counted, in dollars
    #[serde(alias = "max_annual")]
    pub max_annual: f64,
}

/// Static discount configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountRuleSet {
    /// Workforce partner percentage as a fraction (0.20 = 20%)
    #[serde(alias = "workforce_partner")]
    pub workforce_partner: f64,

    /// Hoboken resident percentage as a fraction
    #[serde(alias = "hoboken_resident")]
    pub hoboken_resident: f64,

    /// Alumni percentage as a fraction
    pub alumni: f64,

    /// Employer reimbursement rule
    #[serde(alias = "employer_reimbursement")]
    pub employer_reimbursement: EmployerReimbursement,

    /// Program code prefix identifying certificates (e.g., "cert-")
    #[serde(alias = "certificate_prefix")]
    pub certificate_prefix: String,
}

impl DiscountRuleSet {
    /// Percentage for a percentage-based discount kind; `None` for reimbursement
    #[must_use]
    pub const fn percentage(&self, kind: DiscountKind) -> Option<f64> {
        match kind {
            DiscountKind::WorkforcePartner => Some(self.workforce_partner),
            DiscountKind::HobokenResident => Some(self.hoboken_resident),
            DiscountKind::StevensAlumni => Some(self.alumni),
            DiscountKind::EmployerReimbursement => None,
        }
    }

    /// Whether a program code names a certificate
    #[must_use]
    pub fn is_certificate(&self, program_code: &str) -> bool {
        program_code.starts_with(&self.certificate_prefix)
    }
}

/// Discount eligibility flags and amounts supplied by the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiscountOptions {
    /// Employer is a workforce partner
    pub is_workforce_partner: bool,
    /// Lives in Hoboken
    pub is_hoboken_resident: bool,
    /// Is an alumnus
    pub is_stevens_alumni: bool,
    /// Annual employer reimbursement in dollars, if any
    pub annual_reimbursement: Option<f64>,
}

impl DiscountOptions {
    /// Whether the user asked for a given discount kind
    #[must_use]
    pub fn requests(&self, kind: DiscountKind) -> bool {
        match kind {
            DiscountKind::WorkforcePartner => self.is_workforce_partner,
            DiscountKind::HobokenResident => self.is_hoboken_resident,
            DiscountKind::StevensAlumni => self.is_stevens_alumni,
            DiscountKind::EmployerReimbursement => self.reimbursement().is_some(),
        }
    }

    /// Usable reimbursement amount: positive and finite, otherwise `None`
    #[must_use]
    pub fn reimbursement(&self) -> Option<f64> {
        self.annual_reimbursement
            .filter(|amount| amount.is_finite() && *amount > 0.0)
    }

    /// Kinds the user has switched on, in application order
    #[must_use]
    pub fn active_kinds(&self) -> Vec<DiscountKind> {
        DISCOUNT_ORDER
            .iter()
            .copied()
            .filter(|kind| self.requests(*kind))
            .collect()
    }
}

/// Whether a breakdown step is a percentage discount or a flat reimbursement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Percentage of the running balance
    Discount,
    /// Flat dollar reduction
    Reimbursement,
}

/// One applied reduction in a cost breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountStep {
    /// Which discount produced this step
    pub discount: DiscountKind,
    /// Step title
    pub name: String,
    /// Short explanation (e.g., "20% off remaining tuition")
    pub description: String,
    /// Icon tag
    pub icon: String,
    /// Dollars subtracted by this step
    pub amount: f64,
    /// Step type tag
    #[serde(rename = "type")]
    pub kind: StepKind,
}
