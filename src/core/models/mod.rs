//! Data models for `Pathways`

pub mod breakdown;
pub mod course;
pub mod discount;
pub mod pillar;
pub mod program;
pub mod stage;

pub use breakdown::CostBreakdown;
pub use course::{Course, CourseLevel};
pub use discount::{
    DiscountKind, DiscountOptions, DiscountRuleSet, DiscountStep, EmployerReimbursement, StepKind,
    DISCOUNT_ORDER,
};
pub use pillar::{Pillar, Track};
pub use program::{CreditModel, PriceModel, PricingRecord};
pub use stage::{CertificateStage, StageRequirement};
