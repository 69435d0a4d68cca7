//! Certificate stage model

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three credentialing stages of a pathway, in unlock order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CertificateStage {
    /// Stage 1: Professional Graduate Certificate
    ProfessionalGraduate,
    /// Stage 2: Graduate Certificate
    Graduate,
    /// Stage 3: Master's degree completion
    Masters,
}

impl CertificateStage {
    /// All stages in order
    pub const ALL: [Self; 3] = [Self::ProfessionalGraduate, Self::Graduate, Self::Masters];

    /// 1-based stage number
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::ProfessionalGraduate => 1,
            Self::Graduate => 2,
            Self::Masters => 3,
        }
    }

    /// Stage that must be complete before this one unlocks
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::ProfessionalGraduate => None,
            Self::Graduate => Some(Self::ProfessionalGraduate),
            Self::Masters => Some(Self::Graduate),
        }
    }

    /// Position in [`CertificateStage::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        self.number() as usize - 1
    }

    /// Stage for a 1-based number
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::ProfessionalGraduate),
            2 => Some(Self::Graduate),
            3 => Some(Self::Masters),
            _ => None,
        }
    }
}

impl fmt::Display for CertificateStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProfessionalGraduate => write!(f, "Professional Graduate Certificate"),
            Self::Graduate => write!(f, "Graduate Certificate"),
            Self::Masters => write!(f, "Master's Degree"),
        }
    }
}

/// Course and credit thresholds for one stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageRequirement {
    /// Stage these thresholds apply to
    pub stage: CertificateStage,

    /// Required number of courses
    pub required_courses: usize,

    /// Required number of credits
    pub required_credits: f32,
}

impl StageRequirement {
    /// Whether a selection meets or exceeds both thresholds
    #[must_use]
    pub fn is_met_by(&self, course_count: usize, credits: f32) -> bool {
        course_count >= self.required_courses && credits >= self.required_credits
    }

    /// Whether a selection hits both thresholds exactly
    #[must_use]
    pub fn is_exactly(&self, course_count: usize, credits: f32) -> bool {
        course_count == self.required_courses
            && (credits - self.required_credits).abs() < f32::EPSILON
    }

    /// Whether adding one more course of `extra_credits` would overshoot
    #[must_use]
    pub fn would_exceed(&self, course_count: usize, credits: f32, extra_credits: f32) -> bool {
        course_count + 1 > self.required_courses
            || credits + extra_credits > self.required_credits + f32::EPSILON
    }
}
