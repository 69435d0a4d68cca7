//! Course model

use super::CertificateStage;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Course level, ordered from introductory to advanced
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    /// Introductory material
    Foundation,
    /// Working practitioner level
    Practitioner,
    /// Advanced or manager level
    #[serde(alias = "manager")]
    Advanced,
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Foundation => write!(f, "Foundation"),
            Self::Practitioner => write!(f, "Practitioner"),
            Self::Advanced => write!(f, "Advanced"),
        }
    }
}

/// Represents a course in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course id (e.g., "AI-501")
    pub id: String,

    /// Course title (e.g., "Foundations of Machine Learning")
    pub title: String,

    /// Duration label (e.g., "8 weeks")
    pub duration: String,

    /// Credit count (can be fractional)
    pub credits: f32,

    /// Course level
    pub level: CourseLevel,

    /// Pillars this course belongs to; more than one makes it cross-pillar
    pub pillars: Vec<String>,

    /// Certificate stages this course can count toward
    pub certificates: Vec<CertificateStage>,

    /// Catalog description
    #[serde(default)]
    pub description: String,

    /// Learning outcomes
    #[serde(default)]
    pub outcomes: Vec<String>,
}

impl Course {
    /// Create a new course with no description or outcomes
    ///
    /// # Arguments
    /// * `id` - Course id
    /// * `title` - Course title
    /// * `credits` - Credit count
    /// * `level` - Course level
    #[must_use]
    pub fn new(id: String, title: String, credits: f32, level: CourseLevel) -> Self {
        Self {
            id,
            title,
            duration: String::new(),
            credits,
            level,
            pillars: Vec::new(),
            certificates: Vec::new(),
            description: String::new(),
            outcomes: Vec::new(),
        }
    }

    /// Add a pillar membership
    #[must_use]
    pub fn in_pillar(mut self, pillar: &str) -> Self {
        if !self.belongs_to(pillar) {
            self.pillars.push(pillar.to_string());
        }
        self
    }

    /// Add a certificate stage membership
    #[must_use]
    pub fn counts_toward(mut self, stage: CertificateStage) -> Self {
        if !self.certificates.contains(&stage) {
            self.certificates.push(stage);
        }
        self
    }

    /// Whether the course belongs to a pillar
    #[must_use]
    pub fn belongs_to(&self, pillar: &str) -> bool {
        self.pillars.iter().any(|p| p == pillar)
    }

    /// Whether the course belongs to more than one pillar
    #[must_use]
    pub fn is_cross_pillar(&self) -> bool {
        self.pillars.len() > 1
    }

    /// Whether the course can count toward a certificate stage
    #[must_use]
    pub fn is_offered_for(&self, stage: CertificateStage) -> bool {
        self.certificates.contains(&stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Course {
        Course::new(
            "DS-610".to_string(),
            "Data Engineering for AI".to_string(),
            3.0,
            CourseLevel::Practitioner,
        )
    }

    #[test]
    fn test_course_creation() {
        let course = sample();
        assert_eq!(course.id, "DS-610");
        assert!((course.credits - 3.0).abs() < f32::EPSILON);
        assert!(course.pillars.is_empty());
        assert!(course.certificates.is_empty());
        assert!(!course.is_cross_pillar());
    }

    #[test]
    fn test_cross_pillar() {
        let course = sample().in_pillar("data").in_pillar("ai").in_pillar("data");
        assert_eq!(course.pillars, vec!["data", "ai"]);
        assert!(course.is_cross_pillar());
        assert!(course.belongs_to("ai"));
        assert!(!course.belongs_to("cyber"));
    }

    #[test]
    fn test_certificate_membership() {
        let course = sample().counts_toward(CertificateStage::Graduate);
        assert!(course.is_offered_for(CertificateStage::Graduate));
        assert!(!course.is_offered_for(CertificateStage::ProfessionalGraduate));
    }

    #[test]
    fn test_level_ordering() {
        assert!(CourseLevel::Foundation < CourseLevel::Practitioner);
        assert!(CourseLevel::Practitioner < CourseLevel::Advanced);
    }

    #[test]
    fn test_manager_alias() {
        #[derive(Deserialize)]
        struct Wrapper {
            level: CourseLevel,
        }
        let parsed: Wrapper = toml::from_str("level = \"manager\"").expect("alias parses");
        assert_eq!(parsed.level, CourseLevel::Advanced);
    }
}
