//! Course catalog and pillar/track taxonomy

use super::{read_file, CatalogError};
use crate::core::models::{CertificateStage, Course, Pillar, StageRequirement, Track};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

/// Compiled-in catalog
const CATALOG_DATA: &str = include_str!("../../assets/catalog.toml");

static BUILTIN: LazyLock<CourseCatalog> = LazyLock::new(|| {
    CourseCatalog::from_toml(CATALOG_DATA).expect("Failed to parse compiled-in course catalog")
});

/// On-disk shape of a catalog document
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    recommended_order: Vec<String>,
    stages: Vec<StageRequirement>,
    pillars: Vec<Pillar>,
    tracks: Vec<Track>,
    courses: Vec<Course>,
}

/// Validated course catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CourseCatalog {
    /// Requirements indexed by [`CertificateStage::index`]
    requirements: [StageRequirement; 3],
    pillars: Vec<Pillar>,
    tracks: Vec<Track>,
    courses: Vec<Course>,
    recommended_order: Vec<String>,
}

impl CourseCatalog {
    /// The catalog compiled into the binary
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Parse and validate a catalog from TOML
    ///
    /// # Errors
    /// Returns an error if the TOML does not match the schema or the data is invalid
    pub fn from_toml(toml_str: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(toml_str)?;
        Self::try_from(file)
    }

    /// Load a catalog from a TOML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is invalid
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        Self::from_toml(&read_file(path)?)
    }

    /// Thresholds for a stage
    #[must_use]
    pub fn requirement(&self, stage: CertificateStage) -> &StageRequirement {
        &self.requirements[stage.index()]
    }

    /// Look up a course by id
    #[must_use]
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// All courses in catalog order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Look up a pillar by id
    #[must_use]
    pub fn pillar(&self, id: &str) -> Option<&Pillar> {
        self.pillars.iter().find(|p| p.id == id)
    }

    /// All pillars
    #[must_use]
    pub fn pillars(&self) -> &[Pillar] {
        &self.pillars
    }

    /// Look up a track by id
    #[must_use]
    pub fn track(&self, id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// All tracks
    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Tracks inside one pillar
    pub fn tracks_for_pillar<'a>(&'a self, pillar: &'a str) -> impl Iterator<Item = &'a Track> + 'a {
        self.tracks.iter().filter(move |t| t.pillar == pillar)
    }

    /// Courses inside one pillar
    pub fn courses_in_pillar<'a>(&'a self, pillar: &'a str) -> impl Iterator<Item = &'a Course> + 'a {
        self.courses.iter().filter(move |c| c.belongs_to(pillar))
    }

    /// Ids of the suggested study order, as authored
    #[must_use]
    pub fn recommended_ids(&self) -> &[String] {
        &self.recommended_order
    }
}

impl TryFrom<CatalogFile> for CourseCatalog {
    type Error = CatalogError;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        let requirements = collect_requirements(file.stages)?;

        let mut pillar_ids = HashSet::new();
        for pillar in &file.pillars {
            if !pillar_ids.insert(pillar.id.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate pillar '{}'",
                    pillar.id
                )));
            }
        }

        let mut track_ids = HashSet::new();
        for track in &file.tracks {
            if !track_ids.insert(track.id.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate track '{}'",
                    track.id
                )));
            }
            if !pillar_ids.contains(track.pillar.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "track '{}' references unknown pillar '{}'",
                    track.id, track.pillar
                )));
            }
        }

        let mut course_ids = HashSet::new();
        for course in &file.courses {
            if !course_ids.insert(course.id.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate course '{}'",
                    course.id
                )));
            }
            if course.pillars.is_empty() {
                return Err(CatalogError::Invalid(format!(
                    "course '{}' belongs to no pillar",
                    course.id
                )));
            }
            if let Some(unknown) = course
                .pillars
                .iter()
                .find(|p| !pillar_ids.contains(p.as_str()))
            {
                return Err(CatalogError::Invalid(format!(
                    "course '{}' references unknown pillar '{unknown}'",
                    course.id
                )));
            }
            if course.credits.is_nan() || course.credits <= 0.0 {
                return Err(CatalogError::Invalid(format!(
                    "course '{}' must carry positive credits",
                    course.id
                )));
            }
        }

        Ok(Self {
            requirements,
            pillars: file.pillars,
            tracks: file.tracks,
            courses: file.courses,
            recommended_order: file.recommended_order,
        })
    }
}

/// Place one requirement per stage, in stage order
fn collect_requirements(
    stages: Vec<StageRequirement>,
) -> Result<[StageRequirement; 3], CatalogError> {
    let mut slots: [Option<StageRequirement>; 3] = [None, None, None];
    for requirement in stages {
        if requirement.required_courses == 0 || requirement.required_credits <= 0.0 {
            return Err(CatalogError::Invalid(format!(
                "stage '{}' must require at least one course and some credits",
                requirement.stage
            )));
        }
        let slot = &mut slots[requirement.stage.index()];
        if slot.is_some() {
            return Err(CatalogError::Invalid(format!(
                "stage '{}' is defined twice",
                requirement.stage
            )));
        }
        *slot = Some(requirement);
    }

    let [first, second, third] = slots;
    match (first, second, third) {
        (Some(a), Some(b), Some(c)) => Ok([a, b, c]),
        (a, b, _) => {
            let missing = if a.is_none() {
                CertificateStage::ProfessionalGraduate
            } else if b.is_none() {
                CertificateStage::Graduate
            } else {
                CertificateStage::Masters
            };
            Err(CatalogError::Invalid(format!(
                "missing requirement for stage '{missing}'"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINI: &str = r#"
recommended_order = ["A-1", "GHOST"]

[[stages]]
stage = "professional-graduate"
required_courses = 2
required_credits = 6.0

[[stages]]
stage = "graduate"
required_courses = 1
required_credits = 3.0

[[stages]]
stage = "masters"
required_courses = 1
required_credits = 3.0

[[pillars]]
id = "a"
name = "Pillar A"

[[tracks]]
id = "t"
name = "Track"
pillar = "a"

[[courses]]
id = "A-1"
title = "Course One"
duration = "8 weeks"
credits = 3.0
level = "foundation"
pillars = ["a"]
certificates = ["professional-graduate"]
"#;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = CourseCatalog::builtin();
        assert_eq!(catalog.pillars().len(), 4);
        assert_eq!(catalog.tracks().len(), 8);
        assert!(catalog.course("AI-501").is_some());
        assert_eq!(catalog.track("genai").map(|t| t.pillar.as_str()), Some("ai"));
    }

    #[test]
    fn test_builtin_stage_requirements() {
        let catalog = CourseCatalog::builtin();
        let stage_one = catalog.requirement(CertificateStage::ProfessionalGraduate);
        assert_eq!(stage_one.required_courses, 4);
        assert!((stage_one.required_credits - 12.0).abs() < f32::EPSILON);
        assert_eq!(
            catalog.requirement(CertificateStage::Masters).stage,
            CertificateStage::Masters
        );
    }

    #[test]
    fn test_tracks_for_pillar() {
        let catalog = CourseCatalog::builtin();
        let ids: Vec<&str> = catalog.tracks_for_pillar("cyber").map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["security-ops", "cloud-security"]);
    }

    #[test]
    fn test_mini_catalog() {
        let catalog = CourseCatalog::from_toml(MINI).expect("mini catalog parses");
        assert_eq!(catalog.courses().len(), 1);
        assert_eq!(catalog.recommended_ids(), ["A-1", "GHOST"]);
    }

    #[test]
    fn test_unknown_pillar_rejected() {
        let broken = MINI.replace("pillar = \"a\"", "pillar = \"zzz\"");
        let err = CourseCatalog::from_toml(&broken).expect_err("unknown pillar");
        assert!(err.to_string().contains("unknown pillar 'zzz'"));
    }

    #[test]
    fn test_missing_stage_rejected() {
        let broken = MINI.replace("stage = \"masters\"", "stage = \"graduate\"");
        let err = CourseCatalog::from_toml(&broken).expect_err("duplicate stage");
        assert!(err.to_string().contains("defined twice"));
    }
}
