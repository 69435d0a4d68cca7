//! Which courses each stage offers

use crate::core::catalog::CourseCatalog;
use crate::core::models::{CertificateStage, Course};

/// Whether a course may be picked for a stage under the selected pillar.
///
/// Stages 1 and 2 only offer courses tagged for their certificate inside the
/// selected pillar. Stage 3 offers the whole catalog.
#[must_use]
pub fn is_eligible(course: &Course, stage: CertificateStage, pillar: Option<&str>) -> bool {
    match stage {
        CertificateStage::ProfessionalGraduate | CertificateStage::Graduate => {
            pillar.is_some_and(|p| course.belongs_to(p)) && course.is_offered_for(stage)
        }
        CertificateStage::Masters => true,
    }
}

/// Courses offered for a stage, excluding anything already selected in any
/// stage.
///
/// Stage 2 lists cross-pillar courses first; within each group catalog
/// order is kept.
#[must_use]
pub fn available_courses<'c>(
    catalog: &'c CourseCatalog,
    stage: CertificateStage,
    pillar: Option<&str>,
    selected: &[&Course],
) -> Vec<&'c Course> {
    let mut courses: Vec<&Course> = catalog
        .courses()
        .iter()
        .filter(|course| is_eligible(course, stage, pillar))
        .filter(|course| !selected.iter().any(|s| s.id == course.id))
        .collect();

    if stage == CertificateStage::Graduate {
        courses.sort_by_key(|course| !course.is_cross_pillar());
    }
    courses
}

/// Sum of credits across a selection
#[must_use]
pub fn total_credits(courses: &[&Course]) -> f32 {
    courses.iter().map(|c| c.credits).sum()
}
