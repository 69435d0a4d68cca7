//! Stage progress and advancement checks

use super::selection::total_credits;
use crate::core::catalog::CourseCatalog;
use crate::core::models::{CertificateStage, Course, StageRequirement};
use serde::Serialize;

/// Progress through one stage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageProgress {
    /// Stage
    pub stage: CertificateStage,
    /// Courses selected for the stage
    pub selected_courses: usize,
    /// Credits selected for the stage
    pub selected_credits: f32,
    /// Courses required
    pub required_courses: usize,
    /// Credits required
    pub required_credits: f32,
    /// Both thresholds met or exceeded
    pub complete: bool,
    /// `min(course ratio, credit ratio) * 100`, capped at 100
    pub percent: f32,
    /// Whether the previous stage is complete (stage 1 is always unlocked)
    pub unlocked: bool,
}

/// Progress for a single stage, before unlock state is known
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn measure(requirement: &StageRequirement, selection: &[&Course]) -> StageProgress {
    let selected_courses = selection.len();
    let selected_credits = total_credits(selection);
    let course_ratio = selected_courses as f32 / requirement.required_courses as f32;
    let credit_ratio = selected_credits / requirement.required_credits;

    StageProgress {
        stage: requirement.stage,
        selected_courses,
        selected_credits,
        required_courses: requirement.required_courses,
        required_credits: requirement.required_credits,
        complete: requirement.is_met_by(selected_courses, selected_credits),
        percent: (course_ratio.min(credit_ratio) * 100.0).min(100.0),
        unlocked: true,
    }
}

/// Progress for all three stages. Each stage unlocks once the one before it
/// is complete.
#[must_use]
pub fn stage_progress(catalog: &CourseCatalog, selections: &[Vec<&Course>; 3]) -> [StageProgress; 3] {
    let mut progress = CertificateStage::ALL
        .map(|stage| measure(catalog.requirement(stage), &selections[stage.index()]));
    for stage in CertificateStage::ALL {
        if let Some(previous) = stage.previous() {
            progress[stage.index()].unlocked = progress[previous.index()].complete;
        }
    }
    progress
}

/// Whether a stage selection lets the wizard advance.
///
/// Advancing needs the exact course count and the exact credit total.
/// This is stricter than [`StageProgress::complete`], which accepts
/// anything at or above the thresholds.
// TODO: confirm with product whether advancing should accept overshoot like the progress display does
#[must_use]
pub fn meets_exactly(requirement: &StageRequirement, selection: &[&Course]) -> bool {
    requirement.is_exactly(selection.len(), total_credits(selection))
}
