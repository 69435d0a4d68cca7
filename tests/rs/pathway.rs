//! Integration tests for the learning pathway builder

use tuition_pathways::core::catalog::CourseCatalog;
use tuition_pathways::core::models::CertificateStage;
use tuition_pathways::core::pathway::{
    NoopObserver, PathChange, PathRecorder, PathwayBuilder, ToggleOutcome, WizardStep,
};

const STAGE_ONE: [&str; 4] = ["AI-501", "AI-502", "AI-503", "AI-504"];
const STAGE_TWO: [&str; 4] = ["AI-610", "AI-620", "AI-630", "AI-640"];
const STAGE_THREE: [&str; 2] = ["MS-700", "MS-710"];

fn ids(builder: &PathwayBuilder<'_>, stage: CertificateStage) -> Vec<String> {
    builder
        .available_courses(stage)
        .iter()
        .map(|c| c.id.clone())
        .collect()
}

fn fill(builder: &mut PathwayBuilder<'_>, stage: CertificateStage, courses: &[&str]) {
    for id in courses {
        assert_eq!(
            builder.toggle_course_for_stage(stage, id),
            ToggleOutcome::Added,
            "{id} should be added to {stage}"
        );
    }
}

#[test]
fn exact_stage_one_fill_unlocks_stage_two() {
    let mut builder = PathwayBuilder::new(CourseCatalog::builtin(), NoopObserver);
    assert!(!builder.can_proceed_to_next_step());
    assert!(builder.select_track("applied-ml"));
    assert!(builder.continue_to_next_step());
    assert_eq!(builder.step(), WizardStep::Stage1Selection);

    fill(&mut builder, CertificateStage::ProfessionalGraduate, &STAGE_ONE[..3]);
    assert!(!builder.can_proceed_to_next_step());
    fill(&mut builder, CertificateStage::ProfessionalGraduate, &STAGE_ONE[3..]);
    assert!(builder.can_proceed_to_next_step());

    // A fifth course is a no-op
    assert_eq!(
        builder.toggle_course_for_stage(CertificateStage::ProfessionalGraduate, "AI-505"),
        ToggleOutcome::Rejected
    );
    assert_eq!(builder.selection(CertificateStage::ProfessionalGraduate).len(), 4);

    assert!(builder.continue_to_next_step());
    assert_eq!(builder.step(), WizardStep::Stage2Selection);
    assert!(builder.stage_progress()[1].unlocked);
}

#[test]
fn stage_two_lists_cross_pillar_courses_first() {
    let mut builder = PathwayBuilder::new(CourseCatalog::builtin(), NoopObserver);
    builder.select_track("applied-ml");

    let listed = ids(&builder, CertificateStage::Graduate);
    assert_eq!(
        listed,
        vec!["AI-640", "DS-650", "TL-630", "AI-610", "AI-620", "AI-630"]
    );

    // Picking a cross-pillar course removes it from the list but keeps the order
    builder.toggle_course_for_stage(CertificateStage::Graduate, "DS-650");
    assert_eq!(
        ids(&builder, CertificateStage::Graduate),
        vec!["AI-640", "TL-630", "AI-610", "AI-620", "AI-630"]
    );
}

#[test]
fn course_cannot_sit_in_two_stages() {
    let mut builder = PathwayBuilder::new(CourseCatalog::builtin(), NoopObserver);
    builder.select_track("applied-ml");
    fill(&mut builder, CertificateStage::ProfessionalGraduate, &["AI-501"]);

    assert_eq!(
        builder.toggle_course_for_stage(CertificateStage::Masters, "AI-501"),
        ToggleOutcome::Rejected
    );
    assert!(!ids(&builder, CertificateStage::Masters).contains(&"AI-501".to_string()));
}

#[test]
fn credit_overflow_rejected_even_under_course_count() {
    let mut builder = PathwayBuilder::new(CourseCatalog::builtin(), NoopObserver);
    builder.select_track("genai");
    builder.continue_to_next_step();
    fill(&mut builder, CertificateStage::ProfessionalGraduate, &["AI-501", "AI-502", "AI-506"]);

    // 10.5 credits in three courses; a fourth 3-credit course would reach 13.5
    assert_eq!(
        builder.toggle_course_for_stage(CertificateStage::ProfessionalGraduate, "AI-503"),
        ToggleOutcome::Rejected
    );
    fill(&mut builder, CertificateStage::ProfessionalGraduate, &["AI-505"]);
    assert!(builder.can_proceed_to_next_step());
}

#[test]
fn full_path_mirrors_every_change() {
    let recorder = PathRecorder::new();
    let mut builder = PathwayBuilder::new(CourseCatalog::builtin(), recorder.clone());
    builder.select_track("applied-ml");
    builder.continue_to_next_step();

    fill(&mut builder, CertificateStage::ProfessionalGraduate, &STAGE_ONE);
    assert!(builder.continue_to_next_step());
    fill(&mut builder, CertificateStage::Graduate, &STAGE_TWO);
    assert!(builder.continue_to_next_step());
    fill(&mut builder, CertificateStage::Masters, &STAGE_THREE);
    assert!(builder.continue_to_next_step());

    assert_eq!(builder.step(), WizardStep::PathPreview);
    assert!(!builder.can_proceed_to_next_step());
    assert!((builder.total_credits() - 30.0).abs() < f32::EPSILON);
    assert!(builder.stage_progress().iter().all(|p| p.complete));
    assert_eq!(recorder.current_path().len(), 10);

    builder.toggle_course_for_stage(CertificateStage::Masters, "MS-710");
    assert_eq!(
        recorder.changes().last(),
        Some(&PathChange::Removed("MS-710".to_string()))
    );
    assert_eq!(recorder.current_path().len(), 9);

    builder.reset();
    assert_eq!(builder.step(), WizardStep::TrackSelection);
    assert!(builder.track().is_none());
    assert!(recorder.current_path().is_empty());
}

#[test]
fn navigation_back_and_edit() {
    let mut builder = PathwayBuilder::new(CourseCatalog::builtin(), NoopObserver);
    assert!(!builder.go_back());
    builder.select_track("security-ops");
    builder.continue_to_next_step();

    assert!(builder.view_learning_path());
    assert_eq!(builder.step(), WizardStep::PathPreview);
    assert!(builder.go_back());
    assert_eq!(builder.step(), WizardStep::Stage3Selection);
    assert!(builder.view_learning_path());
    assert!(builder.edit_selection());
    assert_eq!(builder.step(), WizardStep::Stage1Selection);
    assert!(!builder.edit_selection());
}

#[test]
fn unknown_inputs_change_nothing() {
    let recorder = PathRecorder::new();
    let mut builder = PathwayBuilder::new(CourseCatalog::builtin(), recorder.clone());
    assert!(!builder.select_track("underwater-basket-weaving"));
    assert_eq!(
        builder.toggle_course_for_stage(CertificateStage::ProfessionalGraduate, "XX-999"),
        ToggleOutcome::Rejected
    );
    assert!(recorder.changes().is_empty());
}

const DUAL_TAGGED_CATALOG: &str = r#"
[[stages]]
stage = "professional-graduate"
required_courses = 2
required_credits = 6.0

[[stages]]
stage = "graduate"
required_courses = 2
required_credits = 6.0

[[stages]]
stage = "masters"
required_courses = 1
required_credits = 3.0

[[pillars]]
id = "ai"
name = "Artificial Intelligence"

[[tracks]]
id = "applied-ml"
name = "Applied Machine Learning"
pillar = "ai"

[[courses]]
id = "X-1"
title = "Bridge Course"
duration = "8 weeks"
credits = 3.0
level = "practitioner"
pillars = ["ai"]
certificates = ["professional-graduate", "graduate"]

[[courses]]
id = "X-2"
title = "Graduate Seminar"
duration = "8 weeks"
credits = 3.0
level = "advanced"
pillars = ["ai"]
certificates = ["graduate"]
"#;

#[test]
fn stage_one_pick_leaves_stage_two_and_three_lists() {
    let catalog = CourseCatalog::from_toml(DUAL_TAGGED_CATALOG).expect("valid catalog");
    let mut builder = PathwayBuilder::new(&catalog, NoopObserver);
    builder.select_track("applied-ml");
    builder.continue_to_next_step();

    assert_eq!(ids(&builder, CertificateStage::Graduate), vec!["X-1", "X-2"]);

    fill(&mut builder, CertificateStage::ProfessionalGraduate, &["X-1"]);
    assert_eq!(ids(&builder, CertificateStage::Graduate), vec!["X-2"]);
    assert_eq!(ids(&builder, CertificateStage::Masters), vec!["X-2"]);
    assert_eq!(
        builder.toggle_course_for_stage(CertificateStage::Graduate, "X-1"),
        ToggleOutcome::Rejected
    );

    // Deselecting in Stage 1 offers it to Stage 2 again
    builder.toggle_course_for_stage(CertificateStage::ProfessionalGraduate, "X-1");
    assert_eq!(ids(&builder, CertificateStage::Graduate), vec!["X-1", "X-2"]);
}
