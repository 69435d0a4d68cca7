//! Pathway command handler
//!
//! Drives the pathway wizard from command-line selections: pick the track,
//! toggle each stage's courses, and advance whenever a stage is exactly
//! filled.

use super::report;
use std::path::PathBuf;
use tuition_pathways::config::Config;
use tuition_pathways::core::catalog::CourseCatalog;
use tuition_pathways::core::models::CertificateStage;
use tuition_pathways::core::pathway::selection::is_eligible;
use tuition_pathways::core::pathway::{PathRecorder, PathwayBuilder, ToggleOutcome, WizardStep};
use tuition_pathways::core::report::PathwayReport;
use tuition_pathways::{debug, verbose};

/// Arguments of the `pathway` command
#[derive(Debug, Clone, Default)]
pub struct PathwayArgs {
    /// Track id
    pub track: String,
    /// Stage 1 course ids
    pub stage1: Vec<String>,
    /// Stage 2 course ids
    pub stage2: Vec<String>,
    /// Stage 3 course ids
    pub stage3: Vec<String>,
    /// Report format
    pub report: Option<String>,
    /// Report path
    pub output: Option<PathBuf>,
}

/// Build the path and print where the wizard ended up
pub fn run(catalog: &CourseCatalog, args: &PathwayArgs, config: &Config) -> Result<(), String> {
    let recorder = PathRecorder::new();
    let mut builder = PathwayBuilder::new(catalog, recorder.clone());

    if !builder.select_track(&args.track) {
        return Err(format!(
            "✗ Unknown track '{}'. Run `pathways catalog` to list tracks.",
            args.track
        ));
    }
    builder.continue_to_next_step();
    if let (Some(track), Some(pillar)) = (builder.track(), builder.pillar()) {
        println!("\n=== {} ({}) ===", track.name, pillar.name);
    }

    let stages = [
        (CertificateStage::ProfessionalGraduate, &args.stage1),
        (CertificateStage::Graduate, &args.stage2),
        (CertificateStage::Masters, &args.stage3),
    ];
    for (stage, ids) in stages {
        if !ids.is_empty() {
            println!("\n{stage}:");
        }
        for id in ids {
            toggle(&mut builder, catalog, stage, id);
        }
        if builder.step().stage() == Some(stage) && builder.continue_to_next_step() {
            verbose!("→ {}", builder.step());
        }
    }

    print_progress(&builder);

    if builder.step() == WizardStep::PathPreview {
        println!("\n✓ Learning path complete: {:.1} credits", builder.total_credits());
    } else {
        print_next_options(&builder);
    }
    debug!("Mirrored path: {:?}", recorder.current_path());

    if let Some(format) = &args.report {
        let view = PathwayReport::from_builder(&builder);
        let path = report::write(&view, format, args.output.as_deref(), &args.track, config)?;
        println!("✓ Report generated: {}", path.display());
    }
    Ok(())
}

fn toggle(builder: &mut PathwayBuilder<'_>, catalog: &CourseCatalog, stage: CertificateStage, id: &str) {
    let pillar = builder.pillar().map(|p| p.id.as_str());
    if let Some(course) = catalog.course(id) {
        if !is_eligible(course, stage, pillar) {
            println!("  ⚠ {id} is not normally offered for this stage");
        }
    }
    match builder.toggle_course_for_stage(stage, id) {
        ToggleOutcome::Added => println!("  + {id}"),
        ToggleOutcome::Removed => println!("  - {id}"),
        ToggleOutcome::Rejected => println!("  ✗ {id} not added (unknown, already selected, or over the stage limit)"),
    }
}

fn print_progress(builder: &PathwayBuilder<'_>) {
    println!("\n=== Progress ===");
    for progress in builder.stage_progress() {
        let marker = if progress.complete {
            "✓"
        } else if progress.unlocked {
            " "
        } else {
            "🔒"
        };
        println!(
            "{marker} {:<45} {}/{} courses  {:>4.1}/{:.1} credits  {:>3.0}%",
            progress.stage.to_string(),
            progress.selected_courses,
            progress.required_courses,
            progress.selected_credits,
            progress.required_credits,
            progress.percent
        );
    }
}

fn print_next_options(builder: &PathwayBuilder<'_>) {
    let Some(stage) = builder.step().stage() else {
        return;
    };
    println!("\nℹ Stopped at {}: the stage needs an exact fill to continue.", builder.step());
    let available = builder.available_courses(stage);
    if available.is_empty() {
        return;
    }
    println!("Available for {stage}:");
    for course in available {
        let cross = if course.is_cross_pillar() { " (cross-pillar)" } else { "" };
        println!("  {:<8} {:<44} {:.1} cr{cross}", course.id, course.title, course.credits);
    }
}
