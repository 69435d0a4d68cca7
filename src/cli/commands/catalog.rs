//! Catalog command handler

use tuition_pathways::core::catalog::CourseCatalog;
use tuition_pathways::core::models::{Course, Pillar};

/// Print pillars with their tracks and courses, optionally for one pillar
pub fn run(catalog: &CourseCatalog, only_pillar: Option<&str>) -> Result<(), String> {
    let pillars: Vec<&Pillar> = match only_pillar {
        Some(id) => vec![catalog
            .pillar(id)
            .ok_or_else(|| format!("✗ Unknown pillar '{id}'"))?],
        None => catalog.pillars().iter().collect(),
    };

    for pillar in pillars {
        println!("\n=== {} ({}) ===", pillar.name, pillar.id);
        if !pillar.description.is_empty() {
            println!("{}", pillar.description);
        }

        println!("\nTracks:");
        for track in catalog.tracks_for_pillar(&pillar.id) {
            println!("  {:<22} {}", track.id, track.name);
        }

        println!("\nCourses:");
        for course in catalog.courses_in_pillar(&pillar.id) {
            print_course(course);
        }
    }

    if only_pillar.is_none() {
        println!("\nSuggested starting order:");
        for id in catalog.recommended_ids() {
            if let Some(course) = catalog.course(id) {
                println!("  {} - {}", course.id, course.title);
            }
        }
    }
    Ok(())
}

fn print_course(course: &Course) {
    let stages: Vec<String> = course
        .certificates
        .iter()
        .map(|stage| format!("S{}", stage.number()))
        .collect();
    let cross = if course.is_cross_pillar() { " *" } else { "" };
    println!(
        "  {:<8} {:<44} {:>4.1} cr  {:<12} {}{cross}",
        course.id,
        course.title,
        course.credits,
        course.level.to_string(),
        stages.join("/")
    );
}
