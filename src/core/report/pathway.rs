//! Learning path report

use super::{ReportFormat, ReportGenerator};
use crate::core::models::Course;
use crate::core::pathway::PathwayBuilder;
use askama::Template;
use std::error::Error;

/// One course in a stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseLine {
    /// Course id
    pub id: String,
    /// Course title
    pub title: String,
    /// Formatted credits
    pub credits: String,
    /// Level name
    pub level: String,
    /// Comma-separated pillar ids
    pub pillars: String,
}

impl From<&Course> for CourseLine {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.clone(),
            title: course.title.clone(),
            credits: format!("{:.1}", course.credits),
            level: course.level.to_string(),
            pillars: course.pillars.join(", "),
        }
    }
}

/// One certificate stage of the path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageSection {
    /// Stage name
    pub title: String,
    /// e.g. `4/4 courses, 12.0/12.0 credits`
    pub summary: String,
    /// Requirement met
    pub complete: bool,
    /// Whole-number progress percentage
    pub percent: String,
    /// Selected courses
    pub courses: Vec<CourseLine>,
}

/// A formatted learning path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathwayReport {
    /// Track name, or a placeholder when none is selected
    pub track: String,
    /// Pillar name
    pub pillar: String,
    /// Stages in order
    pub stages: Vec<StageSection>,
    /// Courses across all stages
    pub course_count: usize,
    /// Formatted credits across all stages
    pub total_credits: String,
    /// Suggested starting order as `id - title`
    pub recommended: Vec<String>,
}

impl PathwayReport {
    /// Snapshot the builder's current selections
    #[must_use]
    pub fn from_builder(builder: &PathwayBuilder<'_>) -> Self {
        let stages = builder
            .stage_progress()
            .iter()
            .map(|progress| StageSection {
                title: progress.stage.to_string(),
                summary: format!(
                    "{}/{} courses, {:.1}/{:.1} credits",
                    progress.selected_courses,
                    progress.required_courses,
                    progress.selected_credits,
                    progress.required_credits
                ),
                complete: progress.complete,
                percent: format!("{:.0}", progress.percent),
                courses: builder
                    .selection(progress.stage)
                    .iter()
                    .map(|course| CourseLine::from(*course))
                    .collect(),
            })
            .collect();

        Self {
            track: builder
                .track()
                .map_or_else(|| "No track selected".to_string(), |t| t.name.clone()),
            pillar: builder.pillar().map(|p| p.name.clone()).unwrap_or_default(),
            stages,
            course_count: builder.selected_courses().len(),
            total_credits: format!("{:.1}", builder.total_credits()),
            recommended: builder
                .recommended_order()
                .iter()
                .map(|c| format!("{} - {}", c.id, c.title))
                .collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "pathway.md")]
struct PathwayMarkdown<'a> {
    r: &'a PathwayReport,
}

#[derive(Template)]
#[template(path = "pathway.html")]
struct PathwayHtml<'a> {
    r: &'a PathwayReport,
}

impl ReportGenerator for PathwayReport {
    fn render(&self, format: ReportFormat) -> Result<String, Box<dyn Error>> {
        let content = match format {
            ReportFormat::Markdown => PathwayMarkdown { r: self }.render()?,
            ReportFormat::Html => PathwayHtml { r: self }.render()?,
        };
        Ok(content)
    }
}
