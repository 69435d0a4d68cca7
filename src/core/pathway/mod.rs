//! Learning pathway builder.
//!
//! A five-step wizard: pick a track, fill the professional graduate
//! certificate, the graduate certificate, the master's stage, then preview
//! the whole path. Selections are mirrored to the owning page through a
//! [`PathObserver`].

pub mod progress;
pub mod selection;

pub use progress::StageProgress;

use crate::core::catalog::CourseCatalog;
use crate::core::models::{CertificateStage, Course, Pillar, Track};
use crate::debug;
use serde::Serialize;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Wizard steps, numbered as shown to the learner
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    /// Pick a track (and with it a pillar)
    TrackSelection = 1,
    /// Professional graduate certificate courses
    Stage1Selection = 2,
    /// Graduate certificate courses
    Stage2Selection = 3,
    /// Master's stage courses
    Stage3Selection = 4,
    /// Review the whole path
    PathPreview = 5,
}

impl WizardStep {
    /// Step number (1-5)
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// The certificate stage this step selects for, if any
    #[must_use]
    pub const fn stage(self) -> Option<CertificateStage> {
        match self {
            Self::Stage1Selection => Some(CertificateStage::ProfessionalGraduate),
            Self::Stage2Selection => Some(CertificateStage::Graduate),
            Self::Stage3Selection => Some(CertificateStage::Masters),
            Self::TrackSelection | Self::PathPreview => None,
        }
    }

    const fn for_stage(stage: CertificateStage) -> Self {
        match stage {
            CertificateStage::ProfessionalGraduate => Self::Stage1Selection,
            CertificateStage::Graduate => Self::Stage2Selection,
            CertificateStage::Masters => Self::Stage3Selection,
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::TrackSelection => "Choose a track",
            Self::Stage1Selection => "Stage 1",
            Self::Stage2Selection => "Stage 2",
            Self::Stage3Selection => "Stage 3",
            Self::PathPreview => "Path preview",
        };
        write!(f, "{label}")
    }
}

/// Result of [`PathwayBuilder::toggle_course_for_stage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Course added to the stage
    Added,
    /// Course removed from the stage
    Removed,
    /// Nothing changed
    Rejected,
}

/// Receives add/remove notifications so the owning page can keep its own
/// path list in sync. Notifications are fire-and-forget.
pub trait PathObserver {
    /// A course was selected
    fn on_add_to_path(&mut self, course: &Course);
    /// A course was deselected
    fn on_remove_from_path(&mut self, course_id: &str);
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PathObserver for NoopObserver {
    fn on_add_to_path(&mut self, _course: &Course) {}
    fn on_remove_from_path(&mut self, _course_id: &str) {}
}

/// One mirrored change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathChange {
    /// Course id added
    Added(String),
    /// Course id removed
    Removed(String),
}

/// Observer that records every change. Clones share the same log, so a
/// handle kept outside the builder can read it back.
#[derive(Debug, Clone, Default)]
pub struct PathRecorder {
    changes: Rc<RefCell<Vec<PathChange>>>,
}

impl PathRecorder {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Changes seen so far
    #[must_use]
    pub fn changes(&self) -> Vec<PathChange> {
        self.changes.borrow().clone()
    }

    /// Replay the changes into the ids currently on the path
    #[must_use]
    pub fn current_path(&self) -> Vec<String> {
        let mut path: Vec<String> = Vec::new();
        for change in self.changes.borrow().iter() {
            match change {
                PathChange::Added(id) => {
                    if !path.contains(id) {
                        path.push(id.clone());
                    }
                }
                PathChange::Removed(id) => path.retain(|p| p != id),
            }
        }
        path
    }
}

impl PathObserver for PathRecorder {
    fn on_add_to_path(&mut self, course: &Course) {
        self.changes
            .borrow_mut()
            .push(PathChange::Added(course.id.clone()));
    }

    fn on_remove_from_path(&mut self, course_id: &str) {
        self.changes
            .borrow_mut()
            .push(PathChange::Removed(course_id.to_string()));
    }
}

/// Wizard state for building a three-stage learning path
pub struct PathwayBuilder<'a> {
    catalog: &'a CourseCatalog,
    observer: Box<dyn PathObserver + 'a>,
    step: WizardStep,
    track: Option<&'a Track>,
    pillar: Option<&'a Pillar>,
    selections: [Vec<&'a Course>; 3],
    /// Union of the three stage lists, in stage order
    selected: Vec<&'a Course>,
    /// Snapshot of the owning page's path; read-only here
    path_items: Vec<String>,
}

impl<'a> PathwayBuilder<'a> {
    /// Start a new wizard at track selection
    #[must_use]
    pub fn new(catalog: &'a CourseCatalog, observer: impl PathObserver + 'a) -> Self {
        Self {
            catalog,
            observer: Box::new(observer),
            step: WizardStep::TrackSelection,
            track: None,
            pillar: None,
            selections: [Vec::new(), Vec::new(), Vec::new()],
            selected: Vec::new(),
            path_items: Vec::new(),
        }
    }

    /// Current step
    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    /// Selected track
    #[must_use]
    pub const fn track(&self) -> Option<&'a Track> {
        self.track
    }

    /// Pillar of the selected track
    #[must_use]
    pub const fn pillar(&self) -> Option<&'a Pillar> {
        self.pillar
    }

    /// Courses selected for a stage, in selection order
    #[must_use]
    pub fn selection(&self, stage: CertificateStage) -> &[&'a Course] {
        &self.selections[stage.index()]
    }

    /// Every selected course across all stages
    #[must_use]
    pub fn selected_courses(&self) -> &[&'a Course] {
        &self.selected
    }

    /// Credits across all stages
    #[must_use]
    pub fn total_credits(&self) -> f32 {
        selection::total_credits(&self.selected)
    }

    /// Pick a track; its pillar drives Stage 1 and 2 filtering. Unknown ids
    /// change nothing.
    pub fn select_track(&mut self, track_id: &str) -> bool {
        let Some(track) = self.catalog.track(track_id) else {
            debug!("Ignoring unknown track '{track_id}'");
            return false;
        };
        self.track = Some(track);
        self.pillar = self.catalog.pillar(&track.pillar);
        debug!("Selected track '{}' in pillar '{}'", track.id, track.pillar);
        true
    }

    /// Whether the current step allows moving forward.
    ///
    /// Stage steps need the exact course count and credit total.
    #[must_use]
    pub fn can_proceed_to_next_step(&self) -> bool {
        match self.step {
            WizardStep::TrackSelection => self.track.is_some(),
            WizardStep::PathPreview => false,
            step => step.stage().is_some_and(|stage| {
                progress::meets_exactly(self.catalog.requirement(stage), self.selection(stage))
            }),
        }
    }

    /// Advance one step if allowed. Returns whether the step changed.
    pub fn continue_to_next_step(&mut self) -> bool {
        if !self.can_proceed_to_next_step() {
            return false;
        }
        let next = match self.step {
            WizardStep::TrackSelection => WizardStep::Stage1Selection,
            WizardStep::Stage1Selection => WizardStep::Stage2Selection,
            WizardStep::Stage2Selection => WizardStep::Stage3Selection,
            WizardStep::Stage3Selection => WizardStep::PathPreview,
            WizardStep::PathPreview => return false,
        };
        self.move_to(next);
        true
    }

    /// Jump straight to the preview from any stage step, complete or not
    pub fn view_learning_path(&mut self) -> bool {
        if self.step.stage().is_none() {
            return false;
        }
        self.move_to(WizardStep::PathPreview);
        true
    }

    /// Step back one; always allowed except from track selection
    pub fn go_back(&mut self) -> bool {
        let previous = match self.step {
            WizardStep::TrackSelection => return false,
            WizardStep::Stage1Selection => WizardStep::TrackSelection,
            WizardStep::Stage2Selection => WizardStep::Stage1Selection,
            WizardStep::Stage3Selection => WizardStep::Stage2Selection,
            WizardStep::PathPreview => WizardStep::Stage3Selection,
        };
        self.move_to(previous);
        true
    }

    /// Leave the preview and return to Stage 1
    pub fn edit_selection(&mut self) -> bool {
        if self.step != WizardStep::PathPreview {
            return false;
        }
        self.move_to(WizardStep::Stage1Selection);
        true
    }

    /// Clear everything and return to track selection. Every selected
    /// course is reported removed.
    pub fn reset(&mut self) {
        for course in std::mem::take(&mut self.selected) {
            self.observer.on_remove_from_path(&course.id);
        }
        self.selections = [Vec::new(), Vec::new(), Vec::new()];
        self.track = None;
        self.pillar = None;
        self.step = WizardStep::TrackSelection;
        debug!("Pathway reset");
    }

    /// Add a course to a stage, or remove it if already there.
    ///
    /// Removal is always allowed. Adding is rejected for unknown ids,
    /// courses already picked in another stage, and anything that would
    /// push the stage past its course or credit requirement.
    pub fn toggle_course_for_stage(&mut self, stage: CertificateStage, course_id: &str) -> ToggleOutcome {
        let list = &mut self.selections[stage.index()];
        if let Some(pos) = list.iter().position(|c| c.id == course_id) {
            list.remove(pos);
            self.rebuild_selected();
            self.observer.on_remove_from_path(course_id);
            debug!("Removed {course_id} from {stage}");
            return ToggleOutcome::Removed;
        }

        let Some(course) = self.catalog.course(course_id) else {
            debug!("Ignoring unknown course '{course_id}'");
            return ToggleOutcome::Rejected;
        };
        if self.selected.iter().any(|c| c.id == course_id) {
            debug!("{course_id} is already selected in another stage");
            return ToggleOutcome::Rejected;
        }
        let current = &self.selections[stage.index()];
        let requirement = self.catalog.requirement(stage);
        if requirement.would_exceed(current.len(), selection::total_credits(current), course.credits) {
            debug!("{course_id} would exceed the {stage} requirement");
            return ToggleOutcome::Rejected;
        }

        self.selections[stage.index()].push(course);
        self.rebuild_selected();
        self.observer.on_add_to_path(course);
        debug!("Added {course_id} to {stage}");
        ToggleOutcome::Added
    }

    /// Courses the given stage currently offers
    #[must_use]
    pub fn available_courses(&self, stage: CertificateStage) -> Vec<&'a Course> {
        selection::available_courses(
            self.catalog,
            stage,
            self.pillar.map(|p| p.id.as_str()),
            &self.selected,
        )
    }

    /// Progress for all three stages
    #[must_use]
    pub fn stage_progress(&self) -> [StageProgress; 3] {
        progress::stage_progress(self.catalog, &self.selections)
    }

    /// Suggested course order, resolved against the catalog. Informational
    /// only; selection does not follow it.
    #[must_use]
    pub fn recommended_order(&self) -> Vec<&'a Course> {
        self.catalog
            .recommended_ids()
            .iter()
            .filter_map(|id| self.catalog.course(id))
            .collect()
    }

    /// Replace the snapshot of the owning page's path
    pub fn set_path_items(&mut self, items: Vec<String>) {
        self.path_items = items;
    }

    /// Whether the owning page already has this course on its path
    #[must_use]
    pub fn is_in_path(&self, course_id: &str) -> bool {
        self.path_items.iter().any(|id| id == course_id)
    }

    /// Jump to the step that edits a stage, e.g. from a preview link
    pub fn edit_stage(&mut self, stage: CertificateStage) {
        if self.track.is_some() {
            self.move_to(WizardStep::for_stage(stage));
        }
    }

    fn move_to(&mut self, step: WizardStep) {
        debug!("Pathway step {} -> {}", self.step.number(), step.number());
        self.step = step;
    }

    fn rebuild_selected(&mut self) {
        self.selected = self.selections.iter().flatten().copied().collect();
    }
}
