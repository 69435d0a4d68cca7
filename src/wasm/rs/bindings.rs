//! WASM bindings exported to JavaScript/TypeScript
//!
//! Structured values cross the boundary as JSON strings.

use crate::core::analytics::LogSink;
use crate::core::calculator::sanitize_reimbursement;
use crate::core::catalog::{CourseCatalog, PricingTable};
use crate::core::models::{CertificateStage, DiscountOptions};
use crate::core::pathway::{PathRecorder, PathwayBuilder, ToggleOutcome};
use crate::core::{analytics, pricing};
use crate::get_version;
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_json(value: &impl Serialize) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Returns the current Pathways version for the WASM build.
#[wasm_bindgen]
pub fn get_wasm_version() -> String {
    format!("Pathways WASM v{}", get_version())
}

/// Cost breakdown for a program as JSON, or `null` for an unknown program.
///
/// `options_json` uses the camelCase option names, e.g.
/// `{"isWorkforcePartner": true, "annualReimbursement": 5000}`.
///
/// # Errors
/// Fails if `options_json` is not a valid options object.
#[wasm_bindgen]
pub fn calculate_program_cost(program_code: &str, options_json: &str) -> Result<String, JsValue> {
    let options: DiscountOptions = if options_json.trim().is_empty() {
        DiscountOptions::default()
    } else {
        serde_json::from_str(options_json).map_err(|e| JsValue::from_str(&e.to_string()))?
    };
    to_json(&pricing::calculate_program_cost(program_code, &options))
}

/// Discount rules as JSON
///
/// # Errors
/// Fails only if serialization fails.
#[wasm_bindgen]
pub fn discount_info() -> Result<String, JsValue> {
    to_json(pricing::get_discount_info())
}

/// Pricing record for a program as JSON, or `null`
///
/// # Errors
/// Fails only if serialization fails.
#[wasm_bindgen]
pub fn program_pricing(program_code: &str) -> Result<String, JsValue> {
    to_json(&pricing::get_program_pricing(program_code))
}

/// Normalize raw reimbursement field input (clamped to the annual cap)
#[wasm_bindgen]
pub fn normalize_reimbursement(raw: &str) -> String {
    sanitize_reimbursement(
        raw,
        PricingTable::builtin()
            .discounts
            .employer_reimbursement
            .max_annual,
    )
}

/// Record a call-to-action click through the console logger
#[wasm_bindgen]
pub fn track_cta(cta: &str, location: &str) {
    analytics::track_cta(&LogSink, cta, location);
}

/// The pathway wizard over the built-in catalog
#[wasm_bindgen]
pub struct PathwayBuilderHandle {
    builder: PathwayBuilder<'static>,
    recorder: PathRecorder,
}

#[wasm_bindgen]
impl PathwayBuilderHandle {
    /// Start at track selection
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        let recorder = PathRecorder::new();
        Self {
            builder: PathwayBuilder::new(CourseCatalog::builtin(), recorder.clone()),
            recorder,
        }
    }

    /// Current step number (1-5)
    #[must_use]
    pub fn step(&self) -> u8 {
        self.builder.step().number()
    }

    /// Pick a track
    pub fn select_track(&mut self, track_id: &str) -> bool {
        self.builder.select_track(track_id)
    }

    /// Whether the current step allows moving forward
    #[must_use]
    pub fn can_proceed(&self) -> bool {
        self.builder.can_proceed_to_next_step()
    }

    /// Advance one step if allowed
    pub fn continue_to_next_step(&mut self) -> bool {
        self.builder.continue_to_next_step()
    }

    /// Jump to the preview from a stage step
    pub fn view_learning_path(&mut self) -> bool {
        self.builder.view_learning_path()
    }

    /// Step back one
    pub fn go_back(&mut self) -> bool {
        self.builder.go_back()
    }

    /// Return from the preview to Stage 1
    pub fn edit_selection(&mut self) -> bool {
        self.builder.edit_selection()
    }

    /// Clear everything
    pub fn reset(&mut self) {
        self.builder.reset();
    }

    /// Toggle a course in stage 1, 2 or 3: `added`, `removed` or `rejected`
    pub fn toggle_course(&mut self, stage: u8, course_id: &str) -> String {
        let outcome = CertificateStage::from_number(stage).map_or(ToggleOutcome::Rejected, |stage| {
            self.builder.toggle_course_for_stage(stage, course_id)
        });
        match outcome {
            ToggleOutcome::Added => "added",
            ToggleOutcome::Removed => "removed",
            ToggleOutcome::Rejected => "rejected",
        }
        .to_string()
    }

    /// Courses offered for a stage as JSON
    ///
    /// # Errors
    /// Fails for a stage number outside 1-3.
    pub fn available_courses(&self, stage: u8) -> Result<String, JsValue> {
        let stage = CertificateStage::from_number(stage)
            .ok_or_else(|| JsValue::from_str("stage must be 1, 2 or 3"))?;
        to_json(&self.builder.available_courses(stage))
    }

    /// Progress of all three stages as JSON
    ///
    /// # Errors
    /// Fails only if serialization fails.
    pub fn stage_progress(&self) -> Result<String, JsValue> {
        to_json(&self.builder.stage_progress())
    }

    /// Suggested course order as JSON
    ///
    /// # Errors
    /// Fails only if serialization fails.
    pub fn recommended_order(&self) -> Result<String, JsValue> {
        to_json(&self.builder.recommended_order())
    }

    /// Course ids currently on the mirrored path as JSON
    ///
    /// # Errors
    /// Fails only if serialization fails.
    pub fn path(&self) -> Result<String, JsValue> {
        to_json(&self.recorder.current_path())
    }

    /// Replace the owning page's path snapshot (JSON array of ids)
    ///
    /// # Errors
    /// Fails if `items_json` is not an array of strings.
    pub fn set_path_items(&mut self, items_json: &str) -> Result<(), JsValue> {
        let items: Vec<String> =
            serde_json::from_str(items_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.builder.set_path_items(items);
        Ok(())
    }

    /// Whether the owning page already has a course on its path
    #[must_use]
    pub fn is_in_path(&self, course_id: &str) -> bool {
        self.builder.is_in_path(course_id)
    }
}

impl Default for PathwayBuilderHandle {
    fn default() -> Self {
        Self::new()
    }
}
