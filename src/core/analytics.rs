//! Analytics collaborator.
//!
//! Components only promise to hand a named event with a structured payload
//! to an [`AnalyticsSink`]. Where the event goes afterwards is the sink's
//! business.

use crate::info;
use serde::Serialize;
use serde_json::Value;
use std::cell::RefCell;

/// Calculator inputs changed
pub const TUITION_CALCULATOR_UPDATE: &str = "tuition_calculator_update";
/// A modal opened
pub const MODAL_OPEN: &str = "modal_open";
/// A modal closed
pub const MODAL_CLOSE: &str = "modal_close";
/// A program was picked on the corporate landing page
pub const PROGRAM_SELECTED: &str = "program_selected";
/// A readiness quiz question was answered
pub const QUIZ_ANSWER: &str = "quiz_answer";
/// The readiness quiz produced a result
pub const QUIZ_COMPLETE: &str = "quiz_complete";
/// A call-to-action was clicked
pub const CTA_CLICK: &str = "cta_click";

/// A named tracking event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    /// Event name
    pub name: String,
    /// Structured payload
    pub payload: Value,
}

impl AnalyticsEvent {
    /// Build an event from any serializable payload.
    ///
    /// A payload that cannot be represented as JSON becomes `null`; tracking
    /// never interrupts the caller.
    pub fn new(name: &str, payload: impl Serialize) -> Self {
        Self {
            name: name.to_string(),
            payload: serde_json::to_value(payload).unwrap_or(Value::Null),
        }
    }
}

/// Receives tracking events. Fire and forget: no result is returned.
pub trait AnalyticsSink {
    /// Record one event
    fn track(&self, event: AnalyticsEvent);
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn track(&self, _event: AnalyticsEvent) {}
}

/// Writes events through the crate logger at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn track(&self, event: AnalyticsEvent) {
        info!("analytics {} {}", event.name, event.payload);
    }
}

/// Keeps every event in memory, in order
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<AnalyticsEvent>>,
}

impl RecordingSink {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded events
    #[must_use]
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.borrow().clone()
    }

    /// Names of recorded events, in order
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.events.borrow().iter().map(|e| e.name.clone()).collect()
    }

    /// Most recent event, if any
    #[must_use]
    pub fn last(&self) -> Option<AnalyticsEvent> {
        self.events.borrow().last().cloned()
    }

    /// Drop everything recorded so far
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl AnalyticsSink for RecordingSink {
    fn track(&self, event: AnalyticsEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl<S: AnalyticsSink + ?Sized> AnalyticsSink for &S {
    fn track(&self, event: AnalyticsEvent) {
        (**self).track(event);
    }
}

/// Track a call-to-action click
pub fn track_cta(sink: &dyn AnalyticsSink, cta: &str, location: &str) {
    sink.track(AnalyticsEvent::new(
        CTA_CLICK,
        serde_json::json!({ "cta": cta, "location": location }),
    ));
}
