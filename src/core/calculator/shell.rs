//! Presentation shells around the tuition calculator, and the modal
//! lifecycle guard.

use super::TuitionCalculator;
use crate::core::analytics::{AnalyticsEvent, AnalyticsSink, MODAL_CLOSE, MODAL_OPEN};
use crate::core::catalog::PricingTable;
use crate::core::session::{remember_selected_program, SessionStore};
use serde_json::json;
use std::cell::Cell;
use std::rc::Rc;

/// The surfaces that embed a [`TuitionCalculator`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculatorShell {
    /// Calculator opened in a modal from a program page
    Modal {
        /// Program being estimated
        program_code: String,
        /// Modal heading
        title: String,
    },
    /// Calculator rendered inline on a program page
    Inline {
        /// Program being estimated
        program_code: String,
    },
    /// Calculator on a corporate partner landing page with a program picker
    CorporateLanding {
        /// Partner organization name
        partner: String,
        /// Programs offered to the partner's employees
        program_codes: Vec<String>,
        /// Index of the picked program
        selected: usize,
    },
}

impl CalculatorShell {
    /// Analytics source label
    #[must_use]
    pub const fn source(&self) -> &'static str {
        match self {
            Self::Modal { .. } => "modal",
            Self::Inline { .. } => "inline",
            Self::CorporateLanding { .. } => "corporate-landing",
        }
    }

    /// Program the shell is currently estimating
    #[must_use]
    pub fn program_code(&self) -> Option<&str> {
        match self {
            Self::Modal { program_code, .. } | Self::Inline { program_code } => Some(program_code),
            Self::CorporateLanding {
                program_codes,
                selected,
                ..
            } => program_codes.get(*selected).map(String::as_str),
        }
    }

    /// Build the calculator this shell renders. Every shell shares the same
    /// calculation path; only the analytics source differs.
    #[must_use]
    pub fn calculator<'a>(
        &self,
        table: &'a PricingTable,
        analytics: &'a dyn AnalyticsSink,
    ) -> TuitionCalculator<'a> {
        TuitionCalculator::new(table, self.program_code().unwrap_or_default(), analytics)
            .with_source(self.source())
    }

    /// Pick a program on the corporate landing page and hand it to the
    /// application page through session storage.
    ///
    /// Returns `false` (and changes nothing) for other shells, an out-of-range
    /// index, or a program the table does not price.
    pub fn select_program(
        &mut self,
        index: usize,
        table: &PricingTable,
        store: &mut dyn SessionStore,
        analytics: &dyn AnalyticsSink,
    ) -> bool {
        let Self::CorporateLanding {
            partner,
            program_codes,
            selected,
        } = self
        else {
            return false;
        };
        let Some(code) = program_codes.get(index) else {
            return false;
        };
        if !remember_selected_program(store, table, code, partner, analytics) {
            return false;
        }
        *selected = index;
        true
    }
}

/// Page-level scroll lock shared by every open modal.
///
/// Cloning shares the same counter; the page is locked while any guard lives.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    depth: Rc<Cell<usize>>,
}

impl ScrollLock {
    /// Create an unlocked page
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether at least one guard is alive
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.depth.get() > 0
    }

    /// Lock the page until the returned guard is dropped
    #[must_use]
    pub fn acquire(&self) -> ScrollGuard {
        self.depth.set(self.depth.get() + 1);
        ScrollGuard {
            depth: Rc::clone(&self.depth),
        }
    }
}

/// Releases one level of [`ScrollLock`] when dropped
#[derive(Debug)]
pub struct ScrollGuard {
    depth: Rc<Cell<usize>>,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }
}

/// An open modal. Opening locks scrolling and tracks `modal_open`; dropping
/// the session, on any path, unlocks and tracks `modal_close`.
pub struct ModalSession<'a> {
    name: String,
    analytics: &'a dyn AnalyticsSink,
    _scroll: ScrollGuard,
}

impl<'a> ModalSession<'a> {
    /// Open a modal
    #[must_use]
    pub fn open(name: &str, lock: &ScrollLock, analytics: &'a dyn AnalyticsSink) -> Self {
        let scroll = lock.acquire();
        analytics.track(AnalyticsEvent::new(MODAL_OPEN, json!({ "modal": name })));
        Self {
            name: name.to_string(),
            analytics,
            _scroll: scroll,
        }
    }

    /// Modal name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for ModalSession<'_> {
    fn drop(&mut self) {
        self.analytics
            .track(AnalyticsEvent::new(MODAL_CLOSE, json!({ "modal": self.name })));
    }
}
