//! Session storage handoff between pages.
//!
//! The corporate landing page remembers the picked program; the accelerated
//! application page reads it back after navigation. This is a one-way
//! handoff, not a shared store.

use crate::core::analytics::{AnalyticsEvent, AnalyticsSink, PROGRAM_SELECTED};
use crate::core::catalog::PricingTable;
use crate::core::models::PricingRecord;
use crate::{debug, warn};
use serde_json::json;
use std::collections::HashMap;

/// Key holding the program code picked on the corporate landing page
pub const SELECTED_PROGRAM_KEY: &str = "selectedProgram";

/// Key holding the partner the program was picked for
pub const SELECTED_PARTNER_KEY: &str = "selectedPartner";

/// String key/value storage that survives page navigation within a session
pub trait SessionStore {
    /// Read a value
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value
    fn set(&mut self, key: &str, value: &str);
    /// Delete a value
    fn remove(&mut self, key: &str);
}

/// In-memory [`SessionStore`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySessionStore {
    values: HashMap<String, String>,
}

impl MemorySessionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// Remember the program picked on the corporate landing page.
///
/// Unpriced codes are refused so the application page never receives a
/// program it cannot show. Returns whether the handoff was written.
pub fn remember_selected_program(
    store: &mut dyn SessionStore,
    table: &PricingTable,
    program_code: &str,
    partner: &str,
    analytics: &dyn AnalyticsSink,
) -> bool {
    if table.program(program_code).is_none() {
        warn!("Refusing to hand off unpriced program '{program_code}'");
        return false;
    }
    store.set(SELECTED_PROGRAM_KEY, program_code);
    store.set(SELECTED_PARTNER_KEY, partner);
    analytics.track(AnalyticsEvent::new(
        PROGRAM_SELECTED,
        json!({ "program": program_code, "partner": partner }),
    ));
    debug!("Stored selected program '{program_code}' for partner '{partner}'");
    true
}

/// Read back the handed-off program, resolved against the pricing table
#[must_use]
pub fn selected_program<'t>(store: &dyn SessionStore, table: &'t PricingTable) -> Option<&'t PricingRecord> {
    let code = store.get(SELECTED_PROGRAM_KEY)?;
    table.program(&code)
}

/// Forget the handoff (e.g., once the application form has loaded)
pub fn clear_selected_program(store: &mut dyn SessionStore) {
    store.remove(SELECTED_PROGRAM_KEY);
    store.remove(SELECTED_PARTNER_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analytics::RecordingSink;

    #[test]
    fn test_round_trip_through_store() {
        let sink = RecordingSink::new();
        let table = PricingTable::builtin();
        let mut store = MemorySessionStore::new();

        assert!(selected_program(&store, table).is_none());
        assert!(remember_selected_program(&mut store, table, "mba", "Acme", &sink));
        assert_eq!(selected_program(&store, table).map(|p| p.code.as_str()), Some("mba"));
        assert_eq!(store.get(SELECTED_PARTNER_KEY).as_deref(), Some("Acme"));
        assert_eq!(sink.names(), vec![PROGRAM_SELECTED]);

        clear_selected_program(&mut store);
        assert!(selected_program(&store, table).is_none());
    }

    #[test]
    fn test_unpriced_program_not_stored() {
        let sink = RecordingSink::new();
        let mut store = MemorySessionStore::new();
        assert!(!remember_selected_program(
            &mut store,
            PricingTable::builtin(),
            "ghost",
            "Acme",
            &sink
        ));
        assert!(store.get(SELECTED_PROGRAM_KEY).is_none());
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_stale_code_resolves_to_none() {
        let mut store = MemorySessionStore::new();
        store.set(SELECTED_PROGRAM_KEY, "retired-program");
        assert!(selected_program(&store, PricingTable::builtin()).is_none());
    }
}
