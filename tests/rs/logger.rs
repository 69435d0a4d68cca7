//! Integration tests for the crate logger.
//!
//! The level and log file are process-wide, so everything that touches them
//! runs inside one test.

use std::fs;
use tuition_pathways::core::analytics::{AnalyticsEvent, AnalyticsSink, LogSink};
use tuition_pathways::logger::{current_level, init_file_logging, set_level, set_level_from_str, Level};
use tuition_pathways::{debug, error, info, warn};

#[test]
fn level_names_and_aliases_parse() {
    assert_eq!("ERROR".parse::<Level>(), Ok(Level::Error));
    assert_eq!("err".parse::<Level>(), Ok(Level::Error));
    assert_eq!(" warning ".parse::<Level>(), Ok(Level::Warn));
    assert_eq!("info".parse::<Level>(), Ok(Level::Info));
    assert_eq!("Debug".parse::<Level>(), Ok(Level::Debug));
    assert!("trace".parse::<Level>().is_err());
    assert!("".parse::<Level>().is_err());
}

#[test]
fn level_display_matches_config_values() {
    for level in [Level::Error, Level::Warn, Level::Info, Level::Debug] {
        assert_eq!(level.to_string().parse::<Level>(), Ok(level));
    }
    assert!(Level::Error < Level::Debug);
}

#[test]
fn level_filtering_and_file_output() {
    assert!(!set_level_from_str("verbose"));
    assert!(set_level_from_str("warn"));
    assert_eq!(current_level(), Level::Warn);

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("pathways.log");
    assert!(init_file_logging(&path));

    info!("hidden below warn");
    warn!("estimate fallback used");
    error!("pricing file unreadable");

    set_level(Level::Info);
    LogSink.track(AnalyticsEvent::new("cta_click", serde_json::json!({ "cta": "apply-now" })));
    set_level(Level::Debug);
    debug!("debug integration");

    let written = fs::read_to_string(&path).expect("log file readable");
    assert!(!written.contains("hidden below warn"));
    assert!(written.contains("[WARN] logger: estimate fallback used"));
    assert!(written.contains("[ERROR] logger: pricing file unreadable"));
    assert!(written.contains("analytics cta_click"));
    assert!(written.contains("apply-now"));
}
