//! Core module for common functionality across all targets

pub mod analytics;
pub mod assessment;
pub mod calculator;
pub mod catalog;
pub mod config;
pub mod models;
pub mod pathway;
pub mod pricing;
pub mod report;
pub mod session;

/// Returns the current version of the `Pathways` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
