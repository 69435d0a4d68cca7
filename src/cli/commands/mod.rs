//! CLI command handlers for `Pathways`.
//!
//! Each command is implemented in its own submodule. Handlers return a
//! user-facing error string; `main` prints it and exits non-zero.

pub mod catalog;
pub mod config;
pub mod estimate;
pub mod pathway;
pub mod quiz;
pub mod report;
