//! Shared library for `Pathways`
//! Tuition discount estimation and certificate-to-degree pathway building,
//! used by the CLI and (on `wasm32`) by the browser surfaces.

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub mod core;
pub mod logger;

pub use self::core::{config, get_version};
