//! Static reference data: the pricing table and the course catalog.
//!
//! Both ship as TOML documents compiled into the binary. Either can be
//! replaced at runtime by pointing the configuration at another file.

pub mod course_catalog;
pub mod pricing_table;

pub use course_catalog::CourseCatalog;
pub use pricing_table::PricingTable;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading reference data
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid TOML for the expected schema
    #[error("failed to parse reference data: {0}")]
    Parse(#[from] toml::de::Error),

    /// The document parsed but breaks a data invariant
    #[error("invalid reference data: {0}")]
    Invalid(String),
}

pub(crate) fn read_file(path: &std::path::Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}
