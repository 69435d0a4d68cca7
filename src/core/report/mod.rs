//! Report generation for tuition estimates and learning paths
//!
//! Each report is a plain view struct with every value already formatted,
//! rendered through askama templates in Markdown or HTML.

pub mod estimate;
pub mod formats;
pub mod pathway;

pub use estimate::{EstimateReport, StepLine};
pub use formats::ReportFormat;
pub use pathway::{CourseLine, PathwayReport, StageSection};

use std::error::Error;
use std::fs;
use std::path::Path;

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    fn render(&self, format: ReportFormat) -> Result<String, Box<dyn Error>>;

    /// Generate a report to a file, creating parent directories as needed
    ///
    /// # Errors
    /// Returns an error if rendering or writing fails
    fn generate(&self, format: ReportFormat, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(format)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(output_path, content)?;
        Ok(())
    }
}
