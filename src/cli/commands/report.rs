//! Report output shared by commands that can write one

use std::path::{Path, PathBuf};
use std::str::FromStr;
use tuition_pathways::config::Config;
use tuition_pathways::core::report::{ReportFormat, ReportGenerator};
use tuition_pathways::{error, info};

/// Render `report` and write it to `output_file`, or to
/// `<reports_dir>/<stem>_report.<ext>` when no path is given.
///
/// Returns the path written.
pub fn write(
    report: &dyn ReportGenerator,
    format_str: &str,
    output_file: Option<&Path>,
    stem: &str,
    config: &Config,
) -> Result<PathBuf, String> {
    let format = ReportFormat::from_str(format_str)
        .map_err(|e| format!("✗ {e}. Use: markdown or html"))?;

    let output_path = output_file.map_or_else(
        || {
            PathBuf::from(&config.paths.reports_dir)
                .join(format!("{stem}_report.{}", format.extension()))
        },
        Path::to_path_buf,
    );

    report.generate(format, &output_path).map_err(|e| {
        error!("Report generation failed for {}: {e}", output_path.display());
        format!("✗ Failed to generate {format} report: {e}")
    })?;

    info!("Report exported to: {}", output_path.display());
    Ok(output_path)
}
