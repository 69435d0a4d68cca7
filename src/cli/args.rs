//! CLI argument definitions for `Pathways`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use tuition_pathways::config::ConfigOverrides;
use tuition_pathways::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// List priced programs with their base tuition.
    Programs {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the discount rules.
    Discounts {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Estimate tuition for a program.
    ///
    /// Discounts apply in a fixed order: workforce partner, Hoboken resident,
    /// alumni, then employer reimbursement.
    Estimate {
        /// Program code (see `pathways programs`)
        #[arg(value_name = "CODE")]
        program: String,

        /// Employer is a workforce partner (not available for certificates)
        #[arg(long)]
        partner: bool,

        /// Hoboken resident
        #[arg(long)]
        resident: bool,

        /// Stevens alumni
        #[arg(long)]
        alumni: bool,

        /// Annual employer tuition reimbursement in dollars
        #[arg(long, value_name = "AMOUNT")]
        reimbursement: Option<String>,

        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,

        /// Also write a report: markdown (md) or html
        #[arg(long, value_name = "FORMAT")]
        report: Option<String>,

        /// Report output path (defaults to the configured reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Browse pillars, tracks, and courses.
    Catalog {
        /// Only show one pillar
        #[arg(long, value_name = "ID")]
        pillar: Option<String>,
    },
    /// Build a learning path non-interactively.
    ///
    /// Selects the track, toggles the listed courses into each stage, and
    /// walks the wizard forward as far as the selections allow.
    Pathway {
        /// Track id (see `pathways catalog`)
        #[arg(long, value_name = "ID")]
        track: String,

        /// Stage 1 course ids, comma-separated
        #[arg(long, value_name = "IDS", value_delimiter = ',')]
        stage1: Vec<String>,

        /// Stage 2 course ids, comma-separated
        #[arg(long, value_name = "IDS", value_delimiter = ',')]
        stage2: Vec<String>,

        /// Stage 3 course ids, comma-separated
        #[arg(long, value_name = "IDS", value_delimiter = ',')]
        stage3: Vec<String>,

        /// Also write a report: markdown (md) or html
        #[arg(long, value_name = "FORMAT")]
        report: Option<String>,

        /// Report output path (defaults to the configured reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Score the program readiness quiz.
    ///
    /// Without answers, prints the questions.
    Quiz {
        /// One option index per question, comma-separated (e.g. `0,2,1,3,1`)
        #[arg(long, value_name = "INDEXES", value_delimiter = ',')]
        answers: Vec<usize>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "pathways",
    about = "Tuition estimates and learning pathways",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print every analytics event tracked during the command
    #[arg(long)]
    pub trace_events: bool,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Use another pricing table file
    #[arg(long = "pricing-file", value_name = "FILE")]
    pub pricing_file: Option<PathBuf>,

    /// Use another course catalog file
    #[arg(long = "catalog-file", value_name = "FILE")]
    pub catalog_file: Option<PathBuf>,

    /// Override config analytics logging (true/false)
    #[arg(long = "config-analytics", value_parser = BoolishValueParser::new())]
    pub config_analytics: Option<bool>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--reports-dir`) take precedence over
    /// long-form flags (e.g., `--config-reports-dir`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            reports_dir: self
                .reports_dir
                .as_ref()
                .or(self.config_reports_dir.as_ref())
                .map(|p| p.to_string_lossy().to_string()),
            pricing_file: self
                .pricing_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            catalog_file: self
                .catalog_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            analytics: self.config_analytics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pathways").chain(args.iter().copied()))
            .expect("arguments parse")
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = parse(&["programs"]).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.reports_dir.is_none());
        assert!(overrides.pricing_file.is_none());
        assert!(overrides.catalog_file.is_none());
        assert!(overrides.analytics.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = parse(&[
            "--config-level",
            "debug",
            "--config-log-file",
            "/tmp/test.log",
            "--config-verbose",
            "true",
            "--pricing-file",
            "/data/pricing.toml",
            "--config-analytics",
            "yes",
            "discounts",
        ]);
        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.pricing_file, Some("/data/pricing.toml".to_string()));
        assert_eq!(overrides.analytics, Some(true));
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let cli = parse(&[
            "--config-reports-dir",
            "/long/out",
            "--reports-dir",
            "/short/out",
            "programs",
        ]);
        assert_eq!(cli.to_config_overrides().reports_dir, Some("/short/out".to_string()));

        let cli = parse(&["--config-reports-dir", "/long/out", "programs"]);
        assert_eq!(cli.to_config_overrides().reports_dir, Some("/long/out".to_string()));
    }

    #[test]
    fn test_estimate_flags() {
        let cli = parse(&["estimate", "mba", "--partner", "--alumni", "--reimbursement", "5000"]);
        match cli.command {
            Command::Estimate {
                program,
                partner,
                resident,
                alumni,
                reimbursement,
                ..
            } => {
                assert_eq!(program, "mba");
                assert!(partner && alumni && !resident);
                assert_eq!(reimbursement.as_deref(), Some("5000"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_pathway_lists_split_on_commas() {
        let cli = parse(&[
            "pathway",
            "--track",
            "applied-ml",
            "--stage1",
            "AI-501,AI-502",
            "--stage3",
            "MS-700",
        ]);
        match cli.command {
            Command::Pathway {
                track,
                stage1,
                stage2,
                stage3,
                ..
            } => {
                assert_eq!(track, "applied-ml");
                assert_eq!(stage1, vec!["AI-501", "AI-502"]);
                assert!(stage2.is_empty());
                assert_eq!(stage3, vec!["MS-700"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_quiz_answers() {
        let cli = parse(&["quiz", "--answers", "0,2,1,3,1"]);
        match cli.command {
            Command::Quiz { answers, json } => {
                assert_eq!(answers, vec![0, 2, 1, 3, 1]);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
