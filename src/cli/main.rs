//! Command-line interface entry point for `Pathways`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use commands::estimate::EstimateArgs;
use commands::pathway::PathwayArgs;
use tuition_pathways::config::Config;
use tuition_pathways::core::analytics::{AnalyticsSink, LogSink, NoopSink, RecordingSink};
use tuition_pathways::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use tuition_pathways::{error, info};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| config.logging.level.parse::<Level>().ok())
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let recorder = RecordingSink::new();
    let analytics: &dyn AnalyticsSink = if args.trace_events {
        &recorder
    } else if config.analytics.enabled {
        &LogSink
    } else {
        &NoopSink
    };

    let result = dispatch(args.command, &mut config, &defaults, analytics);

    if args.trace_events {
        for event in recorder.events() {
            println!("event {} {}", event.name, event.payload);
        }
    }

    if let Err(e) = result {
        error!("{e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn dispatch(
    command: Command,
    config: &mut Config,
    defaults: &Config,
    analytics: &dyn AnalyticsSink,
) -> Result<(), String> {
    match command {
        Command::Config { subcommand } => commands::config::run(subcommand, config, defaults),
        Command::Programs { json } => commands::estimate::programs(&*load_pricing(config)?, json),
        Command::Discounts { json } => commands::estimate::discounts(&*load_pricing(config)?, json),
        Command::Estimate {
            program,
            partner,
            resident,
            alumni,
            reimbursement,
            json,
            report,
            output,
        } => {
            let args = EstimateArgs {
                program,
                partner,
                resident,
                alumni,
                reimbursement,
                json,
                report,
                output,
            };
            commands::estimate::run(&*load_pricing(config)?, analytics, &args, config)
        }
        Command::Catalog { pillar } => {
            commands::catalog::run(&*load_catalog(config)?, pillar.as_deref())
        }
        Command::Pathway {
            track,
            stage1,
            stage2,
            stage3,
            report,
            output,
        } => {
            let args = PathwayArgs {
                track,
                stage1,
                stage2,
                stage3,
                report,
                output,
            };
            commands::pathway::run(&*load_catalog(config)?, &args, config)
        }
        Command::Quiz { answers, json } => {
            commands::quiz::run(&*load_pricing(config)?, analytics, &answers, json)
        }
    }
}

fn load_pricing(
    config: &Config,
) -> Result<std::borrow::Cow<'static, tuition_pathways::core::catalog::PricingTable>, String> {
    config
        .pricing_table()
        .map_err(|e| format!("✗ Failed to load pricing table: {e}"))
}

fn load_catalog(
    config: &Config,
) -> Result<std::borrow::Cow<'static, tuition_pathways::core::catalog::CourseCatalog>, String> {
    config
        .course_catalog()
        .map_err(|e| format!("✗ Failed to load course catalog: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_uses_builtin_tables() {
        let mut config = Config::from_defaults();
        let defaults = Config::from_defaults();
        let sink = RecordingSink::new();

        assert!(dispatch(Command::Programs { json: true }, &mut config, &defaults, &sink).is_ok());
        assert!(dispatch(Command::Catalog { pillar: None }, &mut config, &defaults, &sink).is_ok());
        assert!(dispatch(
            Command::Quiz {
                answers: vec![0, 0, 0, 0, 0],
                json: true,
            },
            &mut config,
            &defaults,
            &sink,
        )
        .is_ok());
    }

    #[test]
    fn test_dispatch_reports_unreadable_pricing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut config = Config::from_defaults();
        let defaults = Config::from_defaults();
        config.paths.pricing_file = dir.path().join("missing.toml").to_string_lossy().to_string();

        let err = dispatch(Command::Discounts { json: false }, &mut config, &defaults, &NoopSink)
            .expect_err("missing pricing file");
        assert!(err.starts_with("✗ Failed to load pricing table"), "{err}");
    }

    #[test]
    fn test_dispatch_config_errors_are_returned() {
        let mut config = Config::from_defaults();
        let defaults = Config::from_defaults();
        let err = dispatch(
            Command::Config {
                subcommand: Some(args::ConfigSubcommand::Unset {
                    key: "database".to_string(),
                }),
            },
            &mut config,
            &defaults,
            &NoopSink,
        )
        .expect_err("unknown key");
        assert!(err.starts_with("✗ "), "{err}");
    }
}
