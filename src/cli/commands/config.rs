//! `config` command: show, change and reset the user configuration

use crate::args::ConfigSubcommand;
use std::io::{self, Write};
use tuition_pathways::config::Config;
use tuition_pathways::info;

/// Dispatch config subcommands. With no subcommand every value is shown.
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), String> {
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => {
            print_all(config);
            Ok(())
        }
        Some(ConfigSubcommand::Get { key: Some(key) }) => {
            println!("{}", lookup(config, &key)?);
            Ok(())
        }
        Some(ConfigSubcommand::Set { key, value }) => {
            update(config, &key, &value)?;
            persist(config)?;
            println!("✓ Set {key} = {value}");
            Ok(())
        }
        Some(ConfigSubcommand::Unset { key }) => {
            restore(config, defaults, &key)?;
            persist(config)?;
            println!("✓ Reset {key} to default");
            Ok(())
        }
        Some(ConfigSubcommand::Reset) => reset(),
    }
}

fn print_all(config: &Config) {
    println!("\n=== Configuration ===\n");
    print!("{config}");
    println!("\nFile: {}", Config::get_config_file_path().display());
}

fn lookup(config: &Config, key: &str) -> Result<String, String> {
    config.get(key).ok_or_else(|| {
        format!("✗ Unknown config key '{key}'. Known keys: level, file, verbose, reports_dir, pricing_file, catalog_file, analytics")
    })
}

fn update(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    config.set(key, value).map_err(|e| format!("✗ {e}"))
}

fn restore(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults).map_err(|e| format!("✗ {e}"))
}

fn persist(config: &Config) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("✗ Failed to save config: {e}"))?;
    info!("Saved config to {}", Config::get_config_file_path().display());
    Ok(())
}

fn reset() -> Result<(), String> {
    let path = Config::get_config_file_path();
    if !path.exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Reset {} to defaults? (y/n): ", path.display());
    io::stdout().flush().ok();
    let mut response = String::new();
    io::stdin()
        .read_line(&mut response)
        .map_err(|e| format!("✗ Failed to read confirmation: {e}"))?;

    if matches!(response.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        Config::reset().map_err(|e| format!("✗ Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("Reset cancelled");
    }
    Ok(())
}
