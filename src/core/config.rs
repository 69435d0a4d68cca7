//! Configuration module for `Pathways`

use crate::core::catalog::{CatalogError, CourseCatalog, PricingTable};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

const DIR_VARIABLE: &str = "$PATHWAYS";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
    /// Replacement pricing table; empty means the built-in table
    #[serde(default)]
    pub pricing_file: String,
    /// Replacement course catalog; empty means the built-in catalog
    #[serde(default)]
    pub catalog_file: String,
}

/// Analytics configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Log analytics events as they are tracked
    #[serde(default)]
    pub enabled: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Analytics settings
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
    /// Override pricing table file
    pub pricing_file: Option<String>,
    /// Override course catalog file
    pub catalog_file: Option<String>,
    /// Override analytics logging
    pub analytics: Option<bool>,
}

impl Config {
    /// Get the `$PATHWAYS` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/pathways`
    /// - macOS: `~/Library/Application Support/pathways`
    /// - Windows: `%APPDATA%\pathways`
    #[must_use]
    pub fn get_pathways_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pathways")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and non-empty in `defaults` are
    /// filled in, so upgrades pick up new settings without touching user
    /// values.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }
        if self.paths.pricing_file.is_empty() && !defaults.paths.pricing_file.is_empty() {
            self.paths
                .pricing_file
                .clone_from(&defaults.paths.pricing_file);
            changed = true;
        }
        if self.paths.catalog_file.is_empty() && !defaults.paths.catalog_file.is_empty() {
            self.paths
                .catalog_file
                .clone_from(&defaults.paths.catalog_file);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for this run only; nothing is written to disk. Only
    /// `Some` values replace config values.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut config = Config::load();
    /// let overrides = ConfigOverrides {
    ///     level: Some("debug".to_string()),
    ///     ..Default::default()
    /// };
    /// config.apply_overrides(&overrides);
    /// ```
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file = Self::expand_variables(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir = Self::expand_variables(reports_dir);
        }
        if let Some(pricing_file) = &overrides.pricing_file {
            self.paths.pricing_file = Self::expand_variables(pricing_file);
        }
        if let Some(catalog_file) = &overrides.catalog_file {
            self.paths.catalog_file = Self::expand_variables(catalog_file);
        }

        if let Some(enabled) = overrides.analytics {
            self.analytics.enabled = enabled;
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// inside [`get_pathways_dir`].
    ///
    /// [`get_pathways_dir`]: Self::get_pathways_dir
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_pathways_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$PATHWAYS` to the config directory
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let expanded = Config::expand_variables("$PATHWAYS/logs/app.log");
    /// // "/home/user/.config/pathways/logs/app.log"
    /// ```
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_pathways_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults. `$PATHWAYS` is expanded in
    /// every path-like value.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);
        config.paths.pricing_file = Self::expand_variables(&config.paths.pricing_file);
        config.paths.catalog_file = Self::expand_variables(&config.paths.catalog_file);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// Debug builds use `DefaultCLIConfigDebug.toml`, release builds
    /// `DefaultCLIConfigRelease.toml`.
    ///
    /// # Panics
    /// Panics if the embedded default configuration cannot be parsed. The
    /// defaults are compiled in, so this only happens on a broken build.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - File exists: load it, merge missing fields from defaults, save if anything was added
    /// - First run: create the config directory and save the defaults
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to the platform config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the config
    /// cannot be serialized, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `reports_dir`,
    /// `pricing_file`, `catalog_file`, `analytics` (dashes are accepted in
    /// place of underscores).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            "pricing_file" | "pricing-file" => Some(self.paths.pricing_file.clone()),
            "catalog_file" | "catalog-file" => Some(self.paths.catalog_file.clone()),
            "analytics" => Some(self.analytics.enabled.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only. Call [`save()`](Config::save) to
    /// persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or a boolean value
    /// does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => self.logging.verbose = parse_bool(key, value)?,
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            "pricing_file" | "pricing-file" => self.paths.pricing_file = value.to_string(),
            "catalog_file" | "catalog-file" => self.paths.catalog_file = value.to_string(),
            "analytics" => self.analytics.enabled = parse_bool(key, value)?,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "pricing_file" | "pricing-file" => self
                .paths
                .pricing_file
                .clone_from(&defaults.paths.pricing_file),
            "catalog_file" | "catalog-file" => self
                .paths
                .catalog_file
                .clone_from(&defaults.paths.catalog_file),
            "analytics" => self.analytics.enabled = defaults.analytics.enabled,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// Succeeds without doing anything if the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Pricing table to use: the configured file, or the built-in table
    ///
    /// # Errors
    /// Returns [`CatalogError`] if the configured file cannot be loaded.
    pub fn pricing_table(&self) -> Result<Cow<'static, PricingTable>, CatalogError> {
        if self.paths.pricing_file.is_empty() {
            Ok(Cow::Borrowed(PricingTable::builtin()))
        } else {
            PricingTable::from_file(Path::new(&self.paths.pricing_file)).map(Cow::Owned)
        }
    }

    /// Course catalog to use: the configured file, or the built-in catalog
    ///
    /// # Errors
    /// Returns [`CatalogError`] if the configured file cannot be loaded.
    pub fn course_catalog(&self) -> Result<Cow<'static, CourseCatalog>, CatalogError> {
        if self.paths.catalog_file.is_empty() {
            Ok(Cow::Borrowed(CourseCatalog::builtin()))
        } else {
            CourseCatalog::from_file(Path::new(&self.paths.catalog_file)).map(Cow::Owned)
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, String> {
    value
        .parse::<bool>()
        .map_err(|_| format!("Invalid boolean value for '{key}': '{value}'"))
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;
        writeln!(f, "  pricing_file = \"{}\"", self.paths.pricing_file)?;
        writeln!(f, "  catalog_file = \"{}\"", self.paths.catalog_file)?;

        writeln!(f, "\n[analytics]")?;
        writeln!(f, "  enabled = {}", self.analytics.enabled)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse_and_expand() {
        let config = Config::from_defaults();
        assert!(!config.logging.level.is_empty());
        assert!(!config.logging.file.contains(DIR_VARIABLE));
        assert!(!config.paths.reports_dir.contains(DIR_VARIABLE));
        assert!(config.paths.pricing_file.is_empty());
    }

    #[test]
    fn test_builtin_reference_data_when_unset() {
        let config = Config::from_defaults();
        let table = config.pricing_table().expect("builtin table");
        assert!(matches!(table, Cow::Borrowed(_)));
        assert!(table.program("mba").is_some());
        let catalog = config.course_catalog().expect("builtin catalog");
        assert!(catalog.course("AI-501").is_some());
    }

    #[test]
    fn test_missing_pricing_file_is_an_error() {
        let mut config = Config::from_defaults();
        config.paths.pricing_file = "/definitely/not/here/pricing.toml".to_string();
        assert!(matches!(config.pricing_table(), Err(CatalogError::Io { .. })));
    }

    #[test]
    fn test_analytics_key_round_trip() {
        let mut config = Config::default();
        config.set("analytics", "true").expect("valid bool");
        assert_eq!(config.get("analytics").as_deref(), Some("true"));
        assert!(config.set("analytics", "sometimes").is_err());
        config.unset("analytics", &Config::default()).expect("known key");
        assert!(!config.analytics.enabled);
    }
}
