//! Configuration module for `CourseBuddy`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to [`Config::get_coursebuddy_dir`] inside config values
const DIR_VARIABLE: &str = "$COURSE_BUDDY";

/// Every key accepted by `config get/set/unset`, in display order
pub const CONFIG_KEYS: [&str; 7] = [
    "level",
    "file",
    "verbose",
    "feedback_file",
    "catalog_file",
    "reports_dir",
    "pdf_converter",
];

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
    /// Feedback JSON file (advice, feedback and schedule commands)
    #[serde(default)]
    pub feedback_file: String,
    /// Catalog TOML file; empty means the built-in catalog
    #[serde(default)]
    pub catalog_file: String,
    /// Directory for schedule report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Report rendering configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// HTML-to-PDF converter command; empty means auto-detect Chrome/Chromium
    #[serde(default)]
    pub pdf_converter: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Report settings
    #[serde(default)]
    pub report: ReportConfig,
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
    /// Override feedback file path
    pub feedback_file: Option<String>,
    /// Override catalog file path
    pub catalog_file: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
    /// Override PDF converter command
    pub pdf_converter: Option<String>,
}

/// Fill `target` from `default` when `target` is empty and `default` is not
fn fill_if_empty(target: &mut String, default: &str) -> bool {
    if target.is_empty() && !default.is_empty() {
        default.clone_into(target);
        true
    } else {
        false
    }
}

impl Config {
    /// Get the `$COURSE_BUDDY` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/coursebuddy`
    /// - macOS: `~/Library/Application Support/coursebuddy`
    /// - Windows: `%APPDATA%\coursebuddy`
    #[must_use]
    pub fn get_coursebuddy_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("coursebuddy")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used when loading an existing config file so that fields added in newer
    /// versions pick up their defaults. Only fields that are empty here and
    /// non-empty in `defaults` change.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let merged = [
            fill_if_empty(&mut self.logging.level, &defaults.logging.level),
            fill_if_empty(&mut self.logging.file, &defaults.logging.file),
            fill_if_empty(&mut self.paths.feedback_file, &defaults.paths.feedback_file),
            fill_if_empty(&mut self.paths.catalog_file, &defaults.paths.catalog_file),
            fill_if_empty(&mut self.paths.reports_dir, &defaults.paths.reports_dir),
            fill_if_empty(
                &mut self.report.pdf_converter,
                &defaults.report.pdf_converter,
            ),
        ];
        merged.contains(&true)
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for this run only; nothing is written back to the
    /// config file. Only `Some` values replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(feedback_file) = &overrides.feedback_file {
            self.paths.feedback_file.clone_from(feedback_file);
        }
        if let Some(catalog_file) = &overrides.catalog_file {
            self.paths.catalog_file.clone_from(catalog_file);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
        if let Some(converter) = &overrides.pdf_converter {
            self.report.pdf_converter.clone_from(converter);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// inside [`get_coursebuddy_dir`](Self::get_coursebuddy_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_coursebuddy_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$COURSE_BUDDY` in a config value
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_coursebuddy_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        for value in [
            &mut config.logging.file,
            &mut config.paths.feedback_file,
            &mut config.paths.catalog_file,
            &mut config.paths.reports_dir,
            &mut config.report.pdf_converter,
        ] {
            *value = Self::expand_variables(value);
        }

        Ok(config)
    }

    /// Initialize config from the compiled-in defaults
    ///
    /// # Panics
    /// Panics if the compiled-in defaults TOML cannot be parsed
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load config from the user config file, creating it from defaults on first run
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        match fs::read_to_string(&config_file)
            .ok()
            .and_then(|content| Self::from_toml(&content).ok())
        {
            Some(mut config) => {
                if config.merge_defaults(&defaults) {
                    let _ = config.save();
                }
                config
            }
            None => {
                crate::warn!(
                    "Could not read config at {}; using defaults",
                    config_file.display()
                );
                defaults
            }
        }
    }

    /// Save config to the user config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be saved
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
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "feedback_file" => Some(self.paths.feedback_file.clone()),
            "catalog_file" => Some(self.paths.catalog_file.clone()),
            "reports_dir" => Some(self.paths.reports_dir.clone()),
            "pdf_converter" => Some(self.report.pdf_converter.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value is invalid
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                value.parse::<crate::logger::Level>()?;
                self.logging.level = value.to_ascii_lowercase();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "feedback_file" => self.paths.feedback_file = value.to_string(),
            "catalog_file" => self.paths.catalog_file = value.to_string(),
            "reports_dir" => self.paths.reports_dir = value.to_string(),
            "pdf_converter" => self.report.pdf_converter = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is unknown
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "feedback_file" => self
                .paths
                .feedback_file
                .clone_from(&defaults.paths.feedback_file),
            "catalog_file" => self
                .paths
                .catalog_file
                .clone_from(&defaults.paths.catalog_file),
            "reports_dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "pdf_converter" => self
                .report
                .pdf_converter
                .clone_from(&defaults.report.pdf_converter),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by removing the config file
    ///
    /// # Errors
    /// Returns an error if the config file cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  feedback_file = \"{}\"", self.paths.feedback_file)?;
        writeln!(f, "  catalog_file = \"{}\"", self.paths.catalog_file)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[report]")?;
        writeln!(f, "  pdf_converter = \"{}\"", self.report.pdf_converter)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_is_gettable() {
        let config = Config::from_defaults();
        for key in CONFIG_KEYS {
            assert!(config.get(key).is_some(), "missing getter for {key}");
        }
    }

    #[test]
    fn test_set_level_validates() {
        let mut config = Config::default();
        assert!(config.set("level", "INFO").is_ok());
        assert_eq!(config.logging.level, "info");
        assert!(config.set("level", "chatty").is_err());
    }

    #[test]
    fn test_expand_variables() {
        let expanded = Config::expand_variables("$COURSE_BUDDY/logs/app.log");
        assert!(!expanded.contains(DIR_VARIABLE));
        assert!(expanded.ends_with("logs/app.log"));

        assert_eq!(Config::expand_variables("feedback.json"), "feedback.json");
    }
}
