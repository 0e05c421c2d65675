/*
 * Config Module
 *
 * User config for the countdown window, read from an optional TOML file.
 * Every key is optional; anything missing falls back to the defaults below.
 * Command line flags are applied on top by `main.rs`.
 *
 * Example:
 *
 *   snow_enabled = true
 *   days_remaining = 12
 *   background = [30, 42, 56]
 *   log_level = "debug"
 *
 *   [field]
 *   max_population = 100
 *   size_multiplier = 1.5
 */

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr as _};
use serde::Deserialize;

use crate::params::FieldParams;

// The valid log levels. Based on the `tracing` crate.
#[derive(Deserialize, clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
            Self::Off => "off",
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    // Whether the snow overlay starts switched on
    pub snow_enabled: bool,
    // Density driver: days left in the countdown
    pub days_remaining: i64,
    // Fallback backdrop colour, RGB
    pub background: [u8; 3],
    pub show_debug: bool,
    pub log_level: LogLevel,
    // Fixed RNG seed for reproducible snowfall
    pub seed: Option<u64>,
    pub field: FieldParams,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snow_enabled: true,
            days_remaining: 24,
            background: [0x1E, 0x2A, 0x38],
            show_debug: false,
            log_level: LogLevel::Info,
            seed: None,
            field: FieldParams::default(),
        }
    }
}

impl Config {
    // Parse and validate config from TOML text
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).wrap_err("Couldn't parse config")?;
        config
            .field
            .validate()
            .wrap_err("Invalid [field] settings in config")?;
        Ok(config)
    }

    // Read config from `path`, or use the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Ok(Self::default());
        };

        let source = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Couldn't read config file {}", path.display()))?;
        let config = Self::from_toml(&source)
            .wrap_err_with(|| format!("Couldn't load config file {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_field_table_keeps_other_defaults() {
        let config = Config::from_toml(
            r#"
            days_remaining = 3
            log_level = "trace"

            [field]
            max_population = 90
            "#,
        )
        .unwrap();

        assert_eq!(config.days_remaining, 3);
        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.field.max_population, 90);
        assert_eq!(config.field.max_step_change, 6);
    }

    #[test]
    fn invalid_field_is_rejected() {
        let result = Config::from_toml(
            r#"
            [field]
            min_speed_y = 90.0
            max_speed_y = 10.0
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_path_gives_defaults() {
        assert_eq!(Config::load(None).unwrap(), Config::default());
    }
}
