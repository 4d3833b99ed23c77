//! Configuration management for Travel Genie
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TravelGenieError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for Travel Genie
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TravelGenieConfig {
    /// Destination catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Budget prompt settings
    #[serde(default)]
    pub budget: BudgetConfig,
    /// Terminal display settings
    #[serde(default)]
    pub display: DisplayConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Destination catalog settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the destinations CSV file
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

/// Budget prompt settings, in whole currency units
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetConfig {
    #[serde(default = "default_budget_min")]
    pub min: u32,
    #[serde(default = "default_budget_max")]
    pub max: u32,
    /// Used when the user just presses enter
    #[serde(default = "default_budget_default")]
    pub default: u32,
    #[serde(default = "default_budget_step")]
    pub step: u32,
}

/// Terminal display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Pause before revealing a match, 0 disables it
    #[serde(default = "default_result_delay_ms")]
    pub result_delay_ms: u64,
    /// Width of the trend chart bars in characters
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_catalog_path() -> String {
    "destinations.csv".to_string()
}

fn default_budget_min() -> u32 {
    100
}

fn default_budget_max() -> u32 {
    10_000
}

fn default_budget_default() -> u32 {
    2_000
}

fn default_budget_step() -> u32 {
    100
}

fn default_result_delay_ms() -> u64 {
    1_500
}

fn default_chart_width() -> usize {
    40
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            min: default_budget_min(),
            max: default_budget_max(),
            default: default_budget_default(),
            step: default_budget_step(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            result_delay_ms: default_result_delay_ms(),
            chart_width: default_chart_width(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl BudgetConfig {
    /// Clamp a requested budget into the configured range and snap it down to the step grid
    #[must_use]
    pub fn normalize(&self, requested: f64) -> u32 {
        let clamped = requested.clamp(f64::from(self.min), f64::from(self.max));
        let steps_above_min = ((clamped - f64::from(self.min)) / f64::from(self.step)).floor();
        // Bounded by max, so the cast cannot overflow
        self.min + (steps_above_min as u32) * self.step
    }
}

impl TravelGenieConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path()
                .filter(|path| path.exists())
                .unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // TRAVELGENIE_CATALOG__PATH overrides catalog.path
        builder = builder.add_source(
            Environment::with_prefix("TRAVELGENIE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TravelGenieConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("travelgenie").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.catalog.path.is_empty() {
            self.catalog.path = default_catalog_path();
        }
        if self.budget.step == 0 {
            self.budget.step = default_budget_step();
        }
        if self.display.chart_width == 0 {
            self.display.chart_width = default_chart_width();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_budget()?;
        self.validate_display()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_budget(&self) -> Result<()> {
        let budget = &self.budget;
        if budget.min >= budget.max {
            return Err(TravelGenieError::config(format!(
                "Budget min ({}) must be lower than budget max ({})",
                budget.min, budget.max
            ))
            .into());
        }

        if budget.default < budget.min || budget.default > budget.max {
            return Err(TravelGenieError::config(format!(
                "Budget default ({}) must lie between {} and {}",
                budget.default, budget.min, budget.max
            ))
            .into());
        }

        if budget.step > budget.max - budget.min {
            return Err(TravelGenieError::config("Budget step cannot exceed the budget range").into());
        }

        Ok(())
    }

    fn validate_display(&self) -> Result<()> {
        if self.display.result_delay_ms > 10_000 {
            return Err(TravelGenieError::config("Result delay cannot exceed 10000 ms").into());
        }

        if self.display.chart_width > 200 {
            return Err(TravelGenieError::config("Chart width cannot exceed 200 characters").into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TravelGenieError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TravelGenieError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
