//! Configuration management for trend-scout
//!
//! Handles loading and validating configuration from environment variables
//! and TOML files. Window definitions, report field names and the 10-entry
//! ranking caps are a binding output contract and are deliberately not
//! configurable.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Report output configuration
    pub report: ReportConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Report output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Where to write the report; stdout when unset
    pub output_path: Option<PathBuf>,

    /// Pretty-print the JSON report
    pub pretty: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let output_path = std::env::var("TREND_SCOUT_OUTPUT").ok().map(PathBuf::from);

        let pretty = std::env::var("TREND_SCOUT_PRETTY")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        let log_level =
            std::env::var("TREND_SCOUT_LOG_LEVEL").unwrap_or_else(|_| String::from("info"));

        let log_format =
            std::env::var("TREND_SCOUT_LOG_FORMAT").unwrap_or_else(|_| String::from("text"));

        Ok(Self {
            report: ReportConfig {
                output_path,
                pretty,
            },
            logging: LoggingConfig {
                level: log_level,
                format: log_format,
            },
        })
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.logging.level.as_str()) {
            anyhow::bail!("unknown log level: {}", self.logging.level);
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            anyhow::bail!("unknown log format: {}", self.logging.format);
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report: ReportConfig {
                output_path: None,
                pretty: false,
            },
            logging: LoggingConfig {
                level: String::from("info"),
                format: String::from("text"),
            },
        }
    }
}
