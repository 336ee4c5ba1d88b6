//! Application settings loaded from `finance.toml`.
//!
//! Every field has a default, so a missing file yields a usable
//! configuration. `DATABASE_URL` in the environment (or `.env`) takes
//! precedence over the file's `database_url`.

use crate::config::database::DEFAULT_DATABASE_URL;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Default location of the settings file.
pub const DEFAULT_CONFIG_PATH: &str = "finance.toml";

/// Tunables shared by the store, the aggregator and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `SeaORM` connection string
    pub database_url: String,
    /// Rows per page when listing expenses
    pub page_size: u64,
    /// How many categories the dashboard ranks
    pub dashboard_top_categories: u64,
    /// How many recent expenses the dashboard shows
    pub recent_expenses_limit: u64,
    /// Reminders due within this many days count as upcoming
    pub reminder_window_days: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            page_size: 10,
            dashboard_top_categories: 3,
            recent_expenses_limit: 10,
            reminder_window_days: 7,
        }
    }
}

impl AppConfig {
    fn validate(self) -> Result<Self> {
        if self.page_size == 0 {
            return Err(Error::Config {
                message: "page_size must be at least 1".to_string(),
            });
        }
        Ok(self)
    }
}

/// Parses settings from a TOML string.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse settings: {e}"),
    })?;
    config.validate()
}

/// Loads settings from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A value is out of range
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;
    parse_config(&contents)
}

/// Loads the application configuration the way the binary does.
///
/// The file named by `FINANCE_CONFIG` (or `finance.toml`) is optional;
/// `DATABASE_URL` overrides the database setting.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = std::env::var("FINANCE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let mut config = if Path::new(&path).exists() {
        info!("Loading settings from {path}");
        load_config(&path)?
    } else {
        debug!("No settings file at {path}, using defaults");
        AppConfig::default()
    };

    if let Ok(url) = std::env::var("DATABASE_URL") {
        config.database_url = url;
    }

    Ok(config)
}
