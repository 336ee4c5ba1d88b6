/// Database configuration and connection management
pub mod database;

/// Application settings from `finance.toml` and the environment
pub mod settings;

pub use settings::{AppConfig, load_app_configuration};
