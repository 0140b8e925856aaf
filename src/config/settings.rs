//! Application configuration loading.
//!
//! Non-secret tunables live in an optional `config.toml` at the working
//! directory root; secrets (spreadsheet ID, API tokens) come from the
//! environment, loaded from `.env` by `main` before this module runs.
//! Environment variables override file values where both exist. The Discord
//! bot token is deliberately not part of [`AppConfig`] - `main` reads it
//! directly right before starting the bot.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Default stats window when nothing is configured.
const DEFAULT_STATS_WINDOW_DAYS: i64 = 30;
const DEFAULT_API_HOST: &str = "0.0.0.0";
const DEFAULT_API_PORT: u16 = 8000;
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Contents of config.toml. Every section and field is optional; missing
/// values fall back to the defaults above.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// AI backend tunables
    #[serde(default)]
    pub ai: AiSettings,
    /// HTTP API bind settings
    #[serde(default)]
    pub api: ApiSettings,
    /// Statistics engine tunables
    #[serde(default)]
    pub stats: StatsSettings,
}

/// `[ai]` section of config.toml
#[derive(Debug, Default, Deserialize)]
pub struct AiSettings {
    /// Gemini model name
    pub model: Option<String>,
}

/// `[api]` section of config.toml
#[derive(Debug, Default, Deserialize)]
pub struct ApiSettings {
    /// Bind host for the HTTP API
    pub host: Option<String>,
    /// Bind port for the HTTP API
    pub port: Option<u16>,
}

/// `[stats]` section of config.toml
#[derive(Debug, Default, Deserialize)]
pub struct StatsSettings {
    /// Trailing window (days) for completion rate and last activity
    pub window_days: Option<i64>,
}

/// Fully resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// ID of the spreadsheet backing the record store
    pub spreadsheet_id: String,
    /// Bearer token for the spreadsheet service
    pub sheets_token: String,
    /// API key for the generative-text backend
    pub gemini_api_key: String,
    /// Model name for the generative-text backend
    pub gemini_model: String,
    /// Bind host for the HTTP API
    pub api_host: String,
    /// Bind port for the HTTP API
    pub api_port: u16,
    /// Trailing window (days) for the statistics engine
    pub stats_window_days: i64,
}

/// Parses a settings file.
///
/// # Errors
/// Returns [`Error::Config`] if the file cannot be read or parsed.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

fn required_env(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| Error::Config {
        message: format!("{name} is not set"),
    })
}

/// Loads the full application configuration: optional `./config.toml` plus
/// required and optional environment variables.
///
/// Required env vars: `SPREADSHEET_ID`, `GOOGLE_SHEETS_TOKEN`,
/// `GEMINI_API_KEY`. Optional overrides: `GEMINI_MODEL`, `API_HOST`,
/// `API_PORT`.
///
/// # Errors
/// Returns [`Error::Config`] when a required variable is missing or the
/// settings file is malformed.
pub fn load_app_configuration() -> Result<AppConfig> {
    let settings = if Path::new("config.toml").exists() {
        load_settings("config.toml")?
    } else {
        tracing::debug!("no config.toml found, using defaults");
        Settings::default()
    };

    let api_port = match std::env::var("API_PORT") {
        Ok(raw) => raw.parse().map_err(|_| Error::Config {
            message: format!("API_PORT is not a valid port number: {raw}"),
        })?,
        Err(_) => settings.api.port.unwrap_or(DEFAULT_API_PORT),
    };

    Ok(AppConfig {
        spreadsheet_id: required_env("SPREADSHEET_ID")?,
        sheets_token: required_env("GOOGLE_SHEETS_TOKEN")?,
        gemini_api_key: required_env("GEMINI_API_KEY")?,
        gemini_model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| {
            settings
                .ai
                .model
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string())
        }),
        api_host: std::env::var("API_HOST").unwrap_or_else(|_| {
            settings
                .api
                .host
                .unwrap_or_else(|| DEFAULT_API_HOST.to_string())
        }),
        api_port,
        stats_window_days: settings
            .stats
            .window_days
            .unwrap_or(DEFAULT_STATS_WINDOW_DAYS),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_full_settings() {
        let toml_str = r#"
            [ai]
            model = "gemini-1.5-pro"

            [api]
            host = "127.0.0.1"
            port = 9000

            [stats]
            window_days = 14
        "#;

        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.ai.model.as_deref(), Some("gemini-1.5-pro"));
        assert_eq!(settings.api.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(settings.api.port, Some(9000));
        assert_eq!(settings.stats.window_days, Some(14));
    }

    #[test]
    fn test_parse_empty_settings_defaults_everything() {
        let settings: Settings = toml::from_str("").unwrap();
        assert!(settings.ai.model.is_none());
        assert!(settings.api.host.is_none());
        assert!(settings.api.port.is_none());
        assert!(settings.stats.window_days.is_none());
    }

    #[test]
    fn test_parse_partial_section() {
        let settings: Settings = toml::from_str("[stats]\nwindow_days = 7\n").unwrap();
        assert_eq!(settings.stats.window_days, Some(7));
        assert!(settings.api.port.is_none());
    }
}
