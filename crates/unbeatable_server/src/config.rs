//! Server configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! environment variables (a `.env` file is loaded into the environment by
//! the binary), then command-line flags.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Configuration for the game server.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct ServerConfig {
    /// Address to bind to.
    #[serde(default = "default_host")]
    host: String,

    /// Port to bind to.
    #[serde(default = "default_port")]
    port: u16,

    /// Telegram bot token for win/loss notifications.
    #[serde(default)]
    telegram_bot_token: Option<String>,

    /// Telegram chat that receives notifications.
    #[serde(default)]
    telegram_chat_id: Option<String>,

    /// Base URL of the Telegram Bot API.
    #[serde(default = "default_telegram_api_base")]
    telegram_api_base: String,

    /// Timeout for a single notification request, in seconds.
    #[serde(default = "default_notify_timeout_secs")]
    notify_timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_telegram_api_base() -> String {
    "https://api.telegram.org".to_string()
}

fn default_notify_timeout_secs() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            telegram_bot_token: None,
            telegram_chat_id: None,
            telegram_api_base: default_telegram_api_base(),
            notify_timeout_secs: default_notify_timeout_secs(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(host = %config.host, port = config.port, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the layered configuration.
    ///
    /// A missing file is not an error; defaults are used instead.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = if path.as_ref().exists() {
            Self::from_file(path.as_ref())?
        } else {
            info!("Config file not found, using defaults");
            Self::default()
        };
        config.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Applies `HOST`, `PORT`, `TELEGRAM_BOT_TOKEN`, `TELEGRAM_CHAT_ID` and
    /// `TELEGRAM_API_BASE` from `lookup`.
    pub fn with_env_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = port
                .trim()
                .parse()
                .map_err(|e| ConfigError::new(format!("Invalid PORT {:?}: {}", port, e)))?;
        }
        if let Some(token) = lookup("TELEGRAM_BOT_TOKEN").filter(|t| !t.is_empty()) {
            self.telegram_bot_token = Some(token);
        }
        if let Some(chat_id) = lookup("TELEGRAM_CHAT_ID").filter(|c| !c.is_empty()) {
            self.telegram_chat_id = Some(chat_id);
        }
        if let Some(base) = lookup("TELEGRAM_API_BASE") {
            self.telegram_api_base = base;
        }
        Ok(self)
    }

    /// Returns the notification request timeout.
    pub fn notify_timeout(&self) -> Duration {
        Duration::from_secs(self.notify_timeout_secs)
    }

    /// Returns the `host:port` pair to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(*config.port(), 8000);
        assert_eq!(config.notify_timeout(), Duration::from_secs(10));
        assert!(config.telegram_bot_token().is_none());
    }

    #[test]
    fn test_env_overrides() {
        let config = ServerConfig::default()
            .with_env_overrides(vars(&[
                ("PORT", "9100"),
                ("TELEGRAM_BOT_TOKEN", "123:abc"),
                ("TELEGRAM_CHAT_ID", "42"),
            ]))
            .unwrap();

        assert_eq!(*config.port(), 9100);
        assert_eq!(config.telegram_bot_token().as_deref(), Some("123:abc"));
        assert_eq!(config.telegram_chat_id().as_deref(), Some("42"));
        assert_eq!(config.host(), "127.0.0.1");
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let config = ServerConfig::default()
            .with_env_overrides(vars(&[("TELEGRAM_BOT_TOKEN", "")]))
            .unwrap();
        assert!(config.telegram_bot_token().is_none());
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = ServerConfig::default()
            .with_env_overrides(vars(&[("PORT", "eighty")]))
            .unwrap_err();
        assert!(err.message.contains("Invalid PORT"));
    }
}
