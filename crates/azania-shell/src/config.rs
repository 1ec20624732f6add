//! Shell configuration.
//!
//! The configuration is read from a `<meta name="azania-config" content="...">` tag in
//! `index.html`. Every field is optional and falls back to its default.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::components::ToastDefaults;
use crate::error::{ConfigError, ConfigResult};
use crate::providers::ThemeMode;

const CONFIG_SELECTOR: &str = r#"meta[name="azania-config"]"#;

/// Configuration of the application shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Name shown on the loading screen and in the document title.
    pub app_name: String,
    /// How long the shell waits for the first route resolution before giving up.
    pub watchdog_timeout_ms: u64,
    /// The path used by the "Go to Homepage" action and the emergency page load.
    pub fallback_path: String,
    /// Theme used when the visitor has not picked one.
    pub default_theme: ThemeMode,
    /// Maximum level of emitted log events.
    pub log_level: String,
    /// Defaults applied to every toast.
    pub toast: ToastDefaults,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            app_name: "Azania Academy".to_string(),
            watchdog_timeout_ms: 5000,
            fallback_path: "/".to_string(),
            default_theme: ThemeMode::Light,
            log_level: "info".to_string(),
            toast: ToastDefaults::default(),
        }
    }
}

impl ShellConfig {
    /// Parses a configuration from a JSON document.
    pub fn from_json(s: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Reads the configuration from the current document.
    ///
    /// Returns the default configuration if the meta tag is absent or invalid.
    pub fn from_document() -> Self {
        let content = web_sys::window()
            .and_then(|m| m.document())
            .and_then(|m| m.query_selector(CONFIG_SELECTOR).ok().flatten())
            .and_then(|m| m.get_attribute("content"));

        let Some(content) = content else {
            return Self::default();
        };

        match Self::from_json(&content) {
            Ok(m) => m,
            Err(e) => {
                tracing::warn!("invalid shell configuration, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Returns the watchdog timeout.
    pub fn watchdog_timeout(&self) -> Duration {
        Duration::from_millis(self.watchdog_timeout_ms)
    }

    /// Parses the configured log level.
    pub fn level_filter(&self) -> ConfigResult<LevelFilter> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ToastPosition;

    #[test]
    fn empty_document_uses_defaults() {
        let config = ShellConfig::from_json("{}").unwrap();

        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.watchdog_timeout(), Duration::from_secs(5));
        assert_eq!(config.fallback_path, "/");
        assert_eq!(config.toast.duration_ms, 4000);
        assert_eq!(config.toast.position, ToastPosition::TopRight);
    }

    #[test]
    fn partial_document_overrides_fields() {
        let config = ShellConfig::from_json(
            r#"{"watchdog_timeout_ms": 1500, "default_theme": "dark", "toast": {"position": "bottom-left"}}"#,
        )
        .unwrap();

        assert_eq!(config.watchdog_timeout(), Duration::from_millis(1500));
        assert_eq!(config.default_theme, ThemeMode::Dark);
        assert_eq!(config.toast.position, ToastPosition::BottomLeft);
        assert_eq!(config.toast.duration_ms, 4000);
        assert_eq!(config.app_name, "Azania Academy");
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(matches!(
            ShellConfig::from_json("{\"watchdog_timeout_ms\": \"soon\"}"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn log_level() {
        let mut config = ShellConfig::default();
        assert_eq!(config.level_filter().unwrap(), LevelFilter::INFO);

        config.log_level = "debug".into();
        assert_eq!(config.level_filter().unwrap(), LevelFilter::DEBUG);

        config.log_level = "chatty".into();
        assert!(matches!(
            config.level_filter(),
            Err(ConfigError::LogLevel(m)) if m == "chatty"
        ));
    }
}
