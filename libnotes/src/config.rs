//! Configuration management for Noteboard

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Overrides the config file location
pub const CONFIG_ENV: &str = "NOTEBOARD_CONFIG";

/// Overrides `api.base_url`
pub const API_URL_ENV: &str = "NOTEBOARD_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request timeout; 0 waits forever
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSection {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_true")]
    pub colors: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingSection {
    pub format: Option<String>,
    pub level: Option<String>,
    pub file: Option<String>,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_true() -> bool {
    true
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            colors: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file at the XDG default is not an error: the built-in
    /// defaults are used instead. `NOTEBOARD_API_URL` is applied last.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        let explicit = std::env::var(CONFIG_ENV).is_ok();

        let config = if !explicit && !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            Self::default_config()
        } else {
            Self::load_from_path(&config_path)?
        };

        Ok(config.with_env_overrides())
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration
    pub fn default_config() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:3000".to_string(),
                timeout_secs: default_timeout_secs(),
            },
            ui: UiSection::default(),
            logging: LoggingSection::default(),
        }
    }

    /// Apply environment overrides on top of file values
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api.base_url = url;
            }
        }
        if std::env::var("NO_COLOR").is_ok() {
            self.ui.colors = false;
        }
        self
    }

    fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField("api.base_url".to_string()).into());
        }
        Ok(())
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("noteboard").join("config.toml"))
}

/// Resolve the data directory path following XDG Base Directory spec
pub fn resolve_data_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| ConfigError::MissingField("data directory".to_string()))?;

    Ok(data_dir.join("noteboard"))
}

/// Expand `~` in a configured path
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
[api]
base_url = "http://notes.local:8080"
timeout_secs = 3

[ui]
tick_rate_ms = 250
colors = false

[logging]
format = "json"
level = "debug"
file = "/tmp/notes.log"
"#,
        );

        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://notes.local:8080");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert!(!config.ui.colors);
        assert_eq!(config.logging.format.as_deref(), Some("json"));
        assert_eq!(config.logging.file.as_deref(), Some("/tmp/notes.log"));
    }

    #[test]
    fn test_optional_sections_default() {
        let file = write_config("[api]\nbase_url = \"http://localhost:4000\"\n");

        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.ui, UiSection::default());
        assert_eq!(config.logging, LoggingSection::default());
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let file = write_config("[api]\nbase_url = \"  \"\n");

        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(err.to_string().contains("api.base_url"));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let file = write_config("[api\nbase_url = 1");

        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_explicit_file_is_read_error() {
        let err = Config::load_from_path(Path::new("/nonexistent/noteboard.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    #[serial]
    fn test_env_config_path() {
        let file = write_config("[api]\nbase_url = \"http://from-env:1\"\n");
        std::env::set_var(CONFIG_ENV, file.path());
        std::env::remove_var(API_URL_ENV);

        let config = Config::load();
        std::env::remove_var(CONFIG_ENV);

        assert_eq!(config.unwrap().api.base_url, "http://from-env:1");
    }

    #[test]
    #[serial]
    fn test_env_api_url_override() {
        std::env::set_var(API_URL_ENV, "http://override:9");

        let config = Config::default_config().with_env_overrides();
        std::env::remove_var(API_URL_ENV);

        assert_eq!(config.api.base_url, "http://override:9");
    }

    #[test]
    #[serial]
    fn test_no_color_env_disables_colors() {
        std::env::set_var("NO_COLOR", "1");

        let config = Config::default_config().with_env_overrides();
        std::env::remove_var("NO_COLOR");

        assert!(!config.ui.colors);
    }
}
