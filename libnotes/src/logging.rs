//! Centralized logging configuration for Noteboard binaries
//!
//! Provides consistent logging setup with support for:
//! - Text, JSON, and pretty-printed output
//! - Environment variable configuration
//! - Writing to a file instead of stderr (needed by the TUI, which owns the terminal)
//!
//! # Examples
//!
//! ```no_run
//! use libnotes::logging::{LoggingConfig, LogFormat};
//!
//! let config = LoggingConfig::new(LogFormat::Json, "info".to_string(), false);
//! config.init().expect("logging");
//! ```

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{expand_path, LoggingSection};

/// Log format from the environment
pub const LOG_FORMAT_ENV: &str = "NOTEBOARD_LOG_FORMAT";

/// Log level from the environment
pub const LOG_LEVEL_ENV: &str = "NOTEBOARD_LOG_LEVEL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text output (no colors, for piping)
    Text,
    /// Machine-parseable JSON (one JSON object per line)
    Json,
    /// Pretty-printed with colors (for development)
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json, pretty",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
    pub verbose: bool,
    /// Append to this file instead of stderr
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Create a new logging configuration writing to stderr
    ///
    /// # Arguments
    ///
    /// * `format` - Log output format (text, json, or pretty)
    /// * `level` - Minimum log level (error, warn, info, debug, trace)
    /// * `verbose` - If true, defaults to debug level
    pub fn new(format: LogFormat, level: String, verbose: bool) -> Self {
        Self {
            format,
            level,
            verbose,
            file: None,
        }
    }

    /// Build from the `[logging]` config section, with env vars taking precedence
    pub fn from_section(section: &LoggingSection) -> Self {
        let format = std::env::var(LOG_FORMAT_ENV)
            .ok()
            .or_else(|| section.format.clone())
            .and_then(|s| s.parse().ok())
            .unwrap_or(LogFormat::Text);

        let level = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .or_else(|| section.level.clone())
            .unwrap_or_else(|| "info".to_string());

        Self {
            format,
            level,
            verbose: false,
            file: section.file.as_deref().map(expand_path),
        }
    }

    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = Some(file);
        self
    }

    fn filter(&self) -> EnvFilter {
        let fallback = if self.verbose { "debug" } else { self.level.as_str() };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    }

    /// Initialize logging with the configured settings
    ///
    /// This should be called once at the start of your program.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened.
    ///
    /// # Panics
    ///
    /// Panics if the logging subscriber has already been initialized
    pub fn init(&self) -> std::io::Result<()> {
        match &self.file {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                self.init_with_writer(Mutex::new(file), false);
            }
            None => self.init_with_writer(std::io::stderr, true),
        }
        Ok(())
    }

    fn init_with_writer<W>(&self, writer: W, ansi: bool)
    where
        W: for<'w> tracing_subscriber::fmt::MakeWriter<'w> + Send + Sync + 'static,
    {
        let filter = self.filter();

        match self.format {
            LogFormat::Json => {
                // One JSON object per line
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_current_span(true)
                    .with_span_list(true)
                    .flatten_event(true)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .init();
            }
            LogFormat::Pretty => {
                tracing_subscriber::fmt()
                    .pretty()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_ansi(ansi)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .init();
            }
            LogFormat::Text => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_target(false)
                    .with_level(true)
                    .init();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);

        // Case insensitive
        assert_eq!("TEXT".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("Json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    }

    #[test]
    fn test_log_format_from_str_invalid() {
        let result = "invalid".parse::<LogFormat>();
        assert!(result.unwrap_err().contains("Invalid log format: 'invalid'"));
    }

    #[test]
    fn test_log_format_display() {
        assert_eq!(LogFormat::Text.to_string(), "text");
        assert_eq!(LogFormat::Json.to_string(), "json");
        assert_eq!(LogFormat::Pretty.to_string(), "pretty");
    }

    #[test]
    #[serial]
    fn test_from_section() {
        std::env::remove_var(LOG_FORMAT_ENV);
        std::env::remove_var(LOG_LEVEL_ENV);

        let section = LoggingSection {
            format: Some("json".to_string()),
            level: Some("warn".to_string()),
            file: Some("/tmp/noteboard.log".to_string()),
        };
        let config = LoggingConfig::from_section(&section);

        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "warn");
        assert_eq!(config.file, Some(PathBuf::from("/tmp/noteboard.log")));
    }

    #[test]
    #[serial]
    fn test_env_overrides_section() {
        std::env::set_var(LOG_FORMAT_ENV, "pretty");
        std::env::set_var(LOG_LEVEL_ENV, "trace");

        let config = LoggingConfig::from_section(&LoggingSection::default());
        std::env::remove_var(LOG_FORMAT_ENV);
        std::env::remove_var(LOG_LEVEL_ENV);

        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.level, "trace");
        assert!(config.file.is_none());
    }
}
