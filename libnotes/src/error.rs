//! Error types for Noteboard

use thiserror::Error;

pub type Result<T> = std::result::Result<T, NotesError>;

#[derive(Error, Debug)]
pub enum NotesError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The server answered with `null` where a note was expected
    #[error("Empty response: {0}")]
    EmptyResponse(String),

    /// Application context was requested with no provider in scope
    #[error("use_app_context must be within AppProvider")]
    MissingProvider,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl NotesError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NotesError::InvalidInput(_) => 3,
            NotesError::MissingProvider => 70,
            NotesError::Config(_) => 1,
            NotesError::Api(_) => 1,
            NotesError::EmptyResponse(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),
}
