//! Error types for notes-tui
//!
//! Provides TUI-specific error types that wrap library errors
//! and terminal/IO errors for unified error handling.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// State or API layer error
    #[error("Notes error: {0}")]
    Notes(#[from] libnotes::NotesError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_provider_keeps_exit_code() {
        let error = TuiError::from(libnotes::NotesError::MissingProvider);

        assert!(error.to_string().contains("use_app_context must be within AppProvider"));
        match error {
            TuiError::Notes(inner) => assert_eq!(inner.exit_code(), 70),
            other => panic!("unexpected {:?}", other),
        }
    }
}
