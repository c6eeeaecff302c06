//! API gateway
//!
//! The notes server is an external collaborator. This module defines the
//! logical operations the client needs from it as the [`NotesApi`] trait, an
//! HTTP implementation on top of `reqwest`, and an in-memory mock for tests.
//!
//! # Examples
//!
//! ```no_run
//! use libnotes::api::{HttpNotesApi, NotesApi};
//! use libnotes::config::Config;
//!
//! # async fn example() -> libnotes::Result<()> {
//! let config = Config::default_config();
//! let api = HttpNotesApi::new(&config.api)?;
//!
//! let list = api.get_list().await?;
//! println!("{} notes", list.items.len());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use reqwest::Method;

use crate::error::ApiError;
use crate::types::{DeleteResponse, ListResponse, NoteDto, NoteKey, NotePayload};

pub mod http;

// Mock is available for all builds (not just tests) so integration tests and
// the TUI's offline demo mode can use it
pub mod mock;

pub use http::HttpNotesApi;
pub use mock::MockNotesApi;

/// Logical operations offered by the notes server
///
/// Each call returns the parsed JSON body or an [`ApiError`] on transport
/// failure, non-2xx status, or an undecodable body.
#[async_trait]
pub trait NotesApi: Send + Sync {
    /// Fetch the full list
    async fn get_list(&self) -> Result<ListResponse, ApiError>;

    /// Create a note; `None` when the server answers `null`
    async fn add(&self, body: &NotePayload) -> Result<Option<NoteDto>, ApiError>;

    /// Update a note; `None` when the server answers `null`
    async fn edit(&self, key: NoteKey, body: &NotePayload) -> Result<Option<NoteDto>, ApiError>;

    /// Delete a note; success is signalled by the message, not the status
    async fn delete(&self, key: NoteKey) -> Result<DeleteResponse, ApiError>;

    /// Search notes; an empty vector means no results
    async fn search(&self, query: &str) -> Result<Vec<NoteDto>, ApiError>;
}

/// Method and path of each server operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    List,
    Add,
    Edit(NoteKey),
    Delete(NoteKey),
    Search,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::List | Endpoint::Search => Method::GET,
            Endpoint::Add => Method::POST,
            Endpoint::Edit(_) => Method::PUT,
            Endpoint::Delete(_) => Method::DELETE,
        }
    }

    /// Path relative to the configured base URL
    ///
    /// The search query is passed separately as the `q` parameter.
    pub fn path(&self) -> String {
        match self {
            Endpoint::List | Endpoint::Add => "/notes".to_string(),
            Endpoint::Edit(key) | Endpoint::Delete(key) => format!("/notes/{}", key),
            Endpoint::Search => "/notes/search".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_methods() {
        assert_eq!(Endpoint::List.method(), Method::GET);
        assert_eq!(Endpoint::Add.method(), Method::POST);
        assert_eq!(Endpoint::Edit(1).method(), Method::PUT);
        assert_eq!(Endpoint::Delete(1).method(), Method::DELETE);
        assert_eq!(Endpoint::Search.method(), Method::GET);
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::List.path(), "/notes");
        assert_eq!(Endpoint::Add.path(), "/notes");
        assert_eq!(Endpoint::Edit(12).path(), "/notes/12");
        assert_eq!(Endpoint::Delete(3).path(), "/notes/3");
        assert_eq!(Endpoint::Search.path(), "/notes/search");
    }
}
