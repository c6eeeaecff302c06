//! Noteboard - a small note-taking client
//!
//! This library holds everything below the presentation layer: the note
//! data model, the list and modal reducers, the API gateway, and the
//! application provider that ties them together.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod provider;
pub mod state;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{ApiError, NotesError, Result};
pub use provider::{use_app_context, AppContext, AppProvider, Completion, Pending};
pub use state::{ListAction, ModalAction, ModalKind, ModalState, NoteListState};
pub use types::{Note, NoteDto, NoteKey};
