//! Application state provider
//!
//! `AppProvider` owns the notes list and modal states, the API handle, and the
//! `is_loaded` / `search_query` flags. It is constructed once by whatever
//! builds the view tree and passed down by reference; views read through
//! [`AppProvider::context`] and act through the provider's methods.
//!
//! # Request / apply split
//!
//! Every networked operation comes in two halves:
//!
//! - `begin_*` returns a [`Pending`] future that performs the API call only.
//!   It owns everything it needs, so it can run on another task while the
//!   UI stays responsive.
//! - [`AppProvider::apply`] takes the resulting [`Completion`] and performs
//!   the reducer dispatches on the owning thread.
//!
//! The plain `async fn` operations (`show_all_notes`, `add_note`, ...) just
//! await one half and apply the other.
//!
//! # Stale list responses
//!
//! `show_all_notes` and non-empty `search` both replace the whole list. Each
//! takes a ticket when it begins. A list completion is dropped only when a
//! request that began later has already replaced the list, so a slow full
//! fetch cannot overwrite the results of a later search. A later request that
//! changed nothing (empty results, failure, no count) does not block it. Add,
//! edit and delete completions are always applied in arrival order.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use libnotes::api::HttpNotesApi;
//! use libnotes::config::Config;
//! use libnotes::provider::{use_app_context, AppProvider};
//!
//! # async fn example() -> libnotes::Result<()> {
//! let config = Config::load()?;
//! let api = HttpNotesApi::new(&config.api)?;
//! let mut provider = AppProvider::new(Arc::new(api));
//!
//! provider.show_all_notes().await?;
//! provider.add_note("Groceries", "milk, eggs").await?;
//!
//! let ctx = use_app_context(Some(&provider))?;
//! println!("{} notes loaded", ctx.items.len());
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::api::NotesApi;
use crate::error::{ApiError, NotesError, Result};
use crate::state::{list, modal, ListAction, ModalAction, ModalKind, ModalState, NoteListState};
use crate::types::{
    notes_from_dtos, DeleteResponse, ListResponse, Note, NoteDto, NoteKey, NotePayload,
};

/// In-flight API call, resolved into a [`Completion`]
pub type Pending = Pin<Box<dyn Future<Output = Completion> + Send + 'static>>;

/// Result of a finished API call, waiting to be applied to state
#[derive(Debug)]
pub enum Completion {
    /// Full list fetch
    Listed {
        ticket: u64,
        response: std::result::Result<ListResponse, ApiError>,
    },

    /// Non-empty search
    Searched {
        ticket: u64,
        query: String,
        response: std::result::Result<Vec<NoteDto>, ApiError>,
    },

    Added(std::result::Result<Option<NoteDto>, ApiError>),

    Edited {
        key: NoteKey,
        response: std::result::Result<Option<NoteDto>, ApiError>,
    },

    Deleted {
        key: NoteKey,
        response: std::result::Result<DeleteResponse, ApiError>,
    },
}

impl Completion {
    /// Operation name for logs and status messages
    pub fn operation(&self) -> &'static str {
        match self {
            Completion::Listed { .. } => "show_all_notes",
            Completion::Searched { .. } => "search",
            Completion::Added(_) => "add_note",
            Completion::Edited { .. } => "edit_note",
            Completion::Deleted { .. } => "delete_note",
        }
    }
}

/// Read-only view of everything the provider exposes
///
/// Flattens list state, modal state and the two flags into one value.
#[derive(Debug, Clone, Copy)]
pub struct AppContext<'a> {
    pub items: &'a [Note],
    pub selected: Option<&'a Note>,
    pub is_open: bool,
    pub kind: ModalKind,
    pub is_loaded: bool,
    pub search_query: &'a str,
}

impl AppContext<'_> {
    /// Kind of the modal on screen, if one is open
    pub fn active_modal(&self) -> Option<ModalKind> {
        self.is_open.then_some(self.kind)
    }
}

/// Access the application context
///
/// Fails with [`NotesError::MissingProvider`] when called without a provider,
/// instead of handing out an empty default.
pub fn use_app_context(provider: Option<&AppProvider>) -> Result<AppContext<'_>> {
    provider
        .map(AppProvider::context)
        .ok_or(NotesError::MissingProvider)
}

/// Owner of all client-side note state
pub struct AppProvider {
    api: Arc<dyn NotesApi>,
    list: NoteListState,
    modal: ModalState,
    is_loaded: bool,
    search_query: String,

    /// Newest ticket handed to a list-replacing request
    list_ticket: u64,

    /// Ticket of the request whose items are currently in the list
    applied_list_ticket: u64,
}

impl AppProvider {
    /// Create a provider with an empty list and a closed modal
    pub fn new(api: Arc<dyn NotesApi>) -> Self {
        Self {
            api,
            list: NoteListState::default(),
            modal: ModalState::default(),
            is_loaded: false,
            search_query: String::new(),
            list_ticket: 0,
            applied_list_ticket: 0,
        }
    }

    /// Start from a given list state instead of an empty one
    pub fn with_initial_list(mut self, list: NoteListState) -> Self {
        self.list = list;
        self
    }

    /// Start from a given modal state instead of a closed one
    pub fn with_initial_modal(mut self, modal: ModalState) -> Self {
        self.modal = modal;
        self
    }

    pub fn context(&self) -> AppContext<'_> {
        AppContext {
            items: &self.list.items,
            selected: self.list.selected.as_ref(),
            is_open: self.modal.is_open,
            kind: self.modal.kind,
            is_loaded: self.is_loaded,
            search_query: &self.search_query,
        }
    }

    pub fn list(&self) -> &NoteListState {
        &self.list
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Update the search box text; does not run a search
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    fn dispatch_list(&mut self, action: ListAction) {
        tracing::debug!(action = action.name(), "List dispatch");
        let state = std::mem::take(&mut self.list);
        self.list = list::reduce(state, action);
    }

    fn dispatch_modal(&mut self, action: ModalAction) {
        tracing::debug!(?action, "Modal dispatch");
        self.modal = modal::reduce(self.modal, action);
    }

    // ------------------------------------------------------------------
    // Synchronous operations
    // ------------------------------------------------------------------

    /// Select a note and open its detail view
    pub fn show_note(&mut self, key: NoteKey) {
        self.dispatch_list(ListAction::Get(key));
        self.dispatch_modal(ModalAction::Open(ModalKind::Show));
    }

    /// Select a note and open the edit form
    pub fn show_edit_modal(&mut self, key: NoteKey) {
        self.dispatch_list(ListAction::Get(key));
        self.dispatch_modal(ModalAction::Open(ModalKind::Edit));
    }

    /// Open the create form; selection is left alone
    pub fn show_add_modal(&mut self) {
        self.dispatch_modal(ModalAction::Open(ModalKind::Add));
    }

    /// Select a note and ask for delete confirmation
    pub fn show_delete_modal(&mut self, key: NoteKey) {
        self.dispatch_list(ListAction::Get(key));
        self.dispatch_modal(ModalAction::Open(ModalKind::Confirm));
    }

    pub fn close_modal(&mut self) {
        self.dispatch_modal(ModalAction::Close);
    }

    pub fn clear_current(&mut self) {
        self.dispatch_list(ListAction::Clear);
    }

    // ------------------------------------------------------------------
    // Request halves
    // ------------------------------------------------------------------

    fn next_list_ticket(&mut self) -> u64 {
        self.list_ticket += 1;
        self.list_ticket
    }

    /// Begin a full list fetch
    pub fn begin_show_all_notes(&mut self) -> Pending {
        let ticket = self.next_list_ticket();
        let api = Arc::clone(&self.api);
        Box::pin(async move {
            Completion::Listed {
                ticket,
                response: api.get_list().await,
            }
        })
    }

    /// Begin a search; an empty query is a full list fetch
    pub fn begin_search(&mut self, query: &str) -> Pending {
        if query.is_empty() {
            return self.begin_show_all_notes();
        }

        let ticket = self.next_list_ticket();
        let api = Arc::clone(&self.api);
        let query = query.to_string();
        Box::pin(async move {
            let response = api.search(&query).await;
            Completion::Searched {
                ticket,
                query,
                response,
            }
        })
    }

    /// Begin creating a note stamped with the current time
    pub fn begin_add_note(&self, name: &str, description: &str) -> Pending {
        let api = Arc::clone(&self.api);
        let body = NotePayload::create(name, description);
        Box::pin(async move { Completion::Added(api.add(&body).await) })
    }

    /// Begin updating a note on the server
    pub fn begin_edit_note(&self, note: &Note) -> Pending {
        let api = Arc::clone(&self.api);
        let key = note.key;
        let body = NotePayload::update(note);
        Box::pin(async move {
            Completion::Edited {
                key,
                response: api.edit(key, &body).await,
            }
        })
    }

    /// Begin deleting a note on the server
    pub fn begin_delete_note(&self, key: NoteKey) -> Pending {
        let api = Arc::clone(&self.api);
        Box::pin(async move {
            Completion::Deleted {
                key,
                response: api.delete(key).await,
            }
        })
    }

    // ------------------------------------------------------------------
    // Apply half
    // ------------------------------------------------------------------

    /// Apply a finished request to state
    ///
    /// Transport failures and an empty edit response come back as errors with
    /// state untouched. An unconfirmed delete is logged and returns `Ok`.
    pub fn apply(&mut self, completion: Completion) -> Result<()> {
        let operation = completion.operation();
        let result = self.apply_completion(completion);
        if let Err(e) = &result {
            tracing::error!(operation, error = %e, "Operation failed");
        }
        result
    }

    fn is_stale(&self, ticket: u64) -> bool {
        ticket < self.applied_list_ticket
    }

    fn replace_list(&mut self, ticket: u64, items: Vec<Note>) {
        self.dispatch_list(ListAction::SetData(items));
        self.applied_list_ticket = ticket;
    }

    fn apply_completion(&mut self, completion: Completion) -> Result<()> {
        match completion {
            Completion::Listed { ticket, response } => {
                if self.is_stale(ticket) {
                    tracing::warn!(ticket, applied = self.applied_list_ticket, "Dropping stale list response");
                    return Ok(());
                }
                let response = response?;
                if !response.has_count() {
                    tracing::debug!("List response without count, ignoring");
                    return Ok(());
                }
                let items = notes_from_dtos(response.items)?;
                tracing::info!(count = items.len(), "Notes loaded");
                self.replace_list(ticket, items);
                self.is_loaded = true;
            }

            Completion::Searched {
                ticket,
                query,
                response,
            } => {
                if self.is_stale(ticket) {
                    tracing::warn!(ticket, %query, "Dropping stale search response");
                    return Ok(());
                }
                let results = response?;
                if results.is_empty() {
                    tracing::debug!(%query, "Search returned nothing, keeping current list");
                    return Ok(());
                }
                let items = notes_from_dtos(results)?;
                tracing::info!(%query, count = items.len(), "Search results");
                self.replace_list(ticket, items);
            }

            Completion::Added(response) => {
                let Some(dto) = response? else {
                    tracing::debug!("Create returned no note");
                    return Ok(());
                };
                let note = Note::try_from(dto)?;
                tracing::info!(key = note.key, "Note added");
                self.dispatch_list(ListAction::Add(note));
                self.dispatch_modal(ModalAction::Close);
            }

            Completion::Edited { key, response } => {
                let dto = response?.ok_or_else(|| {
                    NotesError::EmptyResponse(format!("update of note {} returned no data", key))
                })?;
                let note = Note::try_from(dto)?;
                tracing::info!(key = note.key, "Note updated");
                self.dispatch_list(ListAction::Edit(note));
                self.dispatch_modal(ModalAction::Close);
            }

            Completion::Deleted { key, response } => {
                let response = response?;
                if response.is_deleted() {
                    tracing::info!(key, "Note deleted");
                    self.dispatch_list(ListAction::Delete(key));
                } else {
                    tracing::error!(key, reply = %response.message, "item was not deleted");
                }
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // One-shot async operations
    // ------------------------------------------------------------------

    /// Fetch the full list and replace `items` if the server reports a count
    pub async fn show_all_notes(&mut self) -> Result<()> {
        let completion = self.begin_show_all_notes().await;
        self.apply(completion)
    }

    /// Search, or reload everything when `query` is empty
    pub async fn search(&mut self, query: &str) -> Result<()> {
        let completion = self.begin_search(query).await;
        self.apply(completion)
    }

    /// Create a note, append it and close the modal
    pub async fn add_note(&mut self, name: &str, description: &str) -> Result<()> {
        let completion = self.begin_add_note(name, description).await;
        self.apply(completion)
    }

    /// Update a note, replace it in the list and close the modal
    pub async fn edit_note(&mut self, note: &Note) -> Result<()> {
        let completion = self.begin_edit_note(note).await;
        self.apply(completion)
    }

    /// Delete a note once the server confirms it
    pub async fn delete_note(&mut self, key: NoteKey) -> Result<()> {
        let completion = self.begin_delete_note(key).await;
        self.apply(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockNotesApi;

    #[test]
    fn test_context_requires_provider() {
        match use_app_context(None) {
            Err(NotesError::MissingProvider) => {}
            other => panic!("Expected MissingProvider, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_initial_context() {
        let provider = AppProvider::new(Arc::new(MockNotesApi::seeded()));
        let ctx = use_app_context(Some(&provider)).unwrap();

        assert!(ctx.items.is_empty());
        assert!(ctx.selected.is_none());
        assert!(!ctx.is_open);
        assert_eq!(ctx.kind, ModalKind::Show);
        assert!(!ctx.is_loaded);
        assert_eq!(ctx.search_query, "");
    }

    #[test]
    fn test_add_modal_keeps_selection() {
        let list = NoteListState::new(Vec::new());
        let mut provider =
            AppProvider::new(Arc::new(MockNotesApi::seeded())).with_initial_list(list);
        provider.show_add_modal();

        assert_eq!(provider.context().active_modal(), Some(ModalKind::Add));
        assert!(provider.context().selected.is_none());
    }

    #[test]
    fn test_unapplied_ticket_does_not_make_older_stale() {
        let mut provider = AppProvider::new(Arc::new(MockNotesApi::seeded()));
        let _first = provider.begin_show_all_notes();
        let _second = provider.begin_search("milk");

        assert_eq!(provider.list_ticket, 2);
        assert!(!provider.is_stale(1));
    }

    #[tokio::test]
    async fn test_applied_ticket_makes_older_stale() {
        let mut provider = AppProvider::new(Arc::new(MockNotesApi::seeded()));
        let _first = provider.begin_show_all_notes();
        let second = provider.begin_search("milk").await;
        provider.apply(second).unwrap();

        assert!(provider.is_stale(1));
        assert!(!provider.is_stale(2));
    }

    #[tokio::test]
    async fn test_add_sends_whatever_name_it_gets() {
        let api = MockNotesApi::seeded();
        let mut provider = AppProvider::new(Arc::new(api.clone()));
        provider.show_add_modal();

        provider.add_note("", "body").await.unwrap();

        assert_eq!(api.calls(), vec!["add".to_string()]);
        assert_eq!(provider.list().items.len(), 1);
        assert!(!provider.modal().is_open);
    }
}
