//! In-memory notes API for testing
//!
//! `MockNotesApi` keeps its notes in a shared vector and answers the same
//! shapes the real server does. Behaviour switches in [`MockConfig`] make it
//! return `null` bodies, omit the list count, refuse deletes, or fail every
//! call, so provider edge cases can be exercised without a network.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::NotesApi;
use crate::error::ApiError;
use crate::types::{
    CreatedValue, DeleteResponse, ListResponse, NoteDto, NoteKey, NotePayload, DELETED_MESSAGE,
};

/// Configuration for mock API behavior
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Every call fails with `ApiError::Connection(msg)`
    pub fail_with: Option<String>,

    /// `get_list` answers without a `count` field
    pub omit_count: bool,

    /// `add` answers `null`
    pub null_on_add: bool,

    /// `edit` answers `null`
    pub null_on_edit: bool,

    /// Message returned by `delete` instead of "deleted" (nothing is removed)
    pub delete_message: Option<String>,
}

/// Mock notes server
#[derive(Clone)]
pub struct MockNotesApi {
    config: MockConfig,
    store: Arc<Mutex<Vec<NoteDto>>>,
    next_key: Arc<Mutex<NoteKey>>,

    /// Operations received, in order (e.g. `get_list`, `search:milk`)
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockNotesApi {
    /// Create a mock with the given configuration and initial notes
    pub fn new(config: MockConfig, notes: Vec<NoteDto>) -> Self {
        let next_key = notes.iter().map(|n| n.key).max().unwrap_or(0) + 1;
        Self {
            config,
            store: Arc::new(Mutex::new(notes)),
            next_key: Arc::new(Mutex::new(next_key)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Mock that answers every call normally
    pub fn with_notes(notes: Vec<NoteDto>) -> Self {
        Self::new(MockConfig::default(), notes)
    }

    /// Mock whose every call fails with a connection error
    pub fn failing(message: &str) -> Self {
        Self::new(
            MockConfig {
                fail_with: Some(message.to_string()),
                ..Default::default()
            },
            Vec::new(),
        )
    }

    /// A few notes for demos and tests
    pub fn seeded() -> Self {
        Self::with_notes(vec![
            dto(1, "Groceries", "Milk, eggs, bread and a bag of coffee beans", 1_704_067_200_000),
            dto(2, "Reading list", "Finish the borrow checker chapter", 1_706_745_600_000),
            dto(3, "Ideas", "A terminal notes board with modal dialogs", 1_709_251_200_000),
        ])
    }

    /// Snapshot of the server-side notes
    pub fn notes(&self) -> Vec<NoteDto> {
        lock(&self.store).clone()
    }

    /// Operations received so far
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    fn record(&self, call: String) -> Result<(), ApiError> {
        lock(&self.calls).push(call);
        match &self.config.fail_with {
            Some(message) => Err(ApiError::Connection(message.clone())),
            None => Ok(()),
        }
    }
}

/// Build a DTO with a millisecond timestamp
pub fn dto(key: NoteKey, name: &str, description: &str, created_ms: i64) -> NoteDto {
    NoteDto {
        key,
        name: name.to_string(),
        description: description.to_string(),
        created: CreatedValue::Millis(created_ms),
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl NotesApi for MockNotesApi {
    async fn get_list(&self) -> Result<ListResponse, ApiError> {
        self.record("get_list".to_string())?;

        let items = self.notes();
        let count = if self.config.omit_count {
            None
        } else {
            Some(items.len() as u64)
        };
        Ok(ListResponse { count, items })
    }

    async fn add(&self, body: &NotePayload) -> Result<Option<NoteDto>, ApiError> {
        self.record("add".to_string())?;

        if self.config.null_on_add {
            return Ok(None);
        }

        let key = {
            let mut next = lock(&self.next_key);
            let key = *next;
            *next += 1;
            key
        };
        let note = NoteDto {
            key,
            name: body.name.clone(),
            description: body.description.clone(),
            created: body.created.clone(),
        };
        lock(&self.store).push(note.clone());
        Ok(Some(note))
    }

    async fn edit(&self, key: NoteKey, body: &NotePayload) -> Result<Option<NoteDto>, ApiError> {
        self.record(format!("edit:{}", key))?;

        if self.config.null_on_edit {
            return Ok(None);
        }

        let mut store = lock(&self.store);
        let Some(existing) = store.iter_mut().find(|n| n.key == key) else {
            return Ok(None);
        };
        existing.name = body.name.clone();
        existing.description = body.description.clone();
        existing.created = body.created.clone();
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, key: NoteKey) -> Result<DeleteResponse, ApiError> {
        self.record(format!("delete:{}", key))?;

        if let Some(message) = &self.config.delete_message {
            return Ok(DeleteResponse {
                message: message.clone(),
            });
        }

        let mut store = lock(&self.store);
        let before = store.len();
        store.retain(|n| n.key != key);
        let message = if store.len() < before {
            DELETED_MESSAGE
        } else {
            "not found"
        };
        Ok(DeleteResponse {
            message: message.to_string(),
        })
    }

    async fn search(&self, query: &str) -> Result<Vec<NoteDto>, ApiError> {
        self.record(format!("search:{}", query))?;

        let needle = query.to_lowercase();
        Ok(self
            .notes()
            .into_iter()
            .filter(|n| {
                n.name.to_lowercase().contains(&needle)
                    || n.description.to_lowercase().contains(&needle)
            })
            .collect())
    }
}
