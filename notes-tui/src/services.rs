//! Service layer adapter for TUI
//!
//! Bridges the provider's async requests onto the synchronous TUI event loop.
//!
//! # Architecture
//!
//! - `NotesHandle` owns a tokio runtime
//! - `spawn` runs a provider [`Pending`] future on that runtime
//! - The resulting [`Completion`] is sent over a crossbeam channel
//! - The event loop drains the channel each tick and hands completions back
//!   to the provider, so every state change still happens on the UI thread
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use libnotes::api::MockNotesApi;
//! use libnotes::AppProvider;
//! use notes_tui::services::NotesHandle;
//!
//! # fn example() -> notes_tui::error::Result<()> {
//! let handle = NotesHandle::new()?;
//! let mut provider = AppProvider::new(Arc::new(MockNotesApi::seeded()));
//!
//! handle.spawn(provider.begin_show_all_notes());
//!
//! // In the event loop
//! while let Some(completion) = handle.try_next() {
//!     provider.apply(completion)?;
//! }
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use libnotes::{Completion, Pending};

use crate::error::Result;

/// Runtime plus completion channel for in-flight requests
pub struct NotesHandle {
    runtime: tokio::runtime::Runtime,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
}

impl NotesHandle {
    /// Create a new handle with its own multi-threaded runtime
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime cannot be created.
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        let (tx, rx) = unbounded();
        Ok(Self { runtime, tx, rx })
    }

    /// Run a request in the background
    ///
    /// Returns immediately. The completion shows up in [`try_next`](Self::try_next)
    /// once the server answers; overlapping requests are not cancelled or
    /// de-duplicated.
    pub fn spawn(&self, pending: Pending) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let completion = pending.await;
            tracing::debug!(operation = completion.operation(), "Request finished");
            if tx.send(completion).is_err() {
                // Receiver dropped, app is shutting down
                tracing::debug!("Completion dropped, receiver gone");
            }
        });
    }

    /// Next finished request, if any, without blocking
    pub fn try_next(&self) -> Option<Completion> {
        self.rx.try_recv().ok()
    }

    /// Wait up to `timeout` for the next finished request
    pub fn next_timeout(&self, timeout: Duration) -> Option<Completion> {
        match self.rx.recv_timeout(timeout) {
            Ok(completion) => Some(completion),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}
