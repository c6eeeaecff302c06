//! Controller: actions in, provider operations and UI state out
//!
//! The controller owns the [`AppProvider`], the [`NotesHandle`] running its
//! requests, and the UI state. For each action it first performs whatever
//! provider work the action implies (selecting a note, opening a modal,
//! starting a request), then runs the pure UI reducer.

use libnotes::types::validate_name;
use libnotes::{AppContext, AppProvider, Completion, ModalKind, NotesError};

use super::actions::Action;
use super::reducer::reduce;
use super::state::UiState;
use crate::services::NotesHandle;

pub struct Controller {
    provider: AppProvider,
    handle: NotesHandle,
    ui: UiState,
}

impl Controller {
    pub fn new(provider: AppProvider, handle: NotesHandle, ui: UiState) -> Self {
        Self {
            provider,
            handle,
            ui,
        }
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn provider(&self) -> &AppProvider {
        &self.provider
    }

    pub fn handle(&self) -> &NotesHandle {
        &self.handle
    }

    pub fn context(&self) -> AppContext<'_> {
        self.provider.context()
    }

    pub fn should_quit(&self) -> bool {
        self.ui.should_quit
    }

    fn reduce(&mut self, action: Action) {
        let ui = std::mem::take(&mut self.ui);
        self.ui = reduce(ui, action);
    }

    /// Fire the initial full fetch
    pub fn start(&mut self) {
        let pending = self.provider.begin_show_all_notes();
        self.launch("show_all_notes", pending);
    }

    fn launch(&mut self, operation: &'static str, pending: libnotes::Pending) {
        self.handle.spawn(pending);
        self.reduce(Action::RequestStarted(operation));
    }

    /// Handle one action: provider side effects, then the UI reducer
    pub fn dispatch(&mut self, action: Action) {
        let mut followup = None;

        match &action {
            Action::SearchChanged(query) => {
                self.provider.set_search_query(query.clone());
            }

            Action::SubmitSearch => {
                let query = self.provider.search_query().to_string();
                let pending = self.provider.begin_search(&query);
                self.launch("search", pending);
            }

            Action::Reload => {
                let pending = self.provider.begin_show_all_notes();
                self.launch("show_all_notes", pending);
            }

            Action::OpenNote(key) => self.provider.show_note(*key),

            Action::OpenAdd => self.provider.show_add_modal(),

            Action::OpenEdit(key) => {
                self.provider.show_edit_modal(*key);
                followup = self.provider.context().selected.map(|note| Action::FormLoad {
                    name: note.name.clone(),
                    description: note.description.clone(),
                });
            }

            Action::OpenDelete(key) => self.provider.show_delete_modal(*key),

            Action::ConfirmDelete(key) => {
                let pending = self.provider.begin_delete_note(*key);
                self.provider.close_modal();
                self.launch("delete_note", pending);
            }

            Action::CloseModal => {
                self.provider.close_modal();
                self.provider.clear_current();
            }

            Action::SubmitForm => self.submit_form(),

            _ => {}
        }

        self.reduce(action);
        if let Some(action) = followup {
            self.reduce(action);
        }
    }

    fn submit_form(&mut self) {
        let name = self.ui.form.name_text().trim().to_string();
        let description = self.ui.form.description_text();

        let kind = self.provider.modal().active();
        if matches!(kind, Some(ModalKind::Add) | Some(ModalKind::Edit)) {
            if let Err(NotesError::InvalidInput(message)) = validate_name(&name) {
                self.reduce(Action::FormError(message));
                return;
            }
        }

        match kind {
            Some(ModalKind::Add) => {
                let pending = self.provider.begin_add_note(&name, &description);
                self.launch("add_note", pending);
            }

            Some(ModalKind::Edit) => {
                let Some(mut note) = self.provider.context().selected.cloned() else {
                    self.reduce(Action::ShowError("No note selected".to_string()));
                    return;
                };
                note.name = name;
                note.description = description;
                let pending = self.provider.begin_edit_note(&note);
                self.launch("edit_note", pending);
            }

            _ => tracing::debug!("Submit with no form open"),
        }
    }

    /// Apply one finished request
    pub fn complete(&mut self, completion: Completion) {
        let operation = completion.operation();
        if let Err(e) = self.provider.apply(completion) {
            self.reduce(Action::ShowError(format!("{} failed: {}", operation, e)));
        }
        self.reduce(Action::RequestFinished);

        let len = self.provider.context().items.len();
        self.reduce(Action::ClampCursor(len));
    }

    /// Apply every request that has finished since the last call
    pub fn drain_completions(&mut self) {
        while let Some(completion) = self.handle.try_next() {
            self.complete(completion);
        }
    }
}
