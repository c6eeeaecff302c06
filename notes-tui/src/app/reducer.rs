//! Pure reducer function for UI state transitions
//!
//! `(UiState, Action) -> UiState` with no side effects. Actions that need the
//! notes provider are handled by the controller first; here they only adjust
//! UI-local state (focus, form contents) or pass through unchanged.

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{Focus, FormField, FormState, StatusBarState, UiState};

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
pub fn reduce(state: UiState, action: Action) -> UiState {
    match action {
        // === UI Events ===
        Action::Key(_) => state,
        Action::Tick => state,
        Action::Resize(_, _) => state,

        // === Navigation ===
        Action::Quit => UiState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => UiState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => UiState {
            help_visible: false,
            ..state
        },

        Action::CursorUp => UiState {
            cursor: state.cursor.saturating_sub(1),
            ..state
        },

        Action::CursorDown { len } => {
            let cursor = if len == 0 {
                0
            } else {
                (state.cursor + 1).min(len - 1)
            };
            UiState { cursor, ..state }
        }

        Action::ClampCursor(len) => UiState {
            cursor: state.cursor.min(len.saturating_sub(1)),
            ..state
        },

        // === Search ===
        Action::FocusSearch => UiState {
            focus: Focus::Search,
            ..state
        },

        Action::BlurSearch | Action::SubmitSearch => UiState {
            focus: Focus::List,
            ..state
        },

        // The query itself lives in the provider
        Action::SearchChanged(_) => state,

        Action::Reload => state,

        // === Notes ===
        Action::OpenNote(_) | Action::OpenDelete(_) | Action::ConfirmDelete(_) => state,

        Action::OpenAdd => UiState {
            form: FormState::default(),
            ..state
        },

        // Form is filled by FormLoad once the provider has selected the note
        Action::OpenEdit(_) => state,

        Action::CloseModal => UiState {
            form: FormState::default(),
            ..state
        },

        // === Form ===
        Action::FormKey(key) => {
            let mut form = state.form;
            // Names are single-line
            let newline_in_name = form.field == FormField::Name && key.code == KeyCode::Enter;
            if !newline_in_name && form.focused_mut().input(key) {
                form.error = None;
            }
            UiState { form, ..state }
        }

        Action::FormNextField => {
            let field = match state.form.field {
                FormField::Name => FormField::Description,
                FormField::Description => FormField::Name,
            };
            UiState {
                form: FormState {
                    field,
                    ..state.form
                },
                ..state
            }
        }

        Action::FormLoad { name, description } => UiState {
            form: FormState::with_text(&name, &description),
            ..state
        },

        Action::FormError(message) => UiState {
            form: FormState {
                error: Some(message),
                ..state.form
            },
            ..state
        },

        // Submission is carried out by the controller
        Action::SubmitForm => state,

        // === Requests ===
        Action::RequestStarted(operation) => UiState {
            pending: state.pending + 1,
            status: StatusBarState {
                message: Some(format!("{}...", operation)),
            },
            ..state
        },

        Action::RequestFinished => {
            let pending = state.pending.saturating_sub(1);
            let status = if pending == 0 {
                StatusBarState::default()
            } else {
                state.status
            };
            UiState {
                pending,
                status,
                ..state
            }
        }

        // === Error Handling ===
        Action::ShowError(error) => UiState {
            error: Some(error),
            ..state
        },

        Action::DismissError => UiState {
            error: None,
            ..state
        },
    }
}
