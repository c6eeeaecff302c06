//! Keybindings
//!
//! Translates a key press into a high-level action given what is on screen.
//! Overlays take precedence over modals, modals over the search box, and the
//! search box over the list.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libnotes::{AppContext, ModalKind};

use super::actions::Action;
use super::state::{Focus, FormField, UiState};

/// Map a key to an action, or `None` if it means nothing here
pub fn map_key(state: &UiState, ctx: &AppContext<'_>, key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    if state.error.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::DismissError),
            _ => None,
        };
    }

    if state.help_visible {
        return match key.code {
            KeyCode::Esc | KeyCode::F(1) => Some(Action::HideHelp),
            _ => None,
        };
    }

    match ctx.active_modal() {
        Some(ModalKind::Show) => detail_key(ctx, key),
        Some(ModalKind::Add) | Some(ModalKind::Edit) => form_key(state, key),
        Some(ModalKind::Confirm) => confirm_key(ctx, key),
        None if state.focus == Focus::Search => search_key(ctx, key),
        None => list_key(state, ctx, key),
    }
}

fn list_key(state: &UiState, ctx: &AppContext<'_>, key: KeyEvent) -> Option<Action> {
    let current = ctx.items.get(state.cursor).map(|note| note.key);

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::F(1) | KeyCode::Char('?') => Some(Action::ShowHelp),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown {
            len: ctx.items.len(),
        }),
        KeyCode::Enter => current.map(Action::OpenNote),
        KeyCode::Char('a') => Some(Action::OpenAdd),
        KeyCode::Char('e') => current.map(Action::OpenEdit),
        KeyCode::Char('d') | KeyCode::Delete => current.map(Action::OpenDelete),
        KeyCode::Char('/') => Some(Action::FocusSearch),
        KeyCode::Char('r') => Some(Action::Reload),
        _ => None,
    }
}

fn search_key(ctx: &AppContext<'_>, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::BlurSearch),
        KeyCode::Enter => Some(Action::SubmitSearch),
        KeyCode::Backspace => {
            let mut query = ctx.search_query.to_string();
            query.pop();
            Some(Action::SearchChanged(query))
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::SearchChanged(format!("{}{}", ctx.search_query, c)))
        }
        _ => None,
    }
}

fn detail_key(ctx: &AppContext<'_>, key: KeyEvent) -> Option<Action> {
    let selected = ctx.selected.map(|note| note.key);

    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Action::CloseModal),
        KeyCode::Char('e') => selected.map(Action::OpenEdit),
        KeyCode::Char('d') => selected.map(Action::OpenDelete),
        _ => None,
    }
}

fn form_key(state: &UiState, key: KeyEvent) -> Option<Action> {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Some(Action::CloseModal),
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => Some(Action::SubmitForm),
        (KeyCode::Tab, _) | (KeyCode::BackTab, _) => Some(Action::FormNextField),
        (KeyCode::Enter, _) if state.form.field == FormField::Name => Some(Action::FormNextField),
        // Everything else goes to the editor: text, arrows, Home/End, Enter in the description
        _ => Some(Action::FormKey(key)),
    }
}

fn confirm_key(ctx: &AppContext<'_>, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            ctx.selected.map(|note| Action::ConfirmDelete(note.key))
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
        _ => None,
    }
}
