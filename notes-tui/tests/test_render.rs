//! Rendering against an in-memory terminal

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libnotes::api::mock::dto;
use libnotes::api::MockNotesApi;
use libnotes::{AppProvider, ModalKind, ModalState, Note, NoteListState, NotesError};
use notes_tui::app::{reduce, Action, UiState};
use notes_tui::ui::note_list::format_date;
use notes_tui::{terminal, ui, TuiError};
use ratatui::{backend::TestBackend, Terminal};

fn screen(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn draw(provider: &AppProvider, state: &UiState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal::draw(&mut terminal, state, Some(provider)).unwrap();
    screen(&terminal)
}

fn list(notes: Vec<Note>) -> NoteListState {
    NoteListState::new(notes)
}

fn note(key: i64, name: &str, description: &str) -> Note {
    Note::try_from(dto(key, name, description, 1_704_110_400_000)).unwrap()
}

fn provider() -> AppProvider {
    AppProvider::new(Arc::new(MockNotesApi::with_notes(Vec::new())))
}

#[test]
fn test_render_requires_provider() {
    let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
    let mut result = Ok(());
    terminal
        .draw(|frame| result = ui::render(frame, &UiState::new(), None))
        .unwrap();

    assert!(matches!(result, Err(NotesError::MissingProvider)));
}

#[test]
fn test_draw_surfaces_missing_provider() {
    let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
    let result = terminal::draw(&mut terminal, &UiState::new(), None);

    assert!(matches!(
        result,
        Err(TuiError::Notes(NotesError::MissingProvider))
    ));
}

#[test]
fn test_loading_until_loaded() {
    let text = draw(&provider(), &UiState::new());
    assert!(text.contains("Loading..."));
}

#[test]
fn test_list_shows_name_preview_and_date() {
    let groceries = note(1, "Groceries", "Milk and eggs");
    let date = format_date(&groceries.created);
    let provider = provider().with_initial_list(list(vec![groceries]));

    let text = draw(&provider, &UiState::new());

    assert!(text.contains("Groceries"));
    assert!(text.contains("Milk and eggs"));
    assert!(text.contains(&date));
    assert!(!text.contains("Loading..."));
}

#[test]
fn test_detail_modal() {
    let mut notes = list(vec![note(1, "Groceries", "Milk and eggs")]);
    notes.selected = notes.items.first().cloned();
    let provider = provider()
        .with_initial_list(notes)
        .with_initial_modal(ModalState {
            is_open: true,
            kind: ModalKind::Show,
        });

    let date = format_date(&provider.context().items[0].created);
    let text = draw(&provider, &UiState::new());

    assert!(text.contains(&format!("Created {}", date)));
    assert!(text.contains("e: Edit | d: Delete | Esc: Close"));
}

#[test]
fn test_confirm_modal_names_note() {
    let mut notes = list(vec![note(1, "Groceries", "Milk")]);
    notes.selected = notes.items.first().cloned();
    let provider = provider()
        .with_initial_list(notes)
        .with_initial_modal(ModalState {
            is_open: true,
            kind: ModalKind::Confirm,
        });

    let text = draw(&provider, &UiState::new());

    assert!(text.contains("Delete \"Groceries\"?"));
    assert!(text.contains("y: Delete | n: Cancel"));
}

#[test]
fn test_add_form_shows_typed_text() {
    let provider = provider().with_initial_modal(ModalState {
        is_open: true,
        kind: ModalKind::Add,
    });
    let state = reduce(UiState::new(), Action::OpenAdd);
    let state = "Plan".chars().fold(state, |s, c| {
        reduce(s, Action::FormKey(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)))
    });

    let text = draw(&provider, &state);

    assert!(text.contains("New note"));
    assert!(text.contains("Plan"));
    assert!(text.contains("Ctrl+S: Save"));
}

#[test]
fn test_edit_form_shows_loaded_note() {
    let provider = provider().with_initial_modal(ModalState {
        is_open: true,
        kind: ModalKind::Edit,
    });
    let state = reduce(
        UiState::new(),
        Action::FormLoad {
            name: "Groceries".to_string(),
            description: "Milk\nEggs".to_string(),
        },
    );

    let text = draw(&provider, &state);

    assert!(text.contains("Edit note"));
    assert!(text.contains("Groceries"));
    assert!(text.contains("Milk"));
    assert!(text.contains("Eggs"));
}

#[test]
fn test_form_error_shown() {
    let provider = provider().with_initial_modal(ModalState {
        is_open: true,
        kind: ModalKind::Add,
    });
    let state = reduce(UiState::new(), Action::FormError("Name cannot be empty".to_string()));

    let text = draw(&provider, &state);

    assert!(text.contains("Name cannot be empty"));
    assert!(!text.contains("Ctrl+S: Save"));
}

#[test]
fn test_closed_modal_not_drawn() {
    let provider = provider().with_initial_modal(ModalState {
        is_open: false,
        kind: ModalKind::Confirm,
    });

    let text = draw(&provider, &UiState::new());
    assert!(!text.contains("y: Delete"));
}

#[test]
fn test_error_overlay() {
    let state = reduce(UiState::new(), Action::ShowError("delete_note failed".to_string()));
    let text = draw(&provider(), &state);

    assert!(text.contains("delete_note failed"));
    assert!(text.contains("Press Esc to dismiss"));
}
