//! Actions for the reducer pattern
//!
//! All UI state transitions are triggered by actions. Actions that also need
//! the notes provider (opening modals, submitting forms, searching) are
//! carried out by the [`Controller`](super::Controller) before the UI
//! reducer sees them.

use crossterm::event::KeyEvent;
use libnotes::NoteKey;

/// Actions that trigger state transitions
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input not consumed by the keymap
    Key(KeyEvent),

    /// Periodic tick, used to poll finished requests
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    /// Move the list cursor up one row
    CursorUp,

    /// Move the list cursor down, bounded by the list length
    CursorDown { len: usize },

    /// Keep the cursor inside a list that changed size
    ClampCursor(usize),

    // === Search ===
    /// Give keyboard focus to the search box
    FocusSearch,

    /// Return focus to the list
    BlurSearch,

    /// Search box text changed
    SearchChanged(String),

    /// Run a search with the current query
    SubmitSearch,

    /// Fetch the full list again
    Reload,

    // === Notes ===
    /// Open the detail modal for a note
    OpenNote(NoteKey),

    /// Open the create form
    OpenAdd,

    /// Open the edit form for a note
    OpenEdit(NoteKey),

    /// Ask for confirmation before deleting a note
    OpenDelete(NoteKey),

    /// Delete the confirmed note
    ConfirmDelete(NoteKey),

    /// Close whatever modal is open
    CloseModal,

    // === Form ===
    /// Key press handed to the focused field's editor
    FormKey(KeyEvent),

    /// Switch between name and description
    FormNextField,

    /// Fill the form from an existing note
    FormLoad { name: String, description: String },

    /// Inline validation message under the form
    FormError(String),

    /// Submit the add/edit form
    SubmitForm,

    // === Requests ===
    /// A request was handed to the runtime
    RequestStarted(&'static str),

    /// A request finished and was applied
    RequestFinished,

    // === Error Handling ===
    /// Show error overlay
    ShowError(String),

    /// Dismiss error overlay
    DismissError,
}
