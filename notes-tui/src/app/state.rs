//! UI state
//!
//! Everything the terminal front-end tracks on top of the provider's notes
//! and modal state: cursor position, search focus, the add/edit form, and
//! overlays. Transitions happen through the reducer (see `reducer.rs`).

use libnotes::config::UiSection;
use tui_textarea::{CursorMove, TextArea};

/// Root UI state
#[derive(Debug, Clone)]
pub struct UiState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Highlighted row in the note list
    pub cursor: usize,

    /// Where typed characters go outside of modals
    pub focus: Focus,

    /// Add/edit form contents
    pub form: FormState,

    /// Requests in flight
    pub pending: usize,

    /// Status bar state
    pub status: StatusBarState,

    /// Error overlay state
    pub error: Option<String>,

    /// UI configuration
    pub config: UiConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
}

/// Add/edit form state
///
/// Both fields are `tui-textarea` editors, so cursor movement and mid-line
/// edits work the same in either field.
#[derive(Debug, Clone)]
pub struct FormState {
    pub name: TextArea<'static>,
    pub description: TextArea<'static>,
    pub field: FormField,
    /// Validation message shown under the form
    pub error: Option<String>,
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            should_quit: false,
            help_visible: false,
            cursor: 0,
            focus: Focus::List,
            form: FormState::default(),
            pending: 0,
            status: StatusBarState::default(),
            error: None,
            config: UiConfig::default(),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::with_text("", "")
    }
}

impl FormState {
    /// Form pre-filled with a note's text, cursors at the end
    pub fn with_text(name: &str, description: &str) -> Self {
        let mut name = editor(name);
        name.set_placeholder_text("Name");

        let mut description = editor(description);
        description.set_placeholder_text("Description");

        Self {
            name,
            description,
            field: FormField::Name,
            error: None,
        }
    }

    pub fn name_text(&self) -> String {
        self.name.lines().join("\n")
    }

    pub fn description_text(&self) -> String {
        self.description.lines().join("\n")
    }

    /// Editor for the focused field
    pub fn focused_mut(&mut self) -> &mut TextArea<'static> {
        match self.field {
            FormField::Name => &mut self.name,
            FormField::Description => &mut self.description,
        }
    }
}

fn editor(text: &str) -> TextArea<'static> {
    let mut textarea = TextArea::from(text.split('\n').map(str::to_string));
    textarea.move_cursor(CursorMove::Bottom);
    textarea.move_cursor(CursorMove::End);
    textarea
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::from_section(&UiSection::default())
    }
}

impl UiConfig {
    /// Build from the `[ui]` config section
    pub fn from_section(section: &UiSection) -> Self {
        Self {
            colors_enabled: section.colors,
            tick_rate_ms: section.tick_rate_ms.max(10),
        }
    }
}

impl UiState {
    /// Create new UI state with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: UiConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Is a request in flight?
    pub fn is_busy(&self) -> bool {
        self.pending > 0
    }

    /// Can the form be submitted as it stands?
    pub fn can_submit(&self) -> bool {
        libnotes::types::validate_name(&self.form.name_text()).is_ok()
    }
}
