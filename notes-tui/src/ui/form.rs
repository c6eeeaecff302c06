//! Add/edit form built on tui-textarea
//!
//! The editors live in `UiState`; each frame renders styled copies so the
//! focused field gets a highlighted border and a visible cursor.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tui_textarea::TextArea;

use super::{centered_rect, themed};
use crate::app::{FormField, UiState};

/// Styled snapshot of one form field
struct FieldWidget<'a> {
    textarea: TextArea<'a>,
}

impl<'a> FieldWidget<'a> {
    fn new(editor: &TextArea<'a>, title: &'static str, focused: bool, colors: bool) -> Self {
        let mut textarea = editor.clone();

        let border = if focused {
            themed(colors, Style::default().fg(Color::Cyan))
        } else {
            Style::default()
        };
        textarea.set_block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(border),
        );
        textarea.set_cursor_line_style(Style::default());

        if !focused {
            // Hide the cursor block on the field that is not being edited
            textarea.set_cursor_style(Style::default());
        }

        Self { textarea }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&self.textarea, area);
    }
}

pub fn render_form(frame: &mut Frame, area: Rect, title: &str, state: &UiState) {
    let popup_area = centered_rect(70, 60, area);
    let colors = state.config.colors_enabled;
    let form = &state.form;

    let outer = Block::default().title(title.to_string()).borders(Borders::ALL);
    let inner = outer.inner(popup_area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(outer, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Min(3),    // Description
            Constraint::Length(2), // Error and hints
        ])
        .split(inner);

    FieldWidget::new(&form.name, "Name", form.field == FormField::Name, colors)
        .render(frame, chunks[0]);
    FieldWidget::new(
        &form.description,
        "Description",
        form.field == FormField::Description,
        colors,
    )
    .render(frame, chunks[1]);

    let mut footer = Vec::new();
    if let Some(ref error) = form.error {
        footer.push(Line::from(Span::styled(
            error.clone(),
            themed(colors, Style::default().fg(Color::Red)).add_modifier(Modifier::BOLD),
        )));
    }
    let hints = if state.can_submit() {
        "Tab: Switch field | Ctrl+S: Save | Esc: Cancel"
    } else {
        "Tab: Switch field | Esc: Cancel"
    };
    footer.push(Line::from(Span::styled(
        hints,
        themed(colors, Style::default().fg(Color::Gray)),
    )));

    frame.render_widget(Paragraph::new(footer), chunks[2]);
}
