//! Note list and note item rendering

use chrono::{DateTime, Local, Utc};
use libnotes::{AppContext, Note};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::themed;
use crate::app::UiState;

/// Descriptions longer than this are cut in the list
pub const PREVIEW_CHARS: usize = 160;

/// List preview of a description: one line, at most 160 chars plus "..."
pub fn preview(description: &str) -> String {
    let flat: String = description
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();

    if flat.chars().count() > PREVIEW_CHARS {
        let cut: String = flat.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", cut)
    } else {
        flat
    }
}

/// `D.M.YYYY` in the local timezone, no zero padding
pub fn format_date(created: &DateTime<Utc>) -> String {
    created.with_timezone(&Local).format("%-d.%-m.%Y").to_string()
}

/// One list row: name, preview, date
pub fn note_item(note: &Note, colors: bool) -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(Span::styled(
            note.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(preview(&note.description)),
        Line::from(Span::styled(
            format_date(&note.created),
            themed(colors, Style::default().fg(Color::DarkGray)),
        )),
    ])
}

pub fn render_note_list(frame: &mut Frame, area: Rect, ctx: &AppContext<'_>, state: &UiState) {
    let colors = state.config.colors_enabled;
    let title = format!(" Notes ({}) ", ctx.items.len());
    let block = Block::default().title(title).borders(Borders::ALL);

    // An empty server never sets is_loaded, so it stays on "Loading..."
    if !ctx.is_loaded && ctx.items.is_empty() {
        frame.render_widget(Paragraph::new("Loading...").block(block), area);
        return;
    }
    if ctx.items.is_empty() {
        frame.render_widget(Paragraph::new("No notes").block(block), area);
        return;
    }

    let items: Vec<ListItem> = ctx.items.iter().map(|note| note_item(note, colors)).collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(themed(
            colors,
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ))
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(Some(state.cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}
