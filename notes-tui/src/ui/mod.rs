//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! Components read notes and modal state only through the provider's
//! context; rendering without a provider is a configuration error.

pub mod form;
pub mod modal;
pub mod note_list;

use libnotes::{use_app_context, AppContext, AppProvider};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{Focus, UiState};

/// Render the application UI
///
/// # Errors
///
/// Returns `MissingProvider` when `provider` is `None`.
pub fn render(frame: &mut Frame, state: &UiState, provider: Option<&AppProvider>) -> libnotes::Result<()> {
    let ctx = use_app_context(provider)?;
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box
            Constraint::Min(3),    // Note list
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    render_search_bar(frame, chunks[0], &ctx, state);
    note_list::render_note_list(frame, chunks[1], &ctx, state);
    render_status_bar(frame, chunks[2], &ctx, state);

    if let Some(kind) = ctx.active_modal() {
        modal::render_modal(frame, area, kind, &ctx, state);
    }

    if state.help_visible {
        render_help_overlay(frame, area);
    }

    if let Some(ref error) = state.error {
        render_error_overlay(frame, area, error, state);
    }

    Ok(())
}

/// Drop colors when they are disabled
pub(crate) fn themed(colors: bool, style: Style) -> Style {
    if colors {
        style
    } else {
        Style::default().add_modifier(style.add_modifier)
    }
}

fn render_search_bar(frame: &mut Frame, area: Rect, ctx: &AppContext<'_>, state: &UiState) {
    let focused = state.focus == Focus::Search;
    let colors = state.config.colors_enabled;

    let text = if ctx.search_query.is_empty() && !focused {
        Span::styled("Press / to search", themed(colors, Style::default().fg(Color::DarkGray)))
    } else if focused {
        Span::raw(format!("{}_", ctx.search_query))
    } else {
        Span::raw(ctx.search_query.to_string())
    };

    let border = if focused {
        themed(colors, Style::default().fg(Color::Cyan))
    } else {
        Style::default()
    };

    let widget = Paragraph::new(Line::from(text))
        .block(Block::default().title(" Search ").borders(Borders::ALL).border_style(border));

    frame.render_widget(widget, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &AppContext<'_>, state: &UiState) {
    let hints = if state.focus == Focus::Search {
        "Enter: Search | Esc: Back to list"
    } else {
        "Enter: Open | a: Add | e: Edit | d: Delete | /: Search | r: Reload | F1: Help | q: Quit"
    };

    let left = match state.status.message {
        Some(ref message) => message.clone(),
        None if ctx.is_loaded => format!("{} notes", ctx.items.len()),
        None => "Not loaded".to_string(),
    };

    let line = Line::from(vec![
        Span::styled(left, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" | "),
        Span::styled(hints, themed(state.config.colors_enabled, Style::default().fg(Color::Gray))),
    ]);

    frame.render_widget(Paragraph::new(line).block(Block::default().borders(Borders::ALL)), area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled("Keyboard Shortcuts", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("List:"),
        Line::from("  Up/k Down/j - Move"),
        Line::from("  Enter       - Show note"),
        Line::from("  a           - Add note"),
        Line::from("  e           - Edit note"),
        Line::from("  d / Delete  - Delete note"),
        Line::from("  /           - Search (Enter runs, empty reloads)"),
        Line::from("  r           - Reload"),
        Line::from("  q           - Quit"),
        Line::from(""),
        Line::from("Forms:"),
        Line::from("  Tab         - Switch field"),
        Line::from("  Ctrl+S      - Save"),
        Line::from("  Esc         - Cancel"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(Block::default().title(" Help ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Render error overlay
fn render_error_overlay(frame: &mut Frame, area: Rect, error: &str, state: &UiState) {
    let popup_area = centered_rect(70, 30, area);
    let red = themed(state.config.colors_enabled, Style::default().fg(Color::Red));

    let error_text = vec![
        Line::from(Span::styled("Error", red.add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(error.to_string()),
        Line::from(""),
        Line::from("Press Esc to dismiss"),
    ];

    let error_widget = Paragraph::new(error_text)
        .block(Block::default().title(" Error ").borders(Borders::ALL).border_style(red))
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(error_widget, popup_area);
}

/// Helper to create centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
