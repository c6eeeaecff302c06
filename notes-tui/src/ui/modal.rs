//! Modal dialogs: note detail, add/edit form (see `form.rs`), delete confirmation

use libnotes::{AppContext, ModalKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::form;
use super::note_list::format_date;
use super::{centered_rect, themed};
use crate::app::UiState;

pub fn render_modal(frame: &mut Frame, area: Rect, kind: ModalKind, ctx: &AppContext<'_>, state: &UiState) {
    match kind {
        ModalKind::Show => render_detail(frame, area, ctx, state),
        ModalKind::Add => form::render_form(frame, area, " New note ", state),
        ModalKind::Edit => form::render_form(frame, area, " Edit note ", state),
        ModalKind::Confirm => render_confirm(frame, area, ctx, state),
    }
}

fn render_detail(frame: &mut Frame, area: Rect, ctx: &AppContext<'_>, state: &UiState) {
    let popup_area = centered_rect(70, 60, area);

    let (title, mut lines) = match ctx.selected {
        Some(note) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    format!("Created {}", format_date(&note.created)),
                    themed(state.config.colors_enabled, Style::default().fg(Color::DarkGray)),
                )),
                Line::from(""),
            ];
            lines.extend(note.description.lines().map(|l| Line::from(l.to_string())));
            (format!(" {} ", note.name), lines)
        }
        None => (" Note ".to_string(), vec![Line::from("Note not found")]),
    };

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "e: Edit | d: Delete | Esc: Close",
        themed(state.config.colors_enabled, Style::default().fg(Color::Gray)),
    )));

    let detail = Paragraph::new(lines)
        .block(Block::default().title(title).borders(Borders::ALL))
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(detail, popup_area);
}

fn render_confirm(frame: &mut Frame, area: Rect, ctx: &AppContext<'_>, state: &UiState) {
    let popup_area = centered_rect(50, 25, area);

    let question = match ctx.selected {
        Some(note) => format!("Delete \"{}\"?", note.name),
        None => "Delete this note?".to_string(),
    };

    let text = vec![
        Line::from(""),
        Line::from(question),
        Line::from(""),
        Line::from("y: Delete | n: Cancel"),
    ];

    let widget = Paragraph::new(text)
        .block(
            Block::default()
                .title(" Confirm ")
                .borders(Borders::ALL)
                .border_style(themed(state.config.colors_enabled, Style::default().fg(Color::Red))),
        )
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(widget, popup_area);
}
