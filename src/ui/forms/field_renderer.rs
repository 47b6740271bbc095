//! Field rendering utilities for forms

use crate::state::FieldState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: a bordered box plus its error line
pub const FIELD_HEIGHT: u16 = 4;

/// How a field is drawn this frame
pub struct FieldView<'a> {
    pub label: &'a str,
    pub content: Line<'a>,
    pub state: &'a FieldState,
    pub is_active: bool,
    pub is_read_only: bool,
}

/// Draw a field box with its visible error underneath
pub fn draw_field(frame: &mut Frame, area: Rect, field: FieldView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let error = field.state.visible_error();
    let border_style = match (error, field.is_active) {
        (Some(_), _) => Style::default().fg(Color::Red),
        (None, true) => Style::default().fg(Color::Cyan),
        (None, false) => Style::default().fg(Color::DarkGray),
    };

    let mut title = format!(" {} ", field.label);
    if field.is_read_only {
        title.push_str("(locked) ");
    }

    let mut content = field.content;
    if field.is_active && !field.is_read_only {
        content
            .spans
            .push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(content).block(block), chunks[0]);

    if let Some(message) = error {
        let line = Paragraph::new(format!(" {message}")).style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::ITALIC),
        );
        frame.render_widget(line, chunks[1]);
    }
}

/// Text value, or a dim placeholder while empty and unfocused
pub fn text_content<'a>(value: &'a str, is_active: bool) -> Line<'a> {
    if value.is_empty() && !is_active {
        Line::from(Span::styled("(empty)", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(value)
    }
}

/// Dropdown rendered as `◀ label ▶`
pub fn dropdown_content<'a>(label: &'a str, is_placeholder: bool, is_active: bool) -> Line<'a> {
    let arrow = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value = if is_placeholder {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled("◀ ", arrow),
        Span::styled(label, value),
        Span::styled(" ▶", arrow),
    ])
}

/// Yes/No radio pair
pub fn radio_content(answer: Option<bool>) -> Line<'static> {
    let mark = |on: bool| if on { "(•)" } else { "( )" };
    Line::from(format!(
        "{} Yes  {} No",
        mark(answer == Some(true)),
        mark(answer == Some(false))
    ))
}
