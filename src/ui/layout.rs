//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::NEXT_SHORTCUT;
use crate::state::View;
use crate::submit::SubmitHandler;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split off the bottom line for the status bar, returning the content area
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar
pub fn draw_status_bar<S: SubmitHandler>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Submit readiness
    let indicator = if app.state.form.can_submit() {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(indicator);

    spans.push(Span::styled(
        view_hints(&app.state.current_view),
        Style::default().fg(Color::DarkGray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn view_hints(view: &View) -> String {
    match view {
        View::Intake => format!(
            "Tab:next field  ←/→:choose  Space:toggle  y/n:answer  {NEXT_SHORTCUT}:next  \
             Esc:quit"
        ),
        View::Submitted => "Enter/q:exit".to_string(),
    }
}
