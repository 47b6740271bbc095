//! Button component for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Label style for an action button: selection wins, then disabled, then accent
fn label_style(is_selected: bool, is_enabled: bool, accent: Option<Color>) -> Style {
    match (is_selected, is_enabled, accent) {
        (true, _, _) => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        (false, false, _) => Style::default().fg(Color::DarkGray),
        (false, true, Some(color)) => Style::default().fg(color),
        (false, true, None) => Style::default(),
    }
}

/// Render an action panel button
pub fn render_action_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_selected: bool,
    is_enabled: bool,
    accent: Option<Color>,
) {
    let border = if is_selected { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let paragraph = Paragraph::new(format!(" {label} "))
        .style(label_style(is_selected, is_enabled, accent))
        .block(block);

    frame.render_widget(paragraph, area);
}
