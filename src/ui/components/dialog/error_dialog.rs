//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Error",
            accent: Color::Red,
            message: error_message,
            dismiss_keys: &["Enter", "Esc"],
            max_width: 60,
        },
    );
}
