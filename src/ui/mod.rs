//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod submitted;

use crate::app::App;
use crate::state::View;
use crate::submit::SubmitHandler;
use ratatui::Frame;

/// Main draw function
pub fn draw<S: SubmitHandler>(frame: &mut Frame, app: &App<S>) {
    let main_area = layout::create_layout(frame.area());

    match app.state.current_view {
        View::Intake => forms::draw_intake_form(frame, main_area, app),
        View::Submitted => submitted::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    // Error dialog overlays everything
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}
