//! Confirmation shown once the application was handed off

use crate::app::App;
use crate::submit::SubmitHandler;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw<S: SubmitHandler>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(Span::styled(
            "Application submitted",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if let Some(application) = &app.submitted {
        let row = |name: &'static str, value: String| {
            Line::from(vec![Span::styled(format!("{name:<22}"), label), Span::raw(value)])
        };
        lines.extend([
            row("Full name", application.full_name.clone()),
            row("Email", application.email.clone()),
            row(
                "Company name",
                format!(
                    "{} {}",
                    application.company_name, application.company_designation
                ),
            ),
            row("Alternative name", application.alt_company_name.clone()),
            row("Country of operation", application.operation_country.clone()),
            row("Target jurisdictions", application.target_countries.join(", ")),
            row("Shares", application.num_shares.clone()),
            row("Issued shares", application.issued_shares.clone()),
            Line::from(""),
            row("Reference", application.session_id.to_string()),
        ]);
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(paragraph, area);
}
