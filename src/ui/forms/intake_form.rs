//! Incorporation intake form

use super::field_renderer::{
    dropdown_content, draw_field, radio_content, text_content, FieldView, FIELD_HEIGHT,
};
use crate::app::App;
use crate::platform::NEXT_SHORTCUT;
use crate::state::{Catalog, FieldName, FormButton, FormSnapshot};
use crate::submit::SubmitHandler;
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Fields per column; the form is laid out in two columns
const FIELDS_PER_COLUMN: usize = 5;

/// Draw the intake form
pub fn draw<S: SubmitHandler>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let header = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            "Incorporation Application",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  All fields are required",
            Style::default().fg(Color::DarkGray),
        ),
    ])]);
    frame.render_widget(header, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
            Constraint::Length(20), // Action panel
        ])
        .split(chunks[1]);

    for (column, fields) in FieldName::ALL.chunks(FIELDS_PER_COLUMN).enumerate() {
        draw_column(frame, body[column], app, fields);
    }
    draw_action_panel(frame, body[2], app);
}

fn draw_column<S: SubmitHandler>(
    frame: &mut Frame,
    area: Rect,
    app: &App<S>,
    fields: &[FieldName],
) {
    let mut constraints = vec![Constraint::Length(FIELD_HEIGHT); fields.len()];
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let form = &app.state.form;
    for (row, &name) in rows.iter().zip(fields) {
        let is_active = app.state.active_field() == Some(name);
        let content = field_content(
            form,
            app.engine.catalog(),
            name,
            is_active,
            app.state.jurisdiction_cursor,
        );
        draw_field(
            frame,
            Rect {
                width: row.width.saturating_sub(1),
                ..*row
            },
            FieldView {
                label: name.label(),
                content,
                state: form.field(name),
                is_active,
                is_read_only: form.is_read_only(name),
            },
        );
    }
}

/// Render the current value of a field as one line
fn field_content<'a>(
    form: &'a FormSnapshot,
    catalog: &'a Catalog,
    name: FieldName,
    is_active: bool,
    jurisdiction_cursor: usize,
) -> Line<'a> {
    match name {
        FieldName::CompanyDesignation => {
            let index = form.choice(name);
            let label = catalog
                .designations()
                .get(index)
                .map(String::as_str)
                .unwrap_or_default();
            dropdown_content(label, catalog.designation(index).is_none(), is_active)
        }
        FieldName::OperationCountry => {
            let index = form.choice(name);
            let label = catalog
                .countries()
                .get(index)
                .map(String::as_str)
                .unwrap_or_default();
            dropdown_content(label, catalog.country(index).is_none(), is_active)
        }
        FieldName::TargetCountries => {
            let selected = form.target_countries();
            let Some(label) = catalog.jurisdiction(jurisdiction_cursor) else {
                return Line::from("(no jurisdictions)");
            };
            let check = if selected.contains(&jurisdiction_cursor) {
                "[x]"
            } else {
                "[ ]"
            };
            let mut line = dropdown_content(label, false, is_active);
            line.spans.insert(1, Span::raw(format!("{check} ")));
            line.spans.push(Span::styled(
                format!("  {} selected", selected.len()),
                Style::default().fg(Color::DarkGray),
            ));
            line
        }
        FieldName::AllSharesIssued => radio_content(form.all_shares_issued()),
        _ => text_content(form.text(name), is_active),
    }
}

fn draw_action_panel<S: SubmitHandler>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(if app.state.is_action_panel_active() {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(BUTTON_HEIGHT); FormButton::ALL.len()];
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let can_submit = app.state.form.can_submit();
    for (row, button) in rows.iter().zip(FormButton::ALL) {
        let is_selected =
            app.state.is_action_panel_active() && app.state.form_selected_button == button;
        let (is_enabled, accent) = match button {
            FormButton::Next => (can_submit, Some(Color::Green)),
            FormButton::Reset => (true, None),
        };
        render_action_button(frame, *row, button.label(), is_selected, is_enabled, accent);
    }

    let shortcut = Paragraph::new(format!("{NEXT_SHORTCUT}: next"))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(shortcut, rows[FormButton::ALL.len()]);
}
