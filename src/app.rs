//! Application state and core logic

use crate::config::IntakeConfig;
use crate::platform::NEXT_MODIFIER;
use crate::state::{AppState, FieldName, FormButton, FormValidationEngine, View};
use crate::submit::{Application, SubmitHandler};
use anyhow::Result;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App<S: SubmitHandler> {
    /// Current application state
    pub state: AppState,
    /// Rules applied to the intake form
    pub engine: FormValidationEngine,
    /// Receives the application when Next succeeds
    submitter: S,
    /// The application accepted by the submitter, if any
    pub submitted: Option<Application>,
    /// Whether the app should quit
    quit: bool,
}

impl<S: SubmitHandler> App<S> {
    /// Create a new App instance
    pub fn new(config: &IntakeConfig, submitter: S) -> Self {
        Self {
            state: AppState::default(),
            engine: config.engine(),
            submitter,
            submitted: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        match self.state.current_view {
            View::Intake => self.handle_intake_key(key)?,
            View::Submitted => self.handle_submitted_key(key)?,
        }
        Ok(())
    }

    /// Handle keys on the intake form
    fn handle_intake_key(&mut self, key: KeyEvent) -> Result<()> {
        // Next shortcut works from anywhere on the form
        if key.code == KeyCode::Char('n') && key.modifiers.contains(NEXT_MODIFIER) {
            self.next_action();
            return Ok(());
        }

        match key.code {
            KeyCode::Tab => self.move_focus(true),
            KeyCode::BackTab => self.move_focus(false),
            KeyCode::Esc => self.quit(),
            _ if self.state.is_action_panel_active() => self.handle_action_panel_key(key),
            _ => {
                if let Some(field) = self.state.active_field() {
                    self.handle_field_key(field, key);
                }
            }
        }
        Ok(())
    }

    fn handle_action_panel_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Char('j')
            | KeyCode::Char('k') => self.state.form_selected_button.toggle(),
            KeyCode::Enter => match self.state.form_selected_button {
                FormButton::Next => self.next_action(),
                FormButton::Reset => self.reset_form(),
            },
            _ => {}
        }
    }

    fn handle_field_key(&mut self, field: FieldName, key: KeyEvent) {
        let form = &mut self.state.form;
        match field {
            FieldName::CompanyDesignation | FieldName::OperationCountry => {
                let len = match field {
                    FieldName::CompanyDesignation => self.engine.catalog().designations().len(),
                    _ => self.engine.catalog().countries().len(),
                };
                let index = match key.code {
                    KeyCode::Right | KeyCode::Char('l') => cycle(form.choice(field), len, true),
                    KeyCode::Left | KeyCode::Char('h') => cycle(form.choice(field), len, false),
                    _ => return,
                };
                if field == FieldName::CompanyDesignation {
                    self.engine.on_designation_select(form, index);
                } else {
                    self.engine.on_operation_country_select(form, index);
                }
            }
            FieldName::TargetCountries => {
                let len = self.engine.catalog().jurisdictions().len();
                let cursor = &mut self.state.jurisdiction_cursor;
                match key.code {
                    KeyCode::Right | KeyCode::Char('l') => *cursor = cycle(*cursor, len, true),
                    KeyCode::Left | KeyCode::Char('h') => *cursor = cycle(*cursor, len, false),
                    KeyCode::Char(' ') | KeyCode::Enter => {
                        self.engine.toggle_target_country(form, *cursor);
                    }
                    _ => {}
                }
            }
            FieldName::AllSharesIssued => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Left => {
                    self.engine.on_all_shares_issued_select(form, true);
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Right => {
                    self.engine.on_all_shares_issued_select(form, false);
                }
                _ => {}
            },
            _ => match key.code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    let mut raw = form.text(field).to_string();
                    raw.push(c);
                    self.engine.on_field_input(form, field, &raw);
                }
                KeyCode::Backspace => {
                    let mut raw = form.text(field).to_string();
                    raw.pop();
                    self.engine.on_field_input(form, field, &raw);
                }
                KeyCode::Enter => self.move_focus(true),
                _ => {}
            },
        }
    }

    /// Handle keys on the confirmation view
    fn handle_submitted_key(&mut self, key: KeyEvent) -> Result<()> {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
            self.quit();
        }
        Ok(())
    }

    /// Leaving a field commits it
    fn move_focus(&mut self, forward: bool) {
        self.blur_active_field();
        if forward {
            self.state.next_form_field();
        } else {
            self.state.prev_form_field();
        }
    }

    fn blur_active_field(&mut self) {
        if let Some(field) = self.state.active_field().filter(|f| f.is_text_entry()) {
            let raw = self.state.form.text(field).to_string();
            self.engine.on_field_blur(&mut self.state.form, field, &raw);
        }
    }

    /// Validate the whole form and hand it to the submitter when it passes
    pub fn next_action(&mut self) {
        self.blur_active_field();
        let form = self.engine.on_submit_attempt(&mut self.state.form);

        if !form.can_submit() {
            let invalid = form.iter().filter(|(_, s)| !s.is_valid()).count();
            if let Some(first) = form.first_invalid() {
                self.state.focus_field(first);
            }
            tracing::info!(invalid, "next blocked by invalid fields");
            self.state.status_message = Some(format!("{invalid} field(s) need attention"));
            return;
        }

        let Some(application) = Application::from_snapshot(
            form,
            self.engine.catalog(),
            self.state.session_id,
            Utc::now(),
        ) else {
            self.state
                .push_error("The form is incomplete and cannot be submitted.".to_string());
            return;
        };

        match self.submitter.submit(&application) {
            Ok(()) => {
                tracing::info!(session = %application.session_id, "application submitted");
                self.submitted = Some(application);
                self.state.current_view = View::Submitted;
            }
            Err(err) => {
                tracing::warn!(error = %err, "submit handler failed");
                self.state.push_error(format!("Failed to submit application: {err}"));
            }
        }
    }

    fn reset_form(&mut self) {
        self.engine.reset(&mut self.state.form);
        self.state.reset_focus();
        self.state.status_message = Some("Form cleared".to_string());
    }
}

/// Step a dropdown index, wrapping at both ends
fn cycle(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else if current == 0 {
        len - 1
    } else {
        (current - 1).min(len - 1)
    }
}
