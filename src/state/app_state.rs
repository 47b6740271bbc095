//! Application state definitions

use super::forms::{FieldName, FormSnapshot};
use std::collections::VecDeque;
use uuid::Uuid;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Intake,
    /// Shown after the Next action succeeded
    Submitted,
}

/// Buttons on the intake action panel, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Next,
    Reset,
}

impl FormButton {
    pub const ALL: [FormButton; 2] = [FormButton::Next, FormButton::Reset];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Next => "Next",
            Self::Reset => "Reset",
        }
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::Next => Self::Reset,
            Self::Reset => Self::Next,
        };
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Session
    pub session_id: Uuid,
    pub form: FormSnapshot,

    // Focus: 0..FieldName::ALL.len() are fields, the last slot is the action panel
    pub active_form_field: usize,
    pub form_selected_button: FormButton,
    pub jurisdiction_cursor: usize,

    // Feedback
    pub status_message: Option<String>,
    errors: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_view: View::default(),
            session_id: Uuid::new_v4(),
            form: FormSnapshot::new(),
            active_form_field: 0,
            form_selected_button: FormButton::default(),
            jurisdiction_cursor: 0,
            status_message: None,
            errors: VecDeque::new(),
        }
    }
}

impl AppState {
    /// Number of focus slots: every field plus the action panel
    pub fn form_field_count(&self) -> usize {
        FieldName::ALL.len() + 1
    }

    /// Field under focus, `None` while the action panel is focused
    pub fn active_field(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_form_field)
    }

    pub fn is_action_panel_active(&self) -> bool {
        self.active_form_field == FieldName::ALL.len()
    }

    /// Move to next form field
    pub fn next_form_field(&mut self) {
        self.active_form_field = (self.active_form_field + 1) % self.form_field_count();
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self) {
        if self.active_form_field == 0 {
            self.active_form_field = self.form_field_count() - 1;
        } else {
            self.active_form_field -= 1;
        }
    }

    pub fn focus_field(&mut self, field: FieldName) {
        self.active_form_field = field.index();
    }

    #[cfg(test)]
    pub fn focus_action_panel(&mut self) {
        self.active_form_field = FieldName::ALL.len();
    }

    /// Return focus to the top of a fresh form
    pub fn reset_focus(&mut self) {
        self.active_form_field = 0;
        self.form_selected_button = FormButton::default();
        self.jurisdiction_cursor = 0;
    }

    /// Queue an error for the modal dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
