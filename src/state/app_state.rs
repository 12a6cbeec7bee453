//! Application state: the form controller plus presentation state

use super::forms::{FieldName, FieldValue, FormController};

/// Index of the submit button row, after the last field
pub const SUBMIT_ROW: usize = FieldName::ALL.len();

/// Modal shown over the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// Accepted submit
    Success { submission_id: String },
    /// Rejected submit or failed delivery
    Error(String),
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: FormController,
    /// Focused row; `SUBMIT_ROW` is the submit button
    pub active_form_field: usize,
    pub dialog: Option<Dialog>,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(form: FormController) -> Self {
        Self {
            form,
            ..Default::default()
        }
    }

    /// Number of focusable rows (fields plus submit)
    pub fn form_field_count(&self) -> usize {
        SUBMIT_ROW + 1
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

    /// Field under the cursor, `None` on the submit row
    pub fn active_field(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_form_field)
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_form_field == SUBMIT_ROW
    }

    /// Handle character input in form
    pub fn form_input_char(&mut self, c: char) {
        match self.active_field() {
            Some(FieldName::Domain) => {
                if c == ' ' {
                    self.form.cycle_domain(true);
                }
            }
            Some(field) => {
                if let Err(err) = self.form.push_char(field, c) {
                    tracing::warn!("ignored input for {field}: {err}");
                }
            }
            None => {}
        }
    }

    /// Handle backspace in form
    pub fn form_backspace(&mut self) {
        if let Some(field) = self.active_field().filter(|f| *f != FieldName::Domain) {
            if let Err(err) = self.form.pop_char(field) {
                tracing::warn!("ignored backspace for {field}: {err}");
            }
        }
    }

    /// Cycle the domain selector when it has focus
    pub fn form_cycle_domain(&mut self, forward: bool) {
        if self.active_field() == Some(FieldName::Domain) {
            self.form.cycle_domain(forward);
        }
    }

    /// Drop the selected resume (cancelled picker)
    pub fn form_clear_resume(&mut self) {
        if self.active_field() == Some(FieldName::Resume) {
            if let Err(err) = self.form.update_field(FieldName::Resume, FieldValue::File(None)) {
                tracing::warn!("could not clear resume: {err}");
            }
        }
    }

    /// Clear form state
    pub fn clear_form(&mut self) {
        self.active_form_field = 0;
        self.form.reset();
    }

    /// Show an error dialog
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.dialog = Some(Dialog::Error(message.into()));
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }
}
