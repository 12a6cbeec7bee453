//! Form controller: owns the form state and its error map

use super::field::{Domain, FieldName, FieldValue, ResumeFile, UpdateError};
use super::form_state::FormState;
use super::rules::{ErrorMap, RuleSet};
use crate::config::FormConfig;
use thiserror::Error;

/// Outcome of a submit with no validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    /// Final payload, handed to whoever transmits it
    pub form: FormState,
}

/// Outcome of a submit with at least one failing field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct Rejected(pub ErrorMap);

impl Rejected {
    pub fn errors(&self) -> &ErrorMap {
        &self.0
    }
}

/// Holds the recruitment form, applies edits and classifies submissions.
///
/// The controller performs no I/O. Every submit re-validates from scratch;
/// there is no submitted state and no double-submit guard.
#[derive(Debug, Clone)]
pub struct FormController {
    state: FormState,
    errors: ErrorMap,
    rules: RuleSet,
    default_domain: Domain,
    reset_on_success: bool,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(RuleSet::standard())
    }
}

impl FormController {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            state: FormState::default(),
            errors: ErrorMap::new(),
            rules,
            default_domain: Domain::default(),
            reset_on_success: false,
        }
    }

    pub fn from_config(config: &FormConfig) -> Self {
        let rules = if config.strict_required_fields() {
            RuleSet::strict()
        } else {
            RuleSet::standard()
        };
        let default_domain = config.default_domain();
        Self {
            state: FormState::with_domain(default_domain),
            default_domain,
            reset_on_success: config.reset_on_success(),
            ..Self::new(rules)
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Errors from the most recent submit
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error_for(&self, field: FieldName) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Replace one field's value. Does not validate and keeps previous errors.
    pub fn update_field(
        &mut self,
        field: FieldName,
        value: impl Into<FieldValue>,
    ) -> Result<(), UpdateError> {
        self.state.apply(field, value.into())
    }

    /// Append a typed character to the field under the cursor
    pub fn push_char(&mut self, field: FieldName, c: char) -> Result<(), UpdateError> {
        match field {
            FieldName::Resume => {
                let mut input = self.resume_input();
                input.push(c);
                self.update_field(field, ResumeFile::from_input(&input))
            }
            FieldName::Domain => Err(UpdateError::KindMismatch { field }),
            text => {
                let mut value = self.state.display_value(text);
                value.push(c);
                self.update_field(text, value)
            }
        }
    }

    /// Remove the last character from the field under the cursor
    pub fn pop_char(&mut self, field: FieldName) -> Result<(), UpdateError> {
        match field {
            FieldName::Resume => {
                let mut input = self.resume_input();
                input.pop();
                self.update_field(field, ResumeFile::from_input(&input))
            }
            FieldName::Domain => Err(UpdateError::KindMismatch { field }),
            text => {
                let mut value = self.state.display_value(text);
                value.pop();
                self.update_field(text, value)
            }
        }
    }

    /// Move the domain selector forward or backward
    pub fn cycle_domain(&mut self, forward: bool) {
        let current = self.state.domain;
        let next = if forward { current.next() } else { current.prev() };
        self.state.domain = next;
    }

    fn resume_input(&self) -> String {
        self.state
            .resume
            .as_ref()
            .map(ResumeFile::as_input)
            .unwrap_or_default()
    }

    /// Pure check of a state against this controller's rules
    pub fn validate(&self, state: &FormState) -> ErrorMap {
        self.rules.validate(state)
    }

    /// Validate the current state, replace the error map and classify the attempt
    pub fn submit(&mut self) -> Result<Accepted, Rejected> {
        let errors = self.validate(&self.state);
        tracing::debug!(error_count = errors.len(), "form submit attempt");
        self.errors = errors;

        if !self.errors.is_empty() {
            return Err(Rejected(self.errors.clone()));
        }

        Ok(Accepted {
            form: self.state.clone(),
        })
    }

    /// Whether the form should be cleared once an accepted payload is delivered
    pub fn resets_on_success(&self) -> bool {
        self.reset_on_success
    }

    /// Restore defaults and clear errors
    pub fn reset(&mut self) {
        tracing::debug!("resetting recruitment form");
        self.state = FormState::with_domain(self.default_domain);
        self.errors = ErrorMap::new();
    }
}
