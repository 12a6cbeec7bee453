//! Recruitment form state

use super::field::{Domain, FieldName, FieldValue, ResumeFile, UpdateError};
use serde::Serialize;

/// Current values of one in-progress application
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub name: String,
    pub registration_number: String,
    pub mail_id: String,
    pub phone_number: String,
    pub department: String,
    pub year: String,
    pub domain: Domain,
    pub resume: Option<ResumeFile>,
}

impl FormState {
    /// Empty form preselecting the given domain
    pub fn with_domain(domain: Domain) -> Self {
        Self {
            domain,
            ..Default::default()
        }
    }

    /// Text value of a text field (`None` for domain and resume)
    pub fn text(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::Name => Some(&self.name),
            FieldName::RegistrationNumber => Some(&self.registration_number),
            FieldName::MailId => Some(&self.mail_id),
            FieldName::PhoneNumber => Some(&self.phone_number),
            FieldName::Department => Some(&self.department),
            FieldName::Year => Some(&self.year),
            FieldName::Domain | FieldName::Resume => None,
        }
    }

    fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        match field {
            FieldName::Name => Some(&mut self.name),
            FieldName::RegistrationNumber => Some(&mut self.registration_number),
            FieldName::MailId => Some(&mut self.mail_id),
            FieldName::PhoneNumber => Some(&mut self.phone_number),
            FieldName::Department => Some(&mut self.department),
            FieldName::Year => Some(&mut self.year),
            FieldName::Domain | FieldName::Resume => None,
        }
    }

    /// Replace exactly one field. Mismatched values leave the state untouched.
    pub fn apply(&mut self, field: FieldName, value: FieldValue) -> Result<(), UpdateError> {
        match (field, value) {
            (FieldName::Domain, FieldValue::Domain(domain)) => self.domain = domain,
            (FieldName::Domain, FieldValue::Text(label)) => self.domain = label.parse()?,
            (FieldName::Resume, FieldValue::File(file)) => self.resume = file,
            (field, FieldValue::Text(text)) => match self.text_mut(field) {
                Some(slot) => *slot = text,
                None => return Err(UpdateError::KindMismatch { field }),
            },
            (field, _) => return Err(UpdateError::KindMismatch { field }),
        }
        Ok(())
    }

    /// Get the display value for rendering
    pub fn display_value(&self, field: FieldName) -> String {
        match field {
            FieldName::Domain => self.domain.label().to_string(),
            FieldName::Resume => self
                .resume
                .as_ref()
                .map(ResumeFile::as_input)
                .unwrap_or_default(),
            text => self.text(text).unwrap_or_default().to_string(),
        }
    }
}
