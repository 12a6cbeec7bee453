//! Form field value objects

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Keys of the recruitment form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Name,
    RegistrationNumber,
    MailId,
    PhoneNumber,
    Department,
    Year,
    Domain,
    Resume,
}

impl FieldName {
    /// All fields in the order they are rendered
    pub const ALL: [FieldName; 8] = [
        FieldName::Name,
        FieldName::RegistrationNumber,
        FieldName::MailId,
        FieldName::PhoneNumber,
        FieldName::Department,
        FieldName::Year,
        FieldName::Domain,
        FieldName::Resume,
    ];

    /// Key used when the form is serialized
    pub fn key(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::RegistrationNumber => "registrationNumber",
            FieldName::MailId => "mailId",
            FieldName::PhoneNumber => "phoneNumber",
            FieldName::Department => "department",
            FieldName::Year => "year",
            FieldName::Domain => "domain",
            FieldName::Resume => "resume",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Name => "Name",
            FieldName::RegistrationNumber => "Registration Number",
            FieldName::MailId => "Mail ID",
            FieldName::PhoneNumber => "Phone Number",
            FieldName::Department => "Department",
            FieldName::Year => "Year",
            FieldName::Domain => "Domain",
            FieldName::Resume => "Resume (file path)",
        }
    }

    /// Look up a field by its position in the form
    pub fn from_index(index: usize) -> Option<FieldName> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Recruitment domain the applicant is applying for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Domain {
    #[default]
    #[serde(rename = "R&D")]
    RnD,
    #[serde(rename = "WEB DEV")]
    WebDev,
    #[serde(rename = "CORPORATE")]
    Corporate,
    #[serde(rename = "CREATIVES")]
    Creatives,
}

impl Domain {
    pub const ALL: [Domain; 4] = [
        Domain::RnD,
        Domain::WebDev,
        Domain::Corporate,
        Domain::Creatives,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Domain::RnD => "R&D",
            Domain::WebDev => "WEB DEV",
            Domain::Corporate => "CORPORATE",
            Domain::Creatives => "CREATIVES",
        }
    }

    /// Next domain in the selector (wraps around)
    pub fn next(&self) -> Self {
        match self {
            Domain::RnD => Domain::WebDev,
            Domain::WebDev => Domain::Corporate,
            Domain::Corporate => Domain::Creatives,
            Domain::Creatives => Domain::RnD,
        }
    }

    /// Previous domain in the selector (wraps around)
    pub fn prev(&self) -> Self {
        match self {
            Domain::RnD => Domain::Creatives,
            Domain::WebDev => Domain::RnD,
            Domain::Corporate => Domain::WebDev,
            Domain::Creatives => Domain::Corporate,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Domain {
    type Err = UpdateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| UpdateError::UnknownDomain(s.to_string()))
    }
}

/// Reference to a locally selected resume file. The file is never opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    path: PathBuf,
}

impl ResumeFile {
    /// Build a reference from picker input. Blank input means nothing was selected.
    pub fn from_input(input: &str) -> Option<Self> {
        if input.trim().is_empty() {
            None
        } else {
            Some(Self {
                path: PathBuf::from(input),
            })
        }
    }

    /// Final path component, falling back to the whole path
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }

    /// Path as typed, for editing in place
    pub fn as_input(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

impl Serialize for ResumeFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.file_name())
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Domain(Domain),
    File(Option<ResumeFile>),
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Domain> for FieldValue {
    fn from(d: Domain) -> Self {
        FieldValue::Domain(d)
    }
}

impl From<Option<ResumeFile>> for FieldValue {
    fn from(f: Option<ResumeFile>) -> Self {
        FieldValue::File(f)
    }
}

/// Rejected field edits. The form state is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateError {
    #[error("value does not fit field `{field}`")]
    KindMismatch { field: FieldName },
    #[error("unknown domain `{0}`")]
    UnknownDomain(String),
}
