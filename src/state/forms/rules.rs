//! Field validation rules
//!
//! Each rule is a pure predicate over the whole [`FormState`] paired with the
//! message shown when it fails. A [`RuleSet`] evaluates every rule on every
//! pass and merges the failures into a fresh [`ErrorMap`].

use super::field::FieldName;
use super::form_state::FormState;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

pub const NAME_MESSAGE: &str = "Name should contain only letters.";
pub const REGISTRATION_NUMBER_MESSAGE: &str =
    "Registration number should be alphanumeric and in capital letters.";
pub const MAIL_ID_MESSAGE: &str = "Email should end with srmist.edu.in.";
pub const PHONE_NUMBER_MESSAGE: &str = "Phone number should be numeric.";
pub const DEPARTMENT_MESSAGE: &str = "Department should contain only letters.";
pub const YEAR_REQUIRED_MESSAGE: &str = "Year is required.";
pub const RESUME_REQUIRED_MESSAGE: &str = "Resume is required.";

// Whitespace as browsers define it: Unicode spaces plus U+FEFF, without U+0085
static LETTERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+$",
    )
    .expect("letters pattern compiles")
});
static UPPER_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]+$").expect("registration pattern compiles"));
// ASCII word characters, dot and hyphen before the fixed institute domain
static SRMIST_MAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@srmist\.edu\.in$").expect("mail pattern compiles")
});
static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("digits pattern compiles"));

/// Field name to failure message, recomputed wholesale on every pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<FieldName, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }
}

impl FromIterator<(FieldName, String)> for ErrorMap {
    fn from_iter<T: IntoIterator<Item = (FieldName, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(FieldName, &str); N]> for ErrorMap {
    fn from(entries: [(FieldName, &str); N]) -> Self {
        entries
            .into_iter()
            .map(|(field, msg)| (field, msg.to_string()))
            .collect()
    }
}

/// A single check: the field it reports on, its message and the predicate
#[derive(Clone, Copy)]
pub struct ValidationRule {
    pub field: FieldName,
    pub message: &'static str,
    check: fn(&FormState) -> bool,
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("field", &self.field)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl ValidationRule {
    pub const fn new(
        field: FieldName,
        message: &'static str,
        check: fn(&FormState) -> bool,
    ) -> Self {
        Self {
            field,
            message,
            check,
        }
    }

    pub fn passes(&self, state: &FormState) -> bool {
        (self.check)(state)
    }

    /// The error entry this rule contributes, if any
    pub fn evaluate(&self, state: &FormState) -> Option<(FieldName, String)> {
        (!self.passes(state)).then(|| (self.field, self.message.to_string()))
    }
}

fn name_has_only_letters(state: &FormState) -> bool {
    LETTERS.is_match(&state.name)
}

fn registration_number_is_upper_alphanumeric(state: &FormState) -> bool {
    UPPER_ALPHANUMERIC.is_match(&state.registration_number)
}

fn mail_id_is_srmist(state: &FormState) -> bool {
    SRMIST_MAIL.is_match(&state.mail_id)
}

fn phone_number_is_numeric(state: &FormState) -> bool {
    DIGITS.is_match(&state.phone_number)
}

fn department_has_only_letters(state: &FormState) -> bool {
    LETTERS.is_match(&state.department)
}

fn year_is_present(state: &FormState) -> bool {
    !state.year.trim().is_empty()
}

fn resume_is_selected(state: &FormState) -> bool {
    state.resume.is_some()
}

pub const NAME_RULE: ValidationRule =
    ValidationRule::new(FieldName::Name, NAME_MESSAGE, name_has_only_letters);
pub const REGISTRATION_NUMBER_RULE: ValidationRule = ValidationRule::new(
    FieldName::RegistrationNumber,
    REGISTRATION_NUMBER_MESSAGE,
    registration_number_is_upper_alphanumeric,
);
pub const MAIL_ID_RULE: ValidationRule =
    ValidationRule::new(FieldName::MailId, MAIL_ID_MESSAGE, mail_id_is_srmist);
pub const PHONE_NUMBER_RULE: ValidationRule = ValidationRule::new(
    FieldName::PhoneNumber,
    PHONE_NUMBER_MESSAGE,
    phone_number_is_numeric,
);
pub const DEPARTMENT_RULE: ValidationRule = ValidationRule::new(
    FieldName::Department,
    DEPARTMENT_MESSAGE,
    department_has_only_letters,
);
pub const YEAR_REQUIRED_RULE: ValidationRule =
    ValidationRule::new(FieldName::Year, YEAR_REQUIRED_MESSAGE, year_is_present);
pub const RESUME_REQUIRED_RULE: ValidationRule =
    ValidationRule::new(FieldName::Resume, RESUME_REQUIRED_MESSAGE, resume_is_selected);

/// The set of rules applied on submit
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<ValidationRule>,
}

impl RuleSet {
    /// The five pattern checks. Year, domain and resume are deliberately unchecked.
    pub fn standard() -> Self {
        Self {
            rules: vec![
                NAME_RULE,
                REGISTRATION_NUMBER_RULE,
                MAIL_ID_RULE,
                PHONE_NUMBER_RULE,
                DEPARTMENT_RULE,
            ],
        }
    }

    /// Standard checks plus presence of year and resume
    pub fn strict() -> Self {
        let mut set = Self::standard();
        set.push(YEAR_REQUIRED_RULE);
        set.push(RESUME_REQUIRED_RULE);
        set
    }

    pub fn push(&mut self, rule: ValidationRule) {
        self.rules.push(rule);
    }

    /// Whether any rule reports on the field
    pub fn checks(&self, field: FieldName) -> bool {
        self.rules.iter().any(|r| r.field == field)
    }

    /// Run every rule against the state. Never short-circuits.
    pub fn validate(&self, state: &FormState) -> ErrorMap {
        self.rules.iter().filter_map(|r| r.evaluate(state)).collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}
