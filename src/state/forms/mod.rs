//! Form domain layer
//!
//! Type-safe recruitment form state, the validation rule table and the
//! controller that ties them together. Nothing here renders or performs I/O.

mod controller;
mod field;
mod form_state;
mod rules;

pub use controller::{Accepted, FormController, Rejected};
pub use field::{Domain, FieldName, FieldValue, ResumeFile, UpdateError};
pub use form_state::FormState;
pub use rules::{ErrorMap, RuleSet, ValidationRule};
