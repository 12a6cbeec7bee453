//! Accepted submission payload

use crate::state::FormState;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// An accepted form tagged for hand-off to a sink
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub form: FormState,
}

impl SubmissionReceipt {
    pub fn new(form: FormState) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            form,
        }
    }

    /// Short id for status messages
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Domain;

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = SubmissionReceipt::new(FormState::default());
        let b = SubmissionReceipt::new(FormState::default());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_short_id_is_prefix() {
        let receipt = SubmissionReceipt::new(FormState::default());
        let short = receipt.short_id();
        assert_eq!(short.len(), 8);
        assert!(receipt.id.simple().to_string().starts_with(&short));
    }

    #[test]
    fn test_serializes_form_under_form_key() {
        let receipt = SubmissionReceipt::new(FormState::with_domain(Domain::Corporate));
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["form"]["domain"], "CORPORATE");
        assert!(json["submittedAt"].is_string());
        assert_eq!(json["id"], receipt.id.to_string());
    }
}
