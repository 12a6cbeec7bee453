//! Default sink: writes accepted submissions to the log

use super::receipt::SubmissionReceipt;
use super::traits::SubmissionSink;
use anyhow::Result;
use async_trait::async_trait;

/// Logs the submitted form data and nothing else
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SubmissionSink for LogSink {
    async fn deliver(&self, receipt: &SubmissionReceipt) -> Result<()> {
        let payload = serde_json::to_string(&receipt.form)?;
        tracing::info!(
            submission_id = %receipt.id,
            submitted_at = %receipt.submitted_at,
            "form data submitted: {payload}"
        );
        Ok(())
    }
}
