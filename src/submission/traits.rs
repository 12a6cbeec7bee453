//! Trait abstraction for submission delivery to enable mocking in tests

use super::receipt::SubmissionReceipt;
use anyhow::Result;
use async_trait::async_trait;

/// Receives accepted forms. Transmission and persistence live behind this seam.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Hand over an accepted submission
    async fn deliver(&self, receipt: &SubmissionReceipt) -> Result<()>;
}
