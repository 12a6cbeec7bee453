//! Submission hand-off for accepted forms

mod log_sink;
mod receipt;
mod traits;

pub use log_sink::LogSink;
pub use receipt::SubmissionReceipt;
pub use traits::SubmissionSink;

#[cfg(test)]
pub use traits::MockSubmissionSink;
