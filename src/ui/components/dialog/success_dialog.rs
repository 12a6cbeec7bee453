//! Submission confirmation dialog

use super::base::{render_dialog, DialogTone};
use crate::app::ACCEPTED_MESSAGE;
use ratatui::Frame;

/// Render the confirmation shown after an accepted submit
pub fn render_success_dialog(frame: &mut Frame, submission_id: &str) {
    let message = format!("{ACCEPTED_MESSAGE}\nSubmission {submission_id}");
    render_dialog(frame, DialogTone::Success, &message, 50);
}
