//! Error dialog component

use super::base::{render_dialog, DialogTone};
use ratatui::Frame;

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    render_dialog(frame, DialogTone::Error, error_message, 60);
}
