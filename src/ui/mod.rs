//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::Dialog;
use components::{render_error_dialog, render_success_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area);
    forms::draw_recruitment_form(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Dialogs render last so they overlay the form
    match &app.state.dialog {
        Some(Dialog::Success { submission_id }) => render_success_dialog(frame, submission_id),
        Some(Dialog::Error(message)) => render_error_dialog(frame, message),
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use crate::state::FieldName;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn render(app: &App) -> Buffer {
        let backend = TestBackend::new(100, 45);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_all_field_labels() {
        let app = App::new(&FormConfig::default());
        let text = screen_text(&render(&app));
        for field in FieldName::ALL {
            assert!(text.contains(field.label()), "missing {}", field.label());
        }
        assert!(text.contains("R&D"));
        assert!(text.contains("Submit"));
        assert!(text.contains(layout::CHAPTER_BANNER));
    }

    #[test]
    fn test_renders_field_errors_and_dialog() {
        let mut app = App::new(&FormConfig::default());
        tokio_test::block_on(app.submit_form());
        let text = screen_text(&render(&app));
        assert!(text.contains("Phone number should be numeric."));
        assert!(text.contains(crate::app::REJECTED_MESSAGE));
    }

    #[test]
    fn test_renders_success_dialog() {
        let mut app = App::new(&FormConfig::default());
        app.state.dialog = Some(Dialog::Success {
            submission_id: "abcd1234".to_string(),
        });
        let text = screen_text(&render(&app));
        assert!(text.contains(crate::app::ACCEPTED_MESSAGE));
        assert!(text.contains("abcd1234"));
    }
}
