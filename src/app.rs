//! Application state and core logic

use crate::config::FormConfig;
use crate::platform::has_shortcut_modifier;
use crate::state::{AppState, Dialog, FormController};
use crate::submission::{LogSink, SubmissionReceipt, SubmissionSink};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// Shown when a submit is rejected
pub const REJECTED_MESSAGE: &str = "Please correct the errors in the form.";

/// Shown when a submit is accepted
pub const ACCEPTED_MESSAGE: &str = "Form submitted successfully!";

/// Window for the second Ctrl+C of a double-tap quit
const CTRL_C_WINDOW: Duration = Duration::from_millis(1000);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Receives accepted submissions
    sink: Box<dyn SubmissionSink>,
    /// Whether the app should quit
    quit: bool,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
    /// Most recent accepted submission
    pub last_receipt: Option<SubmissionReceipt>,
}

impl App {
    /// Create a new App that logs accepted submissions
    pub fn new(config: &FormConfig) -> Self {
        Self::with_sink(config, Box::new(LogSink::new()))
    }

    pub fn with_sink(config: &FormConfig, sink: Box<dyn SubmissionSink>) -> Self {
        Self {
            state: AppState::new(FormController::from_config(config)),
            sink,
            quit: false,
            last_ctrl_c: None,
            last_receipt: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_ctrl_c();
            return Ok(());
        }
        self.last_ctrl_c = None;

        if self.state.dialog.is_some() {
            return self.handle_dialog_key(key);
        }
        self.handle_form_key(key).await
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        match self.last_ctrl_c {
            Some(prev) if now.duration_since(prev) <= CTRL_C_WINDOW => self.quit = true,
            _ => {
                self.last_ctrl_c = Some(now);
                self.state.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) -> Result<()> {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.state.dismiss_dialog();
        }
        Ok(())
    }

    /// Handle keys in the recruitment form
    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_submit_row = self.state.is_submit_row_active();
        let shortcut = has_shortcut_modifier(key.modifiers);

        match key.code {
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if shortcut => self.submit_form().await,
            KeyCode::Char('r') if shortcut => {
                self.state.clear_form();
                self.state.status_message = Some("Form cleared".to_string());
            }
            KeyCode::Char('u') if shortcut => self.state.form_clear_resume(),
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            KeyCode::Left => self.state.form_cycle_domain(false),
            KeyCode::Right => self.state.form_cycle_domain(true),
            KeyCode::Enter if on_submit_row => self.submit_form().await,
            KeyCode::Enter => self.state.next_form_field(),
            KeyCode::Esc => self.quit = true,
            // Form field input (only when not on the submit row)
            KeyCode::Char(c) if !on_submit_row && !shortcut => self.state.form_input_char(c),
            KeyCode::Backspace if !on_submit_row => self.state.form_backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Validate the form and hand accepted data to the sink
    pub async fn submit_form(&mut self) {
        match self.state.form.submit() {
            Ok(accepted) => {
                let receipt = SubmissionReceipt::new(accepted.form);
                match self.sink.deliver(&receipt).await {
                    Ok(()) => {
                        let submission_id = receipt.short_id();
                        self.state.status_message = Some(format!("Submitted ({submission_id})"));
                        self.state.dialog = Some(Dialog::Success { submission_id });
                        self.last_receipt = Some(receipt);
                        if self.state.form.resets_on_success() {
                            self.state.form.reset();
                        }
                    }
                    Err(err) => {
                        tracing::warn!("failed to deliver submission {}: {err:#}", receipt.id);
                        self.state
                            .push_error(format!("Failed to deliver submission: {err}"));
                    }
                }
            }
            Err(rejected) => {
                let fields: Vec<_> = rejected.errors().fields().map(|f| f.key()).collect();
                tracing::info!("submission rejected: {}", fields.join(", "));
                self.state.status_message = Some(rejected.to_string());
                self.state.push_error(REJECTED_MESSAGE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Domain, FieldName, SUBMIT_ROW};
    use crate::submission::MockSubmissionSink;
    use tokio_test::block_on;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            block_on(app.handle_key(key(KeyCode::Char(c)))).unwrap();
        }
    }

    /// Fill every text field with valid input, leaving focus on the domain row
    fn fill_valid(app: &mut App) {
        for value in [
            "John Doe",
            "RA2011003010123",
            "john.doe@srmist.edu.in",
            "9876543210",
            "Computer Science",
            "3",
        ] {
            type_text(app, value);
            block_on(app.handle_key(key(KeyCode::Tab))).unwrap();
        }
    }

    fn app_expecting_deliveries(times: usize) -> App {
        let mut sink = MockSubmissionSink::new();
        sink.expect_deliver().times(times).returning(|_| Ok(()));
        App::with_sink(&FormConfig::default(), Box::new(sink))
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_should_quit_initially_false() {
            let app = app_expecting_deliveries(0);
            assert!(!app.should_quit());
        }

        #[test]
        fn test_tab_and_backtab_move_focus() {
            let mut app = app_expecting_deliveries(0);
            block_on(app.handle_key(key(KeyCode::Tab))).unwrap();
            assert_eq!(app.state.active_field(), Some(FieldName::RegistrationNumber));
            block_on(app.handle_key(key(KeyCode::BackTab))).unwrap();
            block_on(app.handle_key(key(KeyCode::Up))).unwrap();
            assert!(app.state.is_submit_row_active());
        }

        #[test]
        fn test_enter_on_field_advances() {
            let mut app = app_expecting_deliveries(0);
            block_on(app.handle_key(key(KeyCode::Enter))).unwrap();
            assert_eq!(app.state.active_form_field, 1);
            assert!(app.state.dialog.is_none());
        }

        #[test]
        fn test_esc_quits() {
            let mut app = app_expecting_deliveries(0);
            block_on(app.handle_key(key(KeyCode::Esc))).unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_double_ctrl_c_quits() {
            let mut app = app_expecting_deliveries(0);
            block_on(app.handle_key(ctrl('c'))).unwrap();
            assert!(!app.should_quit());
            assert!(app.last_ctrl_c.is_some());
            block_on(app.handle_key(ctrl('c'))).unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_stale_ctrl_c_does_not_quit() {
            let mut app = app_expecting_deliveries(0);
            app.last_ctrl_c = Some(Instant::now() - Duration::from_secs(5));
            block_on(app.handle_key(ctrl('c'))).unwrap();
            assert!(!app.should_quit());
        }

        #[test]
        fn test_other_key_cancels_ctrl_c() {
            let mut app = app_expecting_deliveries(0);
            block_on(app.handle_key(ctrl('c'))).unwrap();
            block_on(app.handle_key(key(KeyCode::Tab))).unwrap();
            block_on(app.handle_key(ctrl('c'))).unwrap();
            assert!(!app.should_quit());
        }
    }

    mod editing {
        use super::*;

        #[test]
        fn test_typing_edits_focused_field() {
            let mut app = app_expecting_deliveries(0);
            type_text(&mut app, "Jo");
            block_on(app.handle_key(key(KeyCode::Backspace))).unwrap();
            assert_eq!(app.state.form.state().name, "J");
        }

        #[test]
        fn test_ctrl_chars_are_not_typed() {
            let mut app = app_expecting_deliveries(0);
            block_on(app.handle_key(ctrl('x'))).unwrap();
            assert_eq!(app.state.form.state().name, "");
        }

        #[test]
        fn test_arrows_cycle_domain() {
            let mut app = app_expecting_deliveries(0);
            app.state.active_form_field = 6;
            block_on(app.handle_key(key(KeyCode::Right))).unwrap();
            block_on(app.handle_key(key(KeyCode::Right))).unwrap();
            assert_eq!(app.state.form.state().domain, Domain::Corporate);
            block_on(app.handle_key(key(KeyCode::Left))).unwrap();
            assert_eq!(app.state.form.state().domain, Domain::WebDev);
        }

        #[test]
        fn test_ctrl_u_clears_resume() {
            let mut app = app_expecting_deliveries(0);
            app.state.active_form_field = 7;
            type_text(&mut app, "cv.pdf");
            assert!(app.state.form.state().resume.is_some());
            block_on(app.handle_key(ctrl('u'))).unwrap();
            assert!(app.state.form.state().resume.is_none());
        }

        #[test]
        fn test_ctrl_r_resets_form() {
            let mut app = app_expecting_deliveries(0);
            type_text(&mut app, "John");
            block_on(app.handle_key(ctrl('r'))).unwrap();
            assert_eq!(app.state.form.state().name, "");
            assert_eq!(app.state.status_message.as_deref(), Some("Form cleared"));
        }
    }

    mod submitting {
        use super::*;

        #[test]
        fn test_valid_form_is_delivered() {
            let mut app = app_expecting_deliveries(1);
            fill_valid(&mut app);
            block_on(app.handle_key(ctrl('s'))).unwrap();

            assert!(matches!(app.state.dialog, Some(Dialog::Success { .. })));
            let receipt = app.last_receipt.as_ref().unwrap();
            assert_eq!(receipt.form.name, "John Doe");
            assert_eq!(receipt.form.domain, Domain::RnD);
            // No reset after success by default
            assert_eq!(app.state.form.state().name, "John Doe");
        }

        #[test]
        fn test_enter_on_submit_row_submits() {
            let mut app = app_expecting_deliveries(1);
            fill_valid(&mut app);
            app.state.active_form_field = SUBMIT_ROW;
            block_on(app.handle_key(key(KeyCode::Enter))).unwrap();
            assert!(matches!(app.state.dialog, Some(Dialog::Success { .. })));
        }

        #[test]
        fn test_invalid_form_is_not_delivered() {
            let mut app = app_expecting_deliveries(0);
            block_on(app.handle_key(ctrl('s'))).unwrap();
            assert_eq!(
                app.state.dialog,
                Some(Dialog::Error(REJECTED_MESSAGE.to_string()))
            );
            assert_eq!(app.state.form.errors().len(), 5);
            assert!(app.last_receipt.is_none());
        }

        #[test]
        fn test_dialog_swallows_keys_until_dismissed() {
            let mut app = app_expecting_deliveries(0);
            block_on(app.handle_key(ctrl('s'))).unwrap();
            type_text(&mut app, "abc");
            assert_eq!(app.state.form.state().name, "");
            block_on(app.handle_key(key(KeyCode::Esc))).unwrap();
            assert!(app.state.dialog.is_none());
            assert!(!app.should_quit());
        }

        #[test]
        fn test_double_submit_delivers_twice() {
            let mut app = app_expecting_deliveries(2);
            fill_valid(&mut app);
            block_on(app.submit_form());
            let first = app.last_receipt.clone().unwrap();
            app.state.dismiss_dialog();
            block_on(app.submit_form());
            let second = app.last_receipt.clone().unwrap();
            assert_ne!(first.id, second.id);
            assert_eq!(first.form, second.form);
        }

        #[test]
        fn test_delivery_failure_shows_error() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_deliver()
                .times(1)
                .returning(|_| Err(anyhow::anyhow!("offline")));
            let mut app = App::with_sink(&FormConfig::default(), Box::new(sink));
            fill_valid(&mut app);
            block_on(app.submit_form());

            assert_eq!(
                app.state.dialog,
                Some(Dialog::Error(
                    "Failed to deliver submission: offline".to_string()
                ))
            );
            assert!(app.last_receipt.is_none());
            assert_eq!(app.state.form.state().name, "John Doe");
        }

        #[test]
        fn test_reset_on_success_config() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_deliver().times(1).returning(|_| Ok(()));
            let config = FormConfig {
                reset_on_success: Some(true),
                ..Default::default()
            };
            let mut app = App::with_sink(&config, Box::new(sink));
            fill_valid(&mut app);
            block_on(app.submit_form());

            assert_eq!(app.last_receipt.as_ref().unwrap().form.name, "John Doe");
            assert_eq!(app.state.form.state().name, "");
        }

        #[test]
        fn test_failed_delivery_keeps_input_with_reset_configured() {
            let mut sink = MockSubmissionSink::new();
            sink.expect_deliver()
                .times(1)
                .returning(|_| Err(anyhow::anyhow!("offline")));
            let config = FormConfig {
                reset_on_success: Some(true),
                ..Default::default()
            };
            let mut app = App::with_sink(&config, Box::new(sink));
            fill_valid(&mut app);
            block_on(app.submit_form());

            assert_eq!(
                app.state.dialog,
                Some(Dialog::Error(
                    "Failed to deliver submission: offline".to_string()
                ))
            );
            assert_eq!(app.state.form.state().name, "John Doe");
            assert_eq!(app.state.form.state().mail_id, "john.doe@srmist.edu.in");
            assert!(app.last_receipt.is_none());
        }
    }
}
