//! Recruitment form rendering

use super::field_renderer::{draw_field, draw_help_text, FieldKind};
use crate::app::App;
use crate::platform::{CLEAR_FILE_SHORTCUT, RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::FieldName;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Rows taken by a single field box
const FIELD_HEIGHT: u16 = 3;

fn field_kind(field: FieldName) -> FieldKind {
    match field {
        FieldName::Domain => FieldKind::Selector,
        FieldName::Resume => FieldKind::File,
        _ => FieldKind::Text,
    }
}

/// Draw the recruitment form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints: Vec<Constraint> = FieldName::ALL
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Length(1)); // Help text
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Recruitment Portal ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let form = &app.state.form;
    for (idx, field) in FieldName::ALL.into_iter().enumerate() {
        // Fields checked on submit carry a marker
        let label = if form.rules().checks(field) {
            format!("{} *", field.label())
        } else {
            field.label().to_string()
        };
        draw_field(
            frame,
            chunks[idx],
            &label,
            &form.state().display_value(field),
            field_kind(field),
            form.error_for(field),
            app.state.active_form_field == idx,
        );
    }

    let submit_idx = FieldName::ALL.len();
    let submit_row = chunks[submit_idx];
    let button_width = 16.min(submit_row.width);
    let button_area = Rect {
        x: submit_row.x + (submit_row.width - button_width) / 2,
        width: button_width,
        ..submit_row
    };
    render_button(
        frame,
        button_area,
        "Submit",
        app.state.is_submit_row_active(),
    );

    let mut hints: Vec<(&str, &str)> = match app.state.active_field() {
        Some(FieldName::Domain) => vec![("←/→", "change"), ("Tab", "next field")],
        Some(FieldName::Resume) => vec![
            ("Type", "file path"),
            (CLEAR_FILE_SHORTCUT, "clear"),
            ("Tab", "next field"),
        ],
        Some(_) => vec![("Tab", "next field"), ("Shift+Tab", "previous")],
        None => vec![("Enter", "submit"), ("Tab", "first field")],
    };
    hints.push((SUBMIT_SHORTCUT, "submit"));
    hints.push((RESET_SHORTCUT, "reset"));
    draw_help_text(frame, chunks[submit_idx + 1], &hints);
}
