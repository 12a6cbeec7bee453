//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// How a field takes input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Cycled with arrow keys
    Selector,
    /// Path to a local file
    File,
}

/// Draw a form field box with its value and, when present, its error message
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    kind: FieldKind,
    error: Option<&str>,
    is_active: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_style = match (error.is_some(), is_active) {
        (true, _) => Style::default().fg(Color::Red),
        (false, true) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let placeholder = match kind {
        FieldKind::File => "(no file selected)",
        _ => "(empty)",
    };

    let mut spans = Vec::new();
    match kind {
        FieldKind::Selector if is_active => {
            spans.push(Span::styled("◂ ", Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(value.to_string(), style));
            spans.push(Span::styled(" ▸", Style::default().fg(Color::Cyan)));
        }
        _ if value.is_empty() && !is_active => {
            spans.push(Span::styled(
                placeholder,
                Style::default().fg(Color::DarkGray),
            ));
        }
        _ => {
            spans.push(Span::styled(value.to_string(), style));
            if is_active && kind != FieldKind::Selector {
                spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
            }
        }
    }

    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
        )));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw a row of key hints
pub fn draw_help_text(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(key.to_string(), Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {action}  ")));
    }
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
