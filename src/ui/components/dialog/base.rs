//! Centered overlay shared by the submission dialogs

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

/// Columns kept clear between the border and the text
const SIDE_PADDING: u16 = 2;

/// Which outcome a dialog reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogTone {
    Success,
    Error,
}

impl DialogTone {
    fn title(self) -> &'static str {
        match self {
            DialogTone::Success => "Submitted",
            DialogTone::Error => "Error",
        }
    }

    fn color(self) -> Color {
        match self {
            DialogTone::Success => Color::Green,
            DialogTone::Error => Color::Red,
        }
    }
}

fn dismiss_hint() -> Line<'static> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ])
}

/// Render a dialog over the whole frame, at most `max_width` columns wide
pub fn render_dialog(frame: &mut Frame, tone: DialogTone, message: &str, max_width: u16) {
    let chrome = 2 + 2 * SIDE_PADDING;
    let text_width = max_width.saturating_sub(chrome) as usize;

    let mut lines = vec![
        Line::styled(
            tone.title(),
            Style::default()
                .fg(tone.color())
                .add_modifier(Modifier::BOLD),
        ),
        Line::default(),
    ];
    lines.extend(wrap_text(message, text_width).into_iter().map(Line::from));
    lines.push(Line::default());
    lines.push(dismiss_hint());

    let widest = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let area = centered(
        frame.area(),
        (widest + chrome).min(max_width),
        lines.len() as u16 + 2,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(tone.color()))
        .padding(Padding::horizontal(SIDE_PADDING));

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(Color::Black)),
        area,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Greedy word wrap, measured in characters
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = line.chars().count() + word.chars().count() + 1;
            if !line.is_empty() && needed > width {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text() {
        assert_eq!(wrap_text("hello world", 40), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_breaks_on_width() {
        let lines = wrap_text("Please correct the errors in the form.", 16);
        assert!(lines.iter().all(|l| l.len() <= 16));
        assert_eq!(lines.join(" "), "Please correct the errors in the form.");
    }

    #[test]
    fn test_wrap_counts_characters() {
        // Seven characters, thirteen bytes
        assert_eq!(wrap_text("ééé ééé", 7), vec!["ééé ééé"]);
    }

    #[test]
    fn test_wrap_keeps_blank_lines() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_centered_area() {
        let area = centered(Rect::new(0, 0, 100, 40), 30, 8);
        assert_eq!(area, Rect::new(35, 16, 30, 8));
    }

    #[test]
    fn test_centered_clamps_to_frame() {
        let frame = Rect::new(0, 0, 20, 5);
        let area = centered(frame, 30, 8);
        assert!(area.width <= frame.width);
        assert!(area.height <= frame.height);
    }
}
