//! Confirmation summary and the post-submit screen

use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{FieldName, FormData};
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const THANK_YOU_MESSAGE: &str = "Thank you! Your form has been successfully submitted.";

/// Draw every value with its label, then a hint for the submit keys
pub fn draw_summary(frame: &mut Frame, area: Rect, data: &FormData) {
    let label_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from("Please review your information:"), Line::from("")];
    for field in FieldName::ALL {
        let value = data.get(field);
        let value_span = if value.is_empty() {
            Span::styled("-", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(value)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", field.label()), label_style),
            value_span,
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Enter or {SUBMIT_SHORTCUT} to submit, y to copy the summary"),
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area.inner(Margin::new(1, 0)));
}

/// Draw the screen that replaces the form once it is submitted
pub fn draw_thank_you(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let top = inner.height.saturating_sub(3) / 2;
    let mut lines: Vec<Line> = (0..top).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(
        THANK_YOU_MESSAGE,
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press q or Esc to exit",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}
