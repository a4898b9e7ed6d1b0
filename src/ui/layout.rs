//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{STEP_JUMP_HINT, SUBMIT_SHORTCUT};
use crate::state::Step;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub const APP_TITLE: &str = "Multi-step Form";

/// Rows: header (title + tabs), content, status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the title and the step tabs
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let titles: Vec<Line> = Step::ALL
        .iter()
        .map(|step| Line::from(format!("Step{}", step.number())))
        .collect();
    let selected = Step::ALL
        .iter()
        .position(|step| *step == session.step)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {APP_TITLE} "),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );

    frame.render_widget(tabs, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    spans.push(Span::styled(key_hints(app), Style::default().fg(Color::Gray)));

    let errors = &app.session().errors;
    if !errors.is_empty() {
        let labels: Vec<&str> = errors.iter().map(|(field, _)| field.label()).collect();
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{} invalid: {}", errors.len(), labels.join(", ")),
            Style::default().fg(Color::Red),
        ));
    }

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!("saved to {}", app.storage_label),
        Style::default().fg(Color::Blue),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let width = quit_hint.len() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width: width.min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current screen
fn key_hints(app: &App) -> String {
    let session = app.session();
    if session.submitted {
        return "q/Esc:exit".to_string();
    }
    match session.step {
        Step::Personal | Step::Address => {
            format!("Tab:next field  Enter:next  PgUp/PgDn:step  {STEP_JUMP_HINT}")
        }
        Step::Confirmation => {
            format!("Enter/{SUBMIT_SHORTCUT}:submit  y:copy  PgUp:back  {STEP_JUMP_HINT}")
        }
    }
}
