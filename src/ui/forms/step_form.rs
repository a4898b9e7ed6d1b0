//! The three-step form with its action panel

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use super::summary::draw_summary;
use crate::app::App;
use crate::state::{FormButton, Step};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the current step with the action panel on the right
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_step(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Heading shown above a step, e.g. "Step 2: Address Information"
pub fn step_heading(step: Step) -> String {
    format!("Step {}: {}", step.number(), step.title())
}

fn draw_step(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let step = session.step;
    let form_focused = !app.state.is_action_panel_focused(step);

    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(format!(" {} ", step_heading(step)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if step == Step::Confirmation {
        draw_summary(frame, inner, &session.data);
        return;
    }

    let fields = step.displayed_fields();
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    for (idx, field) in fields.iter().enumerate() {
        draw_field(
            frame,
            chunks[idx],
            field.label(),
            session.data.get(*field),
            app.state.active_form_field == idx,
            session.errors.get(*field),
        );
    }
}

fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.session().step;
    let is_focused = app.state.is_action_panel_focused(step);

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let buttons = FormButton::for_step(step);
    let constraints: Vec<Constraint> = buttons
        .iter()
        .map(|_| Constraint::Length(BUTTON_HEIGHT))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner_area);

    for (idx, button) in buttons.iter().enumerate() {
        let accent = match button {
            FormButton::Submit => Some(Color::Green),
            FormButton::Next => Some(Color::Cyan),
            FormButton::Previous => None,
        };
        render_action_button(
            frame,
            button_chunks[idx],
            button.label(),
            app.state.form_selected_button == idx,
            is_focused,
            accent,
        );
    }
}
