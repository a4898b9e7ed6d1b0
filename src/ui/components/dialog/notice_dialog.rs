//! Informational dialog component

use super::base::{dismiss_hint, render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

/// Render an informational dialog overlay, e.g. after submission
pub fn render_notice_dialog(frame: &mut Frame, message: &str) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Done",
            accent: Color::Green,
            message,
            hint: Some(dismiss_hint("continue")),
            max_width: 50,
        },
    );
}
