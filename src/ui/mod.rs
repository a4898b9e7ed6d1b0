//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use components::{render_error_dialog, render_notice_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    if app.session().submitted {
        forms::draw_thank_you(frame, main_area);
    } else {
        forms::draw_step_form(frame, main_area, app);
    }

    layout::draw_status_bar(frame, status_area, app);

    // Overlays, errors on top
    if let Some(notice) = &app.state.notice {
        render_notice_dialog(frame, notice);
    }
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldName, FormData};
    use crate::storage::MockFormStore;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn app_with(saved: Option<FormData>) -> App {
        let mut store = MockFormStore::new();
        store.expect_load().returning(move || saved.clone());
        store.expect_save().return_const(());
        store.expect_clear().return_const(());
        App::new(Box::new(store), "formData")
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_first_step_shows_title_tabs_and_fields() {
        let screen = render(&app_with(None));
        assert!(screen.contains("Multi-step Form"));
        assert!(screen.contains("Step1"));
        assert!(screen.contains("Step3"));
        assert!(screen.contains("Step 1: Personal Information"));
        assert!(screen.contains(FieldName::Email.label()));
        assert!(screen.contains("Next"));
        assert!(!screen.contains("Previous"));
        assert!(screen.contains("saved to formData"));
    }

    #[test]
    fn test_validation_errors_are_rendered() {
        let mut app = app_with(None);
        press(&mut app, KeyCode::Tab);
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));

        let screen = render(&app);
        assert!(screen.contains("Invalid email format"));
    }

    #[test]
    fn test_address_step_shows_optional_line() {
        let mut app = app_with(None);
        press(&mut app, KeyCode::F(2));

        let screen = render(&app);
        assert!(screen.contains("Step 2: Address Information"));
        assert!(screen.contains("Address Line 2"));
        assert!(screen.contains("Previous"));
    }

    #[test]
    fn test_confirmation_shows_summary() {
        let mut app = app_with(Some(FormData {
            name: "Alice".to_string(),
            city: "Springfield".to_string(),
            ..Default::default()
        }));
        press(&mut app, KeyCode::F(3));

        let screen = render(&app);
        assert!(screen.contains("Step 3: Confirmation"));
        assert!(screen.contains("Name: Alice"));
        assert!(screen.contains("City: Springfield"));
        assert!(screen.contains("Submit"));
    }

    #[test]
    fn test_submission_shows_dialog_then_thank_you() {
        let mut app = app_with(None);
        press(&mut app, KeyCode::F(3));
        press(&mut app, KeyCode::Enter);

        let screen = render(&app);
        assert!(screen.contains("Form Submitted Successfully!"));

        press(&mut app, KeyCode::Enter);
        let screen = render(&app);
        assert!(screen.contains("Thank you! Your form has been successfully submitted."));
        assert!(!screen.contains("Form Submitted Successfully!"));
    }

    #[test]
    fn test_error_dialog_overlay() {
        let mut app = app_with(None);
        app.push_error("Failed to copy to clipboard");

        let screen = render(&app);
        assert!(screen.contains("Error"));
        assert!(screen.contains("Failed to copy to clipboard"));
    }
}
