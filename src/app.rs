//! Application state and core logic

use crate::state::{
    AppState, FieldName, FormButton, FormController, FormSession, Step, SubmitOutcome,
};
use crate::storage::FormStore;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Dialog text shown once the form is submitted
pub const SUBMITTED_NOTICE: &str = "Form Submitted Successfully!";

const FIX_FIELDS_MESSAGE: &str = "Please fix the highlighted fields";

/// Main application struct
pub struct App {
    /// UI state (focus, dialogs)
    pub state: AppState,
    /// Owns the form session and its persistence
    pub controller: FormController,
    /// Whether the app should quit
    quit: bool,
    /// Transient status bar message
    pub status_message: Option<String>,
    /// Where progress is autosaved, for the status bar
    pub storage_label: String,
}

impl App {
    /// Create a new App, restoring any saved progress from `store`
    pub fn new(store: Box<dyn FormStore>, storage_label: impl Into<String>) -> Self {
        let controller = FormController::new(store);
        let mut state = AppState::default();
        state.reset_focus(controller.session().step);

        Self {
            state,
            controller,
            quit: false,
            status_message: None,
            storage_label: storage_label.into(),
        }
    }

    pub fn session(&self) -> &FormSession {
        self.controller.session()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Field under the cursor, if a field (not the action panel) is focused
    pub fn active_field(&self) -> Option<FieldName> {
        self.session()
            .step
            .displayed_fields()
            .get(self.state.active_form_field)
            .copied()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Dialogs are modal
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }
        if self.state.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.notice = None;
            }
            return;
        }

        self.status_message = None;

        if self.session().submitted {
            self.handle_submitted_key(key);
        } else {
            self.handle_form_key(key);
        }
    }

    /// Keys on the thank-you screen
    fn handle_submitted_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.quit = true;
        }
    }

    /// Keys while the form is being filled in
    fn handle_form_key(&mut self, key: KeyEvent) {
        let step = self.session().step;
        let on_action_panel = self.state.is_action_panel_focused(step);
        // AltGr arrives as Ctrl+Alt on Windows and must still type text
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Tab => self.state.next_form_field(step),
            KeyCode::BackTab => self.state.prev_form_field(step),
            // Tab navigation between steps, no validation
            KeyCode::F(number) => self.jump_to_step(number),
            KeyCode::PageDown => self.next_step(),
            KeyCode::PageUp => self.prev_step(),
            KeyCode::Char('n') if ctrl => self.next_step(),
            KeyCode::Char('p') if ctrl => self.prev_step(),
            KeyCode::Char('s') if ctrl => {
                if step == Step::Confirmation {
                    self.submit();
                } else {
                    self.status_message =
                        Some("Review your details on step 3 before submitting".to_string());
                }
            }
            // Action panel navigation
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') if on_action_panel => {
                self.state.prev_button(step)
            }
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') if on_action_panel => {
                self.state.next_button(step)
            }
            KeyCode::Enter if on_action_panel => self.press_selected_button(),
            // Enter in a field acts like the primary button
            KeyCode::Enter => self.next_step(),
            KeyCode::Char('y') if step == Step::Confirmation => self.copy_summary(),
            KeyCode::Char(c) if !on_action_panel && !ctrl => self.input_char(c),
            KeyCode::Backspace if !on_action_panel => self.backspace(),
            _ => {}
        }
    }

    fn press_selected_button(&mut self) {
        match self.state.selected_button(self.session().step) {
            Some(FormButton::Previous) => self.prev_step(),
            Some(FormButton::Next) => self.next_step(),
            Some(FormButton::Submit) => self.submit(),
            None => {}
        }
    }

    fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_field() {
            let mut value = self.session().data.get(field).to_string();
            value.push(c);
            self.controller.set_field(field, value);
        }
    }

    fn backspace(&mut self) {
        if let Some(field) = self.active_field() {
            let mut value = self.session().data.get(field).to_string();
            if value.pop().is_some() {
                self.controller.set_field(field, value);
            }
        }
    }

    /// Validate the current step and move forward, or focus the first
    /// invalid field
    fn next_step(&mut self) {
        if self.controller.advance_step() {
            self.state.reset_focus(self.session().step);
            return;
        }

        let session = self.session();
        let first_invalid = session
            .step
            .displayed_fields()
            .iter()
            .position(|field| session.errors.get(*field).is_some());
        if let Some(index) = first_invalid {
            self.state.active_form_field = index;
            self.status_message = Some(FIX_FIELDS_MESSAGE.to_string());
        }
    }

    fn prev_step(&mut self) {
        if self.controller.retreat_step() {
            self.state.reset_focus(self.session().step);
        }
    }

    fn jump_to_step(&mut self, number: u8) {
        let step = match self.controller.go_to_step_number(number) {
            Ok(session) => session.step,
            Err(err) => {
                tracing::debug!("ignoring F{number}: {err}");
                return;
            }
        };
        self.state.reset_focus(step);
    }

    fn submit(&mut self) {
        match self.controller.submit() {
            SubmitOutcome::Submitted => self.state.notice = Some(SUBMITTED_NOTICE.to_string()),
            SubmitOutcome::AlreadySubmitted => {}
            SubmitOutcome::Invalid => self.status_message = Some(FIX_FIELDS_MESSAGE.to_string()),
        }
    }

    fn copy_summary(&mut self) {
        let text = self.session().data.summary_lines().join("\n");
        match self.copy_to_clipboard(&text) {
            Ok(()) => self.status_message = Some("Summary copied to clipboard".to_string()),
            Err(err) => {
                tracing::warn!("clipboard copy failed: {err}");
                self.push_error(format!("Failed to copy to clipboard: {err}"));
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
