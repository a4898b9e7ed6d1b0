//! Application state definitions

use super::forms::Step;
use std::collections::VecDeque;

/// Buttons shown in the action panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    Previous,
    Next,
    Submit,
}

impl FormButton {
    /// Buttons available on a step, in display order
    pub fn for_step(step: Step) -> &'static [FormButton] {
        match step {
            Step::Personal => &[FormButton::Next],
            Step::Address => &[FormButton::Previous, FormButton::Next],
            Step::Confirmation => &[FormButton::Previous, FormButton::Submit],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Previous => "Previous",
            Self::Next => "Next",
            Self::Submit => "Submit",
        }
    }
}

/// UI state that sits alongside the form session
#[derive(Debug, Default)]
pub struct AppState {
    /// Focused row: an index into the step's displayed fields, or one past
    /// the last field for the action panel
    pub active_form_field: usize,
    /// Selected button in the action panel
    pub form_selected_button: usize,
    /// Errors waiting to be shown in the error dialog
    pub error_queue: VecDeque<String>,
    /// Informational dialog (e.g. submission confirmation)
    pub notice: Option<String>,
}

impl AppState {
    /// Number of focusable rows on a step (fields plus the action panel)
    pub fn form_field_count(step: Step) -> usize {
        step.displayed_fields().len() + 1
    }

    /// Whether the action panel has focus on `step`
    pub fn is_action_panel_focused(&self, step: Step) -> bool {
        self.active_form_field == Self::form_field_count(step) - 1
    }

    /// Move to next form field
    pub fn next_form_field(&mut self, step: Step) {
        self.active_form_field = (self.active_form_field + 1) % Self::form_field_count(step);
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self, step: Step) {
        if self.active_form_field == 0 {
            self.active_form_field = Self::form_field_count(step) - 1;
        } else {
            self.active_form_field -= 1;
        }
    }

    /// Reset focus after the step changes. The primary button (the last one)
    /// is preselected.
    pub fn reset_focus(&mut self, step: Step) {
        self.active_form_field = 0;
        self.form_selected_button = FormButton::for_step(step).len() - 1;
    }

    pub fn next_button(&mut self, step: Step) {
        let count = FormButton::for_step(step).len();
        self.form_selected_button = (self.form_selected_button + 1) % count;
    }

    pub fn prev_button(&mut self, step: Step) {
        let count = FormButton::for_step(step).len();
        if self.form_selected_button == 0 {
            self.form_selected_button = count - 1;
        } else {
            self.form_selected_button -= 1;
        }
    }

    /// Currently selected button, if the index is valid for `step`
    pub fn selected_button(&self, step: Step) -> Option<FormButton> {
        FormButton::for_step(step)
            .get(self.form_selected_button)
            .copied()
    }

    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod focus {
        use super::*;

        #[test]
        fn test_field_counts_include_action_panel() {
            assert_eq!(AppState::form_field_count(Step::Personal), 4);
            assert_eq!(AppState::form_field_count(Step::Address), 6);
            assert_eq!(AppState::form_field_count(Step::Confirmation), 1);
        }

        #[test]
        fn test_next_form_field_wraps() {
            let mut state = AppState::default();
            for _ in 0..4 {
                state.next_form_field(Step::Personal);
            }
            assert_eq!(state.active_form_field, 0);
        }

        #[test]
        fn test_prev_form_field_wraps_to_action_panel() {
            let mut state = AppState::default();
            state.prev_form_field(Step::Address);
            assert_eq!(state.active_form_field, 5);
            assert!(state.is_action_panel_focused(Step::Address));
        }

        #[test]
        fn test_confirmation_step_only_has_action_panel() {
            let state = AppState::default();
            assert!(state.is_action_panel_focused(Step::Confirmation));
        }

        #[test]
        fn test_reset_focus_selects_primary_button() {
            let mut state = AppState::default();
            state.active_form_field = 3;
            state.reset_focus(Step::Confirmation);
            assert_eq!(state.active_form_field, 0);
            assert_eq!(
                state.selected_button(Step::Confirmation),
                Some(FormButton::Submit)
            );
        }
    }

    mod buttons {
        use super::*;

        #[test]
        fn test_buttons_per_step() {
            assert_eq!(FormButton::for_step(Step::Personal), &[FormButton::Next]);
            assert_eq!(
                FormButton::for_step(Step::Address),
                &[FormButton::Previous, FormButton::Next]
            );
            assert_eq!(
                FormButton::for_step(Step::Confirmation),
                &[FormButton::Previous, FormButton::Submit]
            );
        }

        #[test]
        fn test_next_button_wraps() {
            let mut state = AppState::default();
            state.form_selected_button = 1;
            state.next_button(Step::Address);
            assert_eq!(state.form_selected_button, 0);
        }

        #[test]
        fn test_prev_button_wraps() {
            let mut state = AppState::default();
            state.prev_button(Step::Confirmation);
            assert_eq!(state.form_selected_button, 1);
        }

        #[test]
        fn test_selected_button_out_of_range_is_none() {
            let mut state = AppState::default();
            state.form_selected_button = 1;
            assert_eq!(state.selected_button(Step::Personal), None);
        }
    }

    mod error_queue {
        use super::*;

        #[test]
        fn test_errors_shown_in_order() {
            let mut state = AppState::default();
            assert!(!state.has_errors());
            state.push_error("first".to_string());
            state.push_error("second".to_string());
            assert_eq!(state.current_error(), Some("first"));
            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));
            state.dismiss_error();
            assert!(!state.has_errors());
        }
    }
}
