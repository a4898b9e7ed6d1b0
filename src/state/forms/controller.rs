//! Form controller: owns the session and drives persistence after each mutation

use super::error::FormError;
use super::field::FieldName;
use super::form_state::{FormSession, Step, SubmitOutcome};
use crate::storage::FormStore;

pub struct FormController {
    session: FormSession,
    store: Box<dyn FormStore>,
}

impl FormController {
    /// Start a session from whatever the store has saved, or empty values
    pub fn new(store: Box<dyn FormStore>) -> Self {
        let data = store.load().unwrap_or_default();
        Self {
            session: FormSession::new(data),
            store,
        }
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    /// Set a field, re-validate it and autosave the whole record
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) -> &FormSession {
        if self.session.set_field(field, value.into()) {
            self.store.save(&self.session.data);
        } else {
            tracing::debug!(%field, "ignoring edit on submitted form");
        }
        &self.session
    }

    pub fn go_to_step(&mut self, target: Step) -> &FormSession {
        if self.session.go_to_step(target) {
            tracing::debug!(step = target.number(), "jumped to step");
        }
        &self.session
    }

    /// `go_to_step` addressed by 1-based step number
    pub fn go_to_step_number(&mut self, number: u8) -> Result<&FormSession, FormError> {
        let target = Step::from_number(number)?;
        Ok(self.go_to_step(target))
    }

    /// Returns true iff the step changed
    pub fn advance_step(&mut self) -> bool {
        let moved = self.session.advance_step();
        if moved {
            tracing::debug!(step = self.session.step.number(), "advanced to step");
        } else {
            tracing::debug!(
                step = self.session.step.number(),
                errors = self.session.errors.len(),
                "step did not validate"
            );
        }
        moved
    }

    /// Returns true iff the step changed
    pub fn retreat_step(&mut self) -> bool {
        let moved = self.session.retreat_step();
        if moved {
            tracing::debug!(step = self.session.step.number(), "went back to step");
        }
        moved
    }

    /// Validate and finalize. Saved progress is cleared exactly once, on the
    /// call that actually submits.
    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.session.submit();
        if outcome == SubmitOutcome::Submitted {
            tracing::info!(data = ?self.session.data, "form data submitted");
            self.store.clear();
        }
        outcome
    }
}
