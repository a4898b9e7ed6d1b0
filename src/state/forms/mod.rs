//! Form domain layer
//!
//! Field values, per-field validation, the step-wise session and the
//! controller that persists it.

mod controller;
mod error;
mod field;
mod form_state;
mod validator;

pub use controller::FormController;
pub use field::{FieldName, FormData};
pub use form_state::{FormSession, Step, SubmitOutcome};
