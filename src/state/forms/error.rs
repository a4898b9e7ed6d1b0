//! Errors raised at the form engine's string/integer boundary

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown form field: {0}")]
    UnknownField(String),

    #[error("step {0} does not exist (expected 1-3)")]
    InvalidStep(u8),
}
