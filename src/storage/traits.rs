//! Trait abstraction for form persistence to enable mocking in tests

use crate::state::FormData;

/// Best-effort persistence of in-progress form data.
///
/// Implementations swallow and log their own failures; callers never see an
/// error and the in-memory session stays authoritative.
#[cfg_attr(test, mockall::automock)]
pub trait FormStore {
    /// Read previously saved data, or `None` if absent or unreadable
    fn load(&self) -> Option<FormData>;

    /// Persist the full record, leaving the prior value in place on failure
    fn save(&self, data: &FormData);

    /// Remove any saved data
    fn clear(&self);
}
