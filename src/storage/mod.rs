//! Local persistence of in-progress form data

mod form_store;
mod local;
mod traits;

pub use form_store::{LocalFormStore, DEFAULT_STORAGE_KEY};
pub use local::LocalStorage;
pub use traits::FormStore;

#[cfg(test)]
pub use traits::MockFormStore;
