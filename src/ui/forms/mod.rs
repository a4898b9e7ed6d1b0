//! Form rendering module
//!
//! - `field_renderer`: bordered inputs with inline validation errors
//! - `step_form`: the current step plus its action panel
//! - `summary`: the confirmation summary and the thank-you screen

mod field_renderer;
mod step_form;
mod summary;

pub use step_form::draw as draw_step_form;
pub use summary::draw_thank_you;
