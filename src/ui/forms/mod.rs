//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `recruitment_form`: The recruitment form itself

mod field_renderer;
mod recruitment_form;

pub use recruitment_form::draw as draw_recruitment_form;
