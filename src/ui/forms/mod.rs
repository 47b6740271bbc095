//! Form rendering module
//!
//! - `field_renderer`: shared field box, error line and value renderers
//! - `intake_form`: the two-column incorporation form with its action panel

mod field_renderer;
mod intake_form;

pub use intake_form::draw as draw_intake_form;
