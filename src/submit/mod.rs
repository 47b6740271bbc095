//! Hand-off of a completed application once the Next action succeeds

mod application;
mod json;
mod traits;

pub use application::Application;
pub use json::JsonSubmitter;
pub use traits::{SubmitError, SubmitHandler};

#[cfg(test)]
pub use traits::MockSubmitHandler;
