//! Trait abstraction for the submission sink to enable mocking in tests

use super::application::Application;
use thiserror::Error;

/// Errors a submit handler can report back to the form
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to encode application: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("application {0} was already submitted")]
    AlreadySubmitted(uuid::Uuid),
}

/// Receives the validated application when the user presses Next
#[cfg_attr(test, mockall::automock)]
pub trait SubmitHandler {
    fn submit(&mut self, application: &Application) -> Result<(), SubmitError>;
}
