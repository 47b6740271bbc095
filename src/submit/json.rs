//! Submit handler that renders the application as JSON

use super::{Application, SubmitError, SubmitHandler};

/// Holds the pretty-printed application until the terminal is restored,
/// since anything written to stdout while the alternate screen is active is lost.
#[derive(Debug, Default)]
pub struct JsonSubmitter {
    payload: Option<String>,
}

impl JsonSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }
}

impl SubmitHandler for JsonSubmitter {
    fn submit(&mut self, application: &Application) -> Result<(), SubmitError> {
        if self.payload.is_some() {
            return Err(SubmitError::AlreadySubmitted(application.session_id));
        }
        self.payload = Some(serde_json::to_string_pretty(application)?);
        tracing::info!(session = %application.session_id, "application encoded");
        Ok(())
    }
}
