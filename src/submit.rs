use crate::form::values::Registration;
use chrono::{DateTime, Local};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to encode registration: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("submission rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub submitted_at: DateTime<Local>,
}

/// Delivers an accepted registration. Called once the submission delay has elapsed.
pub trait Submitter {
    fn submit(&mut self, registration: &Registration) -> Result<Receipt, SubmitError>;
}

/// Stands in for a backend: logs the payload and always succeeds.
#[derive(Debug, Default)]
pub struct SimulatedSubmitter {
    delivered: Vec<Registration>,
}

impl SimulatedSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delivered(&self) -> &[Registration] {
        &self.delivered
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit(&mut self, registration: &Registration) -> Result<Receipt, SubmitError> {
        let payload = serde_json::to_string(registration)?;
        info!(%payload, "form submitted");
        self.delivered.push(registration.clone());
        Ok(Receipt {
            submitted_at: Local::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{SimulatedSubmitter, SubmitError, Submitter};
    use crate::form::field::Hobby;
    use crate::form::values::Registration;

    fn registration() -> Registration {
        Registration {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            birth_date: "1990-04-01".into(),
            hobbies: vec![Hobby::Singing],
            other_hobby: String::new(),
            email: "ada@example.org".into(),
            note: "hi".into(),
        }
    }

    #[test]
    fn simulated_submitter_always_accepts() {
        let mut submitter = SimulatedSubmitter::new();
        submitter.submit(&registration()).expect("simulated submit");
        submitter.submit(&registration()).expect("simulated submit");
        assert_eq!(submitter.delivered().len(), 2);
        assert_eq!(submitter.delivered()[0], registration());
    }

    #[test]
    fn rejection_message_is_readable() {
        let err = SubmitError::Rejected("email already registered".into());
        assert_eq!(err.to_string(), "submission rejected: email already registered");
    }
}
