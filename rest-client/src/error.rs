// rest-client/src/error.rs
use thiserror::Error;

/// Failure surfaced by every service call.
///
/// Flat on purpose: network failures, non-2xx statuses, model serialization
/// and response decoding all end up as a single message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ServiceError {
    message: String,
}

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

impl PartialEq<str> for ServiceError {
    fn eq(&self, other: &str) -> bool {
        self.message == other
    }
}

impl PartialEq<&str> for ServiceError {
    fn eq(&self, other: &&str) -> bool {
        self.message == *other
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}
