//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors (HTTP, JSON, filesystem) into `FetchError`.

use thiserror::Error;

/// The single error kind surfaced by any upstream capability.
///
/// Carries a human-readable description only. There is no transient/permanent
/// split: callers decide whether to retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FetchError {
    message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Prefix the description with what was being attempted, e.g.
    /// `"Failed to load movies: timeout"`.
    pub fn context(self, what: &str) -> Self {
        Self {
            message: format!("{}: {}", what, self.message),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for FetchError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for FetchError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
