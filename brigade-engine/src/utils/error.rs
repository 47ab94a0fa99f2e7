//! Submission error taxonomy
//!
//! Errors surfaced at the boundary of the operation the user directly
//! triggered. Side-effect failures inside a successful primary operation are
//! swallowed by design (see the dispatcher and effect runner) to preserve
//! the "primary action succeeded" guarantee.

use std::fmt;

use shared::ServiceError;
use thiserror::Error;

/// One field-labeled validation message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Aggregated validation result, surfaced as a single message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Fail if any field error was collected
    pub fn into_result(self) -> Result<(), SubmitError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(SubmitError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

/// Order submission failure classification
///
/// - `Validation` is always recoverable locally: the user corrects the
///   listed fields and resubmits. Never produced past the network boundary
///   except when the backend itself rejects the payload.
/// - `Authentication` routes to the re-login flow; not retried here.
/// - `Unknown` is displayed verbatim.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Validation failed: {0}")]
    Validation(ValidationReport),

    #[error("Session expired, please sign in again")]
    Authentication,

    #[error("{0}")]
    Unknown(String),
}

impl SubmitError {
    /// Classify a backend failure from a service call
    pub fn classify(error: ServiceError) -> Self {
        match error {
            ServiceError::Unauthorized => SubmitError::Authentication,
            ServiceError::Validation(message) => {
                let mut report = ValidationReport::default();
                report.push("order", message);
                SubmitError::Validation(report)
            }
            other => SubmitError::Unknown(other.to_string()),
        }
    }
}
