//! Error types for the Footprint admin domain.
//!
//! Domain errors cover what can be decided without talking to the backend:
//! malformed input, unknown enum values and role checks.

/// Top-level domain error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Input validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The current principal may not perform the action
    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl DomainError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Forbidden(_) => "FORBIDDEN",
        }
    }
}

/// Validation errors raised before any network call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Week number was not a positive integer
    #[error("week must be a positive integer (周次必须为正整数): {input:?}")]
    InvalidWeek {
        /// Raw input as typed
        input: String,
    },

    /// Unknown review status code
    #[error("unknown review status: {0}")]
    UnknownReviewStatus(i64),

    /// Unknown task type
    #[error("unknown task type: {0}")]
    UnknownTaskType(String),

    /// Field validation failed
    #[error("Field validation failed: {field} - {message}")]
    FieldValidation {
        /// Field name
        field: String,
        /// Reason
        message: String,
    },
}

impl ValidationError {
    /// Create a field validation error
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FieldValidation {
            field: field.into(),
            message: message.into(),
        }
    }
}
