//! Domain error types.

use thiserror::Error;
use uuid::Uuid;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Navigator or gallery set up with unusable parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// No uploaded session exists for the identifier.
    #[error("session not found: {0}")]
    SessionNotFound(Uuid),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// A storage or transport error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_not_found_message_includes_id() {
        let id = Uuid::new_v4();

        let message = DomainError::SessionNotFound(id).to_string();

        assert_eq!(message, format!("session not found: {id}"));
    }

    #[test]
    fn test_invalid_configuration_message_is_prefixed() {
        let err = DomainError::InvalidConfiguration("boxes_per_image must be positive".into());

        assert_eq!(
            err.to_string(),
            "invalid configuration: boxes_per_image must be positive"
        );
    }
}
