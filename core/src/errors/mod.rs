//! Domain-specific error types and error handling.
//!
//! The presentation layer maps each variant onto an HTTP status and the
//! uniform response envelope; messages here are the single source of the
//! human-readable text.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("User not found")]
    UserNotFound,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("New password and confirmation do not match")]
    PasswordConfirmationMismatch,
}

/// Token-related errors
///
/// Verification deliberately collapses every failure mode (bad signature,
/// malformed token, expired, wrong kind) into `InvalidToken` so responses
/// cannot be used as an oracle to distinguish expired from forged tokens.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Signing key is not configured")]
    MissingSigningKey,
}

/// Input validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    RequiredField { field: String },

    #[error("Email is not valid")]
    InvalidEmail,

    #[error("{field} must be between {min} and {max} characters")]
    InvalidLength {
        field: String,
        min: usize,
        max: usize,
    },

    #[error("Invalid value for {field}")]
    InvalidFormat { field: String },
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{message}")]
    BadRequest { message: String },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("{message}")]
    Conflict { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridges to the specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Shorthand for a missing-resource error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Shorthand for a malformed-input error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Shorthand for a uniqueness violation
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Shorthand for an unexpected internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_error_message_does_not_distinguish_expiry() {
        // A single message covers expired, forged and malformed tokens.
        assert_eq!(TokenError::InvalidToken.to_string(), "Invalid or expired token");
    }

    #[test]
    fn test_transparent_bridge() {
        let err: DomainError = AuthError::InvalidCredentials.into();
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_validation_error_fields() {
        let err = ValidationError::InvalidLength {
            field: "username".to_string(),
            min: 5,
            max: 20,
        };
        assert!(err.to_string().contains("username"));
        assert!(err.to_string().contains('5'));
    }
}
