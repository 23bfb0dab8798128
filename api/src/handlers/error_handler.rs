//! Maps domain errors onto HTTP responses with the uniform envelope.
//!
//! Expired and forged tokens surface identically (generic 401), and internal
//! failures never leak implementation details. In development mode a
//! diagnostic trace is attached.

use actix_web::{http::StatusCode, HttpResponse};
use once_cell::sync::Lazy;
use serde::Serialize;

use vs_core::errors::{AuthError, DomainError, TokenError};

static DEVELOPMENT_MODE: Lazy<bool> = Lazy::new(|| {
    std::env::var("APP_ENV")
        .map(|v| v.eq_ignore_ascii_case("development"))
        .unwrap_or(false)
});

/// Failure envelope; `trace` is attached in development mode only
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<String>,
}

/// HTTP status for each domain error variant
fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        DomainError::Unauthorized => StatusCode::UNAUTHORIZED,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Conflict { .. } => StatusCode::CONFLICT,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Auth(auth) => match auth {
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::UserAlreadyExists => StatusCode::CONFLICT,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::PasswordConfirmationMismatch => StatusCode::BAD_REQUEST,
        },
        DomainError::Token(token) => match token {
            TokenError::InvalidToken => StatusCode::UNAUTHORIZED,
            TokenError::TokenGenerationFailed | TokenError::MissingSigningKey => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        },
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
    }
}

/// Message exposed to the caller
fn public_message(error: &DomainError) -> String {
    match error {
        // Internal details stay in the logs.
        DomainError::Internal { .. } => "Something went wrong".to_string(),
        DomainError::Token(TokenError::TokenGenerationFailed)
        | DomainError::Token(TokenError::MissingSigningKey) => "Something went wrong".to_string(),
        other => other.to_string(),
    }
}

/// Convert a domain error into its HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let status = status_for(&error);
    if status.is_server_error() {
        log::error!("internal error: {:?}", error);
    } else {
        log::debug!("request failed: {}", error);
    }

    let body = ErrorBody {
        success: false,
        message: public_message(&error),
        trace: DEVELOPMENT_MODE.then(|| format!("{:?}", error)),
    };
    HttpResponse::build(status).json(body)
}

/// Convert DTO validation failures into a 400 with the envelope shape
pub fn handle_validation_errors(errors: validator::ValidationErrors) -> HttpResponse {
    let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
    fields.sort_unstable();

    let body = ErrorBody {
        success: false,
        message: format!("Invalid value for: {}", fields.join(", ")),
        trace: None,
    };
    HttpResponse::BadRequest().json(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&DomainError::Unauthorized),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_for(&DomainError::not_found("Video")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&DomainError::conflict("taken")),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&DomainError::Auth(AuthError::UserNotFound)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&DomainError::Token(TokenError::InvalidToken)),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_internal_message_is_opaque() {
        let message = public_message(&DomainError::internal("db connection refused at 10.0.0.3"));
        assert_eq!(message, "Something went wrong");
    }

    #[test]
    fn test_token_errors_share_one_message() {
        // Verification failures never say why the token was rejected.
        let message = public_message(&DomainError::Token(TokenError::InvalidToken));
        assert_eq!(message, "Invalid or expired token");
    }
}
