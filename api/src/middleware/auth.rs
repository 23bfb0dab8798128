//! JWT authentication middleware: the request authentication gate.
//!
//! Extracts the access token from the configured cookie or the
//! `Authorization: Bearer` header, verifies it against the token service,
//! and injects the resolved identity into the request. Protected handlers
//! receive it through the [`AuthContext`] extractor; requests without a
//! valid token are rejected with 401 before any handler runs.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use vs_core::domain::entities::token::{Claims, TokenKind};
use vs_core::errors::{DomainError, TokenError};
use vs_core::services::token::TokenService;

/// Authenticated identity injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID extracted from the JWT claims
    pub user_id: Uuid,
    /// Email from the claims
    pub email: Option<String>,
    /// Username from the claims
    pub username: Option<String>,
    /// JWT ID, for log correlation
    pub jti: String,
}

impl AuthContext {
    /// Build the context from verified access-token claims
    pub fn from_claims(claims: Claims) -> Result<Self, DomainError> {
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidToken))?;
        Ok(Self {
            user_id,
            email: claims.email,
            username: claims.username,
            jti: claims.jti,
        })
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    tokens: Arc<TokenService>,
    access_cookie_name: String,
}

impl JwtAuth {
    /// Create the middleware with the token service and cookie name
    pub fn new(tokens: Arc<TokenService>, access_cookie_name: impl Into<String>) -> Self {
        Self {
            tokens,
            access_cookie_name: access_cookie_name.into(),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            tokens: Arc::clone(&self.tokens),
            access_cookie_name: self.access_cookie_name.clone(),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    tokens: Arc<TokenService>,
    access_cookie_name: String,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let tokens = Arc::clone(&self.tokens);
        let cookie_name = self.access_cookie_name.clone();

        Box::pin(async move {
            let token = extract_token(&req, &cookie_name)
                .ok_or_else(|| ErrorUnauthorized("Invalid access token"))?;

            // One generic rejection for every verification failure; the
            // response must not reveal whether the token was expired,
            // malformed or forged.
            let claims = tokens
                .verify(&token, TokenKind::Access)
                .map_err(|_| ErrorUnauthorized("Invalid access token"))?;
            let auth_context = AuthContext::from_claims(claims)
                .map_err(|_| ErrorUnauthorized("Invalid access token"))?;

            req.extensions_mut().insert(auth_context);
            service.call(req).await
        })
    }
}

/// Token from the access cookie, falling back to the Authorization header
fn extract_token(req: &ServiceRequest, cookie_name: &str) -> Option<String> {
    if let Some(cookie) = req.cookie(cookie_name) {
        return Some(cookie.value().to_string());
    }
    extract_bearer_token(req)
}

/// Bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        use actix_web::test;

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();
        assert_eq!(
            extract_bearer_token(&req),
            Some("test_token_123".to_string())
        );

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }

    #[test]
    fn test_cookie_takes_precedence() {
        use actix_web::cookie::Cookie;
        use actix_web::test;

        let req = test::TestRequest::default()
            .cookie(Cookie::new("access_token", "cookie_token"))
            .insert_header((AUTHORIZATION, "Bearer header_token"))
            .to_srv_request();

        assert_eq!(
            extract_token(&req, "access_token"),
            Some("cookie_token".to_string())
        );
    }
}
