//! Handler for POST /api/v1/users/login

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::LoginRequest;
use crate::handlers::error_handler::{handle_domain_error, handle_validation_errors};
use crate::routes::users::credential_cookie;
use crate::routes::AppState;

use vs_core::repositories::{
    CommentRepository, PlaylistRepository, SessionRepository, SubscriptionRepository,
    UserRepository, VideoRepository,
};
use vs_core::services::media::MediaStorage;
use vs_shared::types::response::ApiResponse;

/// Authenticates a user and opens a session
///
/// On success both tokens are set as HttpOnly cookies and echoed in the
/// response body.
///
/// # Errors
/// - 404 Not Found: no identity with this username
/// - 401 Unauthorized: password verification failed
pub async fn login<U, S, V, C, P, B, M>(
    state: web::Data<AppState<U, S, V, C, P, B, M>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    V: VideoRepository + 'static,
    C: CommentRepository + 'static,
    P: PlaylistRepository + 'static,
    B: SubscriptionRepository + 'static,
    M: MediaStorage + 'static,
{
    if let Err(errors) = request.0.validate() {
        return handle_validation_errors(errors);
    }

    match state.sessions.login(&request.username, &request.password).await {
        Ok(auth) => {
            let access_cookie = credential_cookie(
                &state.cookies,
                &state.cookies.access_cookie_name,
                &auth.access_token,
                state.tokens.access_expiry_seconds(),
            );
            let refresh_cookie = credential_cookie(
                &state.cookies,
                &state.cookies.refresh_cookie_name,
                &auth.refresh_token,
                state.tokens.refresh_expiry_seconds(),
            );

            HttpResponse::Ok()
                .cookie(access_cookie)
                .cookie(refresh_cookie)
                .json(ApiResponse::success("User logged in successfully", auth))
        }
        Err(error) => handle_domain_error(error),
    }
}
