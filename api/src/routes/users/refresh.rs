//! Handler for POST /api/v1/users/refresh-token

use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::auth_dto::RefreshTokenRequest;
use crate::handlers::error_handler::handle_domain_error;
use crate::routes::users::credential_cookie;
use crate::routes::AppState;

use vs_core::repositories::{
    CommentRepository, PlaylistRepository, SessionRepository, SubscriptionRepository,
    UserRepository, VideoRepository,
};
use vs_core::services::media::MediaStorage;
use vs_shared::types::response::ApiResponse;

/// Rotates the token pair using a valid refresh token
///
/// The refresh token is read from the refresh cookie first, then from the
/// request body. Every rejection (absent, expired, tampered or superseded
/// token) surfaces as the same 401.
pub async fn refresh<U, S, V, C, P, B, M>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, V, C, P, B, M>>,
    body: Option<web::Json<RefreshTokenRequest>>,
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
    let presented = req
        .cookie(&state.cookies.refresh_cookie_name)
        .map(|cookie| cookie.value().to_string())
        .or_else(|| body.as_ref().and_then(|b| b.refresh_token.clone()));

    match state.sessions.refresh(presented.as_deref()).await {
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
                .json(ApiResponse::success(
                    "Access token refreshed successfully",
                    auth,
                ))
        }
        Err(error) => handle_domain_error(error),
    }
}
