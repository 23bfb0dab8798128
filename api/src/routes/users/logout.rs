//! Handler for POST /api/v1/users/logout

use actix_web::{web, HttpResponse};

use crate::handlers::error_handler::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::users::removal_cookie;
use crate::routes::AppState;

use vs_core::repositories::{
    CommentRepository, PlaylistRepository, SessionRepository, SubscriptionRepository,
    UserRepository, VideoRepository,
};
use vs_core::services::media::MediaStorage;
use vs_shared::types::response::ApiResponse;

/// Revokes the session and instructs the client to drop both cookies
///
/// Requires a valid access token; the authentication gate has already run.
pub async fn logout<U, S, V, C, P, B, M>(
    state: web::Data<AppState<U, S, V, C, P, B, M>>,
    auth: AuthContext,
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
    match state.sessions.logout(auth.user_id).await {
        Ok(()) => HttpResponse::Ok()
            .cookie(removal_cookie(
                &state.cookies,
                &state.cookies.access_cookie_name,
            ))
            .cookie(removal_cookie(
                &state.cookies,
                &state.cookies.refresh_cookie_name,
            ))
            .json(ApiResponse::<()>::message_only(
                "User logged out successfully",
            )),
        Err(error) => handle_domain_error(error),
    }
}
