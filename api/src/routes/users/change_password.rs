//! Handler for PATCH /api/v1/users/change-password

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::ChangePasswordRequest;
use crate::handlers::error_handler::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use vs_core::repositories::{
    CommentRepository, PlaylistRepository, SessionRepository, SubscriptionRepository,
    UserRepository, VideoRepository,
};
use vs_core::services::media::MediaStorage;
use vs_shared::types::response::ApiResponse;

/// Changes the authenticated user's password
///
/// # Errors
/// - 400 Bad Request: new password and confirmation differ
/// - 401 Unauthorized: old password does not verify
pub async fn change_password<U, S, V, C, P, B, M>(
    state: web::Data<AppState<U, S, V, C, P, B, M>>,
    auth: AuthContext,
    request: web::Json<ChangePasswordRequest>,
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

    match state
        .sessions
        .change_password(
            auth.user_id,
            &request.old_password,
            &request.new_password,
            &request.confirm_password,
        )
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::message_only(
            "Password changed successfully",
        )),
        Err(error) => handle_domain_error(error),
    }
}
