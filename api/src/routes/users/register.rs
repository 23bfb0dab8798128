//! Handler for POST /api/v1/users/register

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::RegisterRequest;
use crate::handlers::error_handler::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

use vs_core::domain::value_objects::NewUser;
use vs_core::repositories::{
    CommentRepository, PlaylistRepository, SessionRepository, SubscriptionRepository,
    UserRepository, VideoRepository,
};
use vs_core::services::media::MediaStorage;
use vs_shared::types::response::ApiResponse;

/// Registers a new user account
///
/// The avatar (and optional cover image) were staged on disk by the upload
/// middleware; both are pushed to the media host before the account is
/// created, so a failed upload never leaves a half-registered user.
pub async fn register<U, S, V, C, P, B, M>(
    state: web::Data<AppState<U, S, V, C, P, B, M>>,
    request: web::Json<RegisterRequest>,
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
    let request = request.into_inner();

    let avatar = match state.media.upload(&request.avatar_path).await {
        Ok(uploaded) => uploaded,
        Err(error) => return handle_domain_error(error),
    };
    let cover_image_url = match &request.cover_image_path {
        Some(path) => match state.media.upload(path).await {
            Ok(uploaded) => Some(uploaded.url),
            Err(error) => return handle_domain_error(error),
        },
        None => None,
    };

    let new_user = NewUser {
        username: request.username,
        email: request.email,
        password: request.password,
        full_name: request.full_name,
        avatar_url: avatar.url,
        cover_image_url,
    };

    match state.sessions.register(new_user).await {
        Ok(profile) => {
            HttpResponse::Ok().json(ApiResponse::success("User registered successfully", profile))
        }
        Err(error) => handle_domain_error(error),
    }
}
