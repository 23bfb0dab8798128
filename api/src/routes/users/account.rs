//! Account endpoints: current user, account update, watch history,
//! user listing, account deletion.

use actix_web::{web, HttpResponse};

use crate::dto::auth_dto::UpdateAccountRequest;
use crate::handlers::error_handler::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::users::removal_cookie;
use crate::routes::AppState;

use vs_core::repositories::{
    CommentRepository, PlaylistRepository, SessionRepository, SubscriptionRepository,
    UserRepository, VideoRepository,
};
use vs_core::services::media::MediaStorage;
use vs_shared::types::pagination::PageParams;
use vs_shared::types::response::ApiResponse;

/// GET /api/v1/users/current: the authenticated user's profile
pub async fn current_user<U, S, V, C, P, B, M>(
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
    match state.sessions.current_user(auth.user_id).await {
        Ok(profile) => {
            HttpResponse::Ok().json(ApiResponse::success("Current user fetched successfully", profile))
        }
        Err(error) => handle_domain_error(error),
    }
}

/// PATCH /api/v1/users/update-account: display name and/or email
pub async fn update_account<U, S, V, C, P, B, M>(
    state: web::Data<AppState<U, S, V, C, P, B, M>>,
    auth: AuthContext,
    request: web::Json<UpdateAccountRequest>,
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
    let request = request.into_inner();
    match state
        .sessions
        .credentials()
        .update_account(auth.user_id, request.full_name, request.email)
        .await
    {
        Ok(profile) => {
            HttpResponse::Ok().json(ApiResponse::success("Account updated successfully", profile))
        }
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/v1/users/watch-history: videos the user has watched
pub async fn watch_history<U, S, V, C, P, B, M>(
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
    match state.videos.watch_history(auth.user_id).await {
        Ok(videos) => {
            HttpResponse::Ok().json(ApiResponse::success("Watch history fetched successfully", videos))
        }
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/v1/users/get-all: paginated public profile listing
pub async fn list_users<U, S, V, C, P, B, M>(
    state: web::Data<AppState<U, S, V, C, P, B, M>>,
    query: web::Query<PageParams>,
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
    let params = query.into_inner();
    if !params.is_valid() {
        return handle_domain_error(vs_core::errors::DomainError::bad_request(
            "page and limit must be positive integers",
        ));
    }

    match state
        .sessions
        .credentials()
        .list_profiles(params.limit, params.offset())
        .await
    {
        Ok(profiles) => {
            HttpResponse::Ok().json(ApiResponse::success("Users fetched successfully", profiles))
        }
        Err(error) => handle_domain_error(error),
    }
}

/// DELETE /api/v1/users/delete: remove the authenticated account
pub async fn delete_account<U, S, V, C, P, B, M>(
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
    // Revoke the session first so the refresh token dies with the account.
    if let Err(error) = state.sessions.logout(auth.user_id).await {
        return handle_domain_error(error);
    }

    match state.sessions.credentials().remove(auth.user_id).await {
        Ok(()) => HttpResponse::Ok()
            .cookie(removal_cookie(
                &state.cookies,
                &state.cookies.access_cookie_name,
            ))
            .cookie(removal_cookie(
                &state.cookies,
                &state.cookies.refresh_cookie_name,
            ))
            .json(ApiResponse::<()>::message_only("User deleted successfully")),
        Err(error) => handle_domain_error(error),
    }
}
