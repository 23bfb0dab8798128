//! Playlist route handlers

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::dto::playlist_dto::{AddPlaylistVideoRequest, CreatePlaylistRequest};
use crate::handlers::error_handler::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use vs_core::repositories::{
    CommentRepository, PlaylistRepository, SessionRepository, SubscriptionRepository,
    UserRepository, VideoRepository,
};
use vs_core::services::media::MediaStorage;
use vs_shared::types::response::ApiResponse;

/// POST /api/v1/playlists: create a playlist
pub async fn create_playlist<U, S, V, C, P, B, M>(
    state: web::Data<AppState<U, S, V, C, P, B, M>>,
    auth: AuthContext,
    request: web::Json<CreatePlaylistRequest>,
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
        .playlists
        .create(auth.user_id, &request.name, &request.description)
        .await
    {
        Ok(playlist) => {
            HttpResponse::Ok().json(ApiResponse::success("Playlist created successfully", playlist))
        }
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/v1/playlists/{id}
pub async fn get_playlist<U, S, V, C, P, B, M>(
    state: web::Data<AppState<U, S, V, C, P, B, M>>,
    path: web::Path<Uuid>,
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
    match state.playlists.get(path.into_inner()).await {
        Ok(playlist) => {
            HttpResponse::Ok().json(ApiResponse::success("Playlist fetched successfully", playlist))
        }
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/v1/playlists/mine: playlists owned by the current user
pub async fn my_playlists<U, S, V, C, P, B, M>(
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
    match state.playlists.list_by_owner(auth.user_id).await {
        Ok(playlists) => {
            HttpResponse::Ok().json(ApiResponse::success("Playlists fetched successfully", playlists))
        }
        Err(error) => handle_domain_error(error),
    }
}

/// POST /api/v1/playlists/{id}/videos: owner-only, duplicates rejected
pub async fn add_video<U, S, V, C, P, B, M>(
    state: web::Data<AppState<U, S, V, C, P, B, M>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<AddPlaylistVideoRequest>,
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
    match state
        .playlists
        .add_video(auth.user_id, path.into_inner(), request.video_id)
        .await
    {
        Ok(playlist) => HttpResponse::Ok().json(ApiResponse::success(
            "Video added to playlist successfully",
            playlist,
        )),
        Err(error) => handle_domain_error(error),
    }
}

/// DELETE /api/v1/playlists/{id}/videos/{video_id}: owner-only
pub async fn remove_video<U, S, V, C, P, B, M>(
    state: web::Data<AppState<U, S, V, C, P, B, M>>,
    auth: AuthContext,
    path: web::Path<(Uuid, Uuid)>,
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
    let (playlist_id, video_id) = path.into_inner();
    match state
        .playlists
        .remove_video(auth.user_id, playlist_id, video_id)
        .await
    {
        Ok(playlist) => HttpResponse::Ok().json(ApiResponse::success(
            "Video removed from playlist successfully",
            playlist,
        )),
        Err(error) => handle_domain_error(error),
    }
}

/// DELETE /api/v1/playlists/{id}: owner-only removal
pub async fn delete_playlist<U, S, V, C, P, B, M>(
    state: web::Data<AppState<U, S, V, C, P, B, M>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
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
    match state.playlists.remove(auth.user_id, path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::message_only(
            "Playlist deleted successfully",
        )),
        Err(error) => handle_domain_error(error),
    }
}
