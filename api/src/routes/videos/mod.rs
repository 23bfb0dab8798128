//! Video route handlers

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::dto::video_dto::{ListVideosQuery, PublishVideoRequest, SetPublishedRequest};
use crate::handlers::error_handler::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use vs_core::repositories::{
    CommentRepository, PlaylistRepository, SessionRepository, SubscriptionRepository,
    UserRepository, VideoQuery, VideoRepository,
};
use vs_core::services::media::MediaStorage;
use vs_core::services::video::NewVideo;
use vs_shared::types::pagination::PageParams;
use vs_shared::types::response::ApiResponse;

/// POST /api/v1/videos: upload media + thumbnail, create the record
pub async fn publish<U, S, V, C, P, B, M>(
    state: web::Data<AppState<U, S, V, C, P, B, M>>,
    auth: AuthContext,
    request: web::Json<PublishVideoRequest>,
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

    let new_video = NewVideo {
        title: request.title,
        description: request.description,
        media_path: request.video_path,
        thumbnail_path: request.thumbnail_path,
    };

    match state.videos.publish(auth.user_id, new_video).await {
        Ok(video) => {
            HttpResponse::Ok().json(ApiResponse::success("Video uploaded successfully", video))
        }
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/v1/videos/{id}
pub async fn get_video<U, S, V, C, P, B, M>(
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
    match state.videos.get(path.into_inner()).await {
        Ok(video) => HttpResponse::Ok().json(ApiResponse::success(
            "Video information retrieved successfully",
            video,
        )),
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/v1/videos: paginated listing
pub async fn list_videos<U, S, V, C, P, B, M>(
    state: web::Data<AppState<U, S, V, C, P, B, M>>,
    query: web::Query<ListVideosQuery>,
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
    let query = query.into_inner();
    let video_query = VideoQuery {
        owner_id: query.owner_id,
        published_only: query.published.unwrap_or(false),
        page: PageParams {
            page: query.page.unwrap_or(1),
            limit: query.limit.unwrap_or(PageParams::default().limit),
        },
    };

    match state.videos.list(video_query).await {
        Ok(page) => HttpResponse::Ok().json(ApiResponse::success("Videos fetched successfully", page)),
        Err(error) => handle_domain_error(error),
    }
}

/// POST /api/v1/videos/{id}/watch: record a watch for the current user
pub async fn watch<U, S, V, C, P, B, M>(
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
    match state.videos.record_watch(auth.user_id, path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::message_only("Watch recorded")),
        Err(error) => handle_domain_error(error),
    }
}

/// PATCH /api/v1/videos/{id}/publish: owner-only visibility toggle
pub async fn set_published<U, S, V, C, P, B, M>(
    state: web::Data<AppState<U, S, V, C, P, B, M>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<SetPublishedRequest>,
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
        .videos
        .set_published(auth.user_id, path.into_inner(), request.published)
        .await
    {
        Ok(video) => {
            HttpResponse::Ok().json(ApiResponse::success("Video status updated successfully", video))
        }
        Err(error) => handle_domain_error(error),
    }
}

/// DELETE /api/v1/videos/{id}: owner-only removal
pub async fn delete_video<U, S, V, C, P, B, M>(
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
    match state.videos.remove(auth.user_id, path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::message_only(
            "Video deleted successfully",
        )),
        Err(error) => handle_domain_error(error),
    }
}
