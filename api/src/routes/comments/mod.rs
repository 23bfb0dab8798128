//! Comment route handlers

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::dto::comment_dto::{AddCommentRequest, ListCommentsQuery, UpdateCommentRequest};
use crate::handlers::error_handler::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use vs_core::errors::DomainError;
use vs_core::repositories::{
    CommentQuery, CommentRepository, PlaylistRepository, SessionRepository, SortOrder,
    SubscriptionRepository, UserRepository, VideoRepository,
};
use vs_core::services::media::MediaStorage;
use vs_shared::types::pagination::PageParams;
use vs_shared::types::response::ApiResponse;

/// POST /api/v1/comments: add a comment to a video
pub async fn add_comment<U, S, V, C, P, B, M>(
    state: web::Data<AppState<U, S, V, C, P, B, M>>,
    auth: AuthContext,
    request: web::Json<AddCommentRequest>,
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
        .comments
        .add(auth.user_id, request.video_id, &request.content)
        .await
    {
        Ok(comment) => {
            HttpResponse::Ok().json(ApiResponse::success("Comment added successfully", comment))
        }
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/v1/comments: paginated, sorted listing
pub async fn list_comments<U, S, V, C, P, B, M>(
    state: web::Data<AppState<U, S, V, C, P, B, M>>,
    query: web::Query<ListCommentsQuery>,
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

    let sort = match query.sort_type.as_deref() {
        None | Some("DESC") => SortOrder::Desc,
        Some("ASC") => SortOrder::Asc,
        Some(_) => {
            return handle_domain_error(DomainError::bad_request(
                "sort_type must be 'ASC' or 'DESC'",
            ))
        }
    };

    let comment_query = CommentQuery {
        video_id: query.video_id,
        author_id: query.author_id,
        sort,
        page: PageParams {
            page: query.page.unwrap_or(1),
            limit: query.limit.unwrap_or(PageParams::default().limit),
        },
    };

    match state.comments.list(comment_query).await {
        Ok(page) => {
            HttpResponse::Ok().json(ApiResponse::success("Comments fetched successfully", page))
        }
        Err(error) => handle_domain_error(error),
    }
}

/// PATCH /api/v1/comments/{id}: author-only edit
pub async fn update_comment<U, S, V, C, P, B, M>(
    state: web::Data<AppState<U, S, V, C, P, B, M>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<UpdateCommentRequest>,
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
        .comments
        .edit(auth.user_id, path.into_inner(), &request.content)
        .await
    {
        Ok(comment) => {
            HttpResponse::Ok().json(ApiResponse::success("Comment updated successfully", comment))
        }
        Err(error) => handle_domain_error(error),
    }
}

/// DELETE /api/v1/comments/{id}: author-only removal
pub async fn remove_comment<U, S, V, C, P, B, M>(
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
    match state.comments.remove(auth.user_id, path.into_inner()).await {
        Ok(comment) => {
            HttpResponse::Ok().json(ApiResponse::success("Comment removed successfully", comment))
        }
        Err(error) => handle_domain_error(error),
    }
}
