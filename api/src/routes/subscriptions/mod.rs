//! Subscription route handlers

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::dto::subscription_dto::{SubscriberCountResponse, ToggleSubscriptionRequest};
use crate::handlers::error_handler::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use vs_core::repositories::{
    CommentRepository, PlaylistRepository, SessionRepository, SubscriptionRepository,
    UserRepository, VideoRepository,
};
use vs_core::services::media::MediaStorage;
use vs_shared::types::response::ApiResponse;

/// POST /api/v1/subscriptions/toggle: subscribe or unsubscribe
pub async fn toggle<U, S, V, C, P, B, M>(
    state: web::Data<AppState<U, S, V, C, P, B, M>>,
    auth: AuthContext,
    request: web::Json<ToggleSubscriptionRequest>,
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
        .subscriptions
        .toggle(auth.user_id, request.channel_id)
        .await
    {
        Ok(status) => {
            let message = if status.subscribed {
                "Subscribed successfully"
            } else {
                "Unsubscribed successfully"
            };
            HttpResponse::Ok().json(ApiResponse::success(message, status))
        }
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/v1/subscriptions/count/{channel_id}: subscriber count
pub async fn subscriber_count<U, S, V, C, P, B, M>(
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
    let channel_id = path.into_inner();
    match state.subscriptions.subscriber_count(channel_id).await {
        Ok(subscribers) => HttpResponse::Ok().json(ApiResponse::success(
            "Subscriber count fetched successfully",
            SubscriberCountResponse {
                channel_id,
                subscribers,
            },
        )),
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/v1/subscriptions/channels: channels the user subscribes to
pub async fn subscribed_channels<U, S, V, C, P, B, M>(
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
    match state.subscriptions.subscribed_channels(auth.user_id).await {
        Ok(channels) => HttpResponse::Ok().json(ApiResponse::success(
            "Subscribed channels fetched successfully",
            channels,
        )),
        Err(error) => handle_domain_error(error),
    }
}
