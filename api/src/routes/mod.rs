//! Route handlers and shared application state

pub mod comments;
pub mod playlists;
pub mod subscriptions;
pub mod users;
pub mod videos;

use std::sync::Arc;

use vs_core::repositories::{
    CommentRepository, PlaylistRepository, SessionRepository, SubscriptionRepository,
    UserRepository, VideoRepository,
};
use vs_core::services::media::MediaStorage;
use vs_core::services::token::TokenService;
use vs_core::services::{
    CommentService, PlaylistService, SessionService, SubscriptionService, VideoService,
};
use vs_shared::config::CookieConfig;

/// Application state holding the shared services
pub struct AppState<U, S, V, C, P, B, M>
where
    U: UserRepository,
    S: SessionRepository,
    V: VideoRepository,
    C: CommentRepository,
    P: PlaylistRepository,
    B: SubscriptionRepository,
    M: MediaStorage,
{
    pub sessions: Arc<SessionService<U, S>>,
    pub videos: Arc<VideoService<V, U, M>>,
    pub comments: Arc<CommentService<C, V>>,
    pub playlists: Arc<PlaylistService<P, V>>,
    pub subscriptions: Arc<SubscriptionService<B, U>>,
    pub media: Arc<M>,
    pub tokens: Arc<TokenService>,
    pub cookies: CookieConfig,
}
