use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;

use vs_api::app::create_app;
use vs_api::routes::AppState;
use vs_core::services::{
    CommentService, CredentialService, PlaylistService, SessionService, SubscriptionService,
    TokenService, VideoService,
};
use vs_infra::database::mysql::{
    MySqlCommentRepository, MySqlPlaylistRepository, MySqlSessionRepository,
    MySqlSubscriptionRepository, MySqlUserRepository, MySqlVideoRepository,
};
use vs_infra::media::CloudMediaStorage;
use vs_infra::DatabasePool;
use vs_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting VidStream API server");

    // Load configuration
    let config = AppConfig::from_env();

    // Database connection pool
    let pool = DatabasePool::new(&config.database)
        .await
        .expect("Failed to connect to the database");

    // Repository implementations
    let users = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let session_records = Arc::new(MySqlSessionRepository::new(pool.get_pool().clone()));
    let videos = Arc::new(MySqlVideoRepository::new(pool.get_pool().clone()));
    let comments = Arc::new(MySqlCommentRepository::new(pool.get_pool().clone()));
    let playlists = Arc::new(MySqlPlaylistRepository::new(pool.get_pool().clone()));
    let subscriptions = Arc::new(MySqlSubscriptionRepository::new(pool.get_pool().clone()));
    let media = Arc::new(CloudMediaStorage::new(config.media.clone()));

    // A missing signing secret is fatal at startup, not at request time
    let tokens = Arc::new(
        TokenService::new(config.auth.jwt.clone().into())
            .expect("JWT signing secrets must be configured"),
    );

    // Services
    let session_service = Arc::new(SessionService::new(
        CredentialService::new(Arc::clone(&users)),
        Arc::clone(&session_records),
        Arc::clone(&tokens),
    ));
    let video_service = Arc::new(VideoService::new(
        Arc::clone(&videos),
        Arc::clone(&users),
        Arc::clone(&media),
    ));
    let comment_service = Arc::new(CommentService::new(
        Arc::clone(&comments),
        Arc::clone(&videos),
    ));
    let playlist_service = Arc::new(PlaylistService::new(
        Arc::clone(&playlists),
        Arc::clone(&videos),
    ));
    let subscription_service = Arc::new(SubscriptionService::new(
        Arc::clone(&subscriptions),
        Arc::clone(&users),
    ));

    let state = web::Data::new(AppState {
        sessions: session_service,
        videos: video_service,
        comments: comment_service,
        playlists: playlist_service,
        subscriptions: subscription_service,
        media,
        tokens,
        cookies: config.auth.cookie.clone(),
    });

    let server_config = config.server.clone();
    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(state.clone(), &server_config))
        .bind(&bind_address)?
        .run()
        .await
}
