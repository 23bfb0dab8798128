//! Application factory
//!
//! Builds the actix-web application with middleware, routes, and shared
//! state. Protected routes are wrapped with the JWT authentication gate.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::auth::JwtAuth;
use crate::middleware::cors::create_cors;
use crate::routes::users::{
    account::{current_user, delete_account, list_users, update_account, watch_history},
    change_password::change_password,
    login::login,
    logout::logout,
    refresh::refresh,
    register::register,
};
use crate::routes::{comments, playlists, subscriptions, videos, AppState};

use vs_core::repositories::{
    CommentRepository, PlaylistRepository, SessionRepository, SubscriptionRepository,
    UserRepository, VideoRepository,
};
use vs_core::services::media::MediaStorage;
use vs_shared::config::ServerConfig;

/// Create and configure the application with all dependencies
pub fn create_app<U, S, V, C, P, B, M>(
    app_state: web::Data<AppState<U, S, V, C, P, B, M>>,
    server: &ServerConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    S: SessionRepository + 'static,
    V: VideoRepository + 'static,
    C: CommentRepository + 'static,
    P: PlaylistRepository + 'static,
    B: SubscriptionRepository + 'static,
    M: MediaStorage + 'static,
{
    let cors = create_cors(&server.cors_origin);

    // One gate instance per protected route.
    let auth = {
        let tokens = Arc::clone(&app_state.tokens);
        let cookie_name = app_state.cookies.access_cookie_name.clone();
        move || JwtAuth::new(Arc::clone(&tokens), cookie_name.clone())
    };

    App::new()
        .app_data(app_state.clone())
        .app_data(web::JsonConfig::default().limit(server.json_limit_bytes))
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/users")
                        .route("/register", web::post().to(register::<U, S, V, C, P, B, M>))
                        .route("/login", web::post().to(login::<U, S, V, C, P, B, M>))
                        .route(
                            "/refresh-token",
                            web::post().to(refresh::<U, S, V, C, P, B, M>),
                        )
                        .route(
                            "/logout",
                            web::post().to(logout::<U, S, V, C, P, B, M>).wrap(auth()),
                        )
                        .route(
                            "/change-password",
                            web::patch()
                                .to(change_password::<U, S, V, C, P, B, M>)
                                .wrap(auth()),
                        )
                        .route(
                            "/current",
                            web::get()
                                .to(current_user::<U, S, V, C, P, B, M>)
                                .wrap(auth()),
                        )
                        .route(
                            "/update-account",
                            web::patch()
                                .to(update_account::<U, S, V, C, P, B, M>)
                                .wrap(auth()),
                        )
                        .route(
                            "/watch-history",
                            web::get()
                                .to(watch_history::<U, S, V, C, P, B, M>)
                                .wrap(auth()),
                        )
                        .route("/get-all", web::get().to(list_users::<U, S, V, C, P, B, M>))
                        .route(
                            "/delete",
                            web::delete()
                                .to(delete_account::<U, S, V, C, P, B, M>)
                                .wrap(auth()),
                        ),
                )
                .service(
                    web::scope("/videos")
                        .route(
                            "",
                            web::post()
                                .to(videos::publish::<U, S, V, C, P, B, M>)
                                .wrap(auth()),
                        )
                        .route("", web::get().to(videos::list_videos::<U, S, V, C, P, B, M>))
                        .route(
                            "/{id}",
                            web::get().to(videos::get_video::<U, S, V, C, P, B, M>),
                        )
                        .route(
                            "/{id}/watch",
                            web::post()
                                .to(videos::watch::<U, S, V, C, P, B, M>)
                                .wrap(auth()),
                        )
                        .route(
                            "/{id}/publish",
                            web::patch()
                                .to(videos::set_published::<U, S, V, C, P, B, M>)
                                .wrap(auth()),
                        )
                        .route(
                            "/{id}",
                            web::delete()
                                .to(videos::delete_video::<U, S, V, C, P, B, M>)
                                .wrap(auth()),
                        ),
                )
                .service(
                    web::scope("/comments")
                        .route(
                            "",
                            web::post()
                                .to(comments::add_comment::<U, S, V, C, P, B, M>)
                                .wrap(auth()),
                        )
                        .route(
                            "",
                            web::get().to(comments::list_comments::<U, S, V, C, P, B, M>),
                        )
                        .route(
                            "/{id}",
                            web::patch()
                                .to(comments::update_comment::<U, S, V, C, P, B, M>)
                                .wrap(auth()),
                        )
                        .route(
                            "/{id}",
                            web::delete()
                                .to(comments::remove_comment::<U, S, V, C, P, B, M>)
                                .wrap(auth()),
                        ),
                )
                .service(
                    web::scope("/playlists")
                        .route(
                            "",
                            web::post()
                                .to(playlists::create_playlist::<U, S, V, C, P, B, M>)
                                .wrap(auth()),
                        )
                        .route(
                            "/mine",
                            web::get()
                                .to(playlists::my_playlists::<U, S, V, C, P, B, M>)
                                .wrap(auth()),
                        )
                        .route(
                            "/{id}",
                            web::get().to(playlists::get_playlist::<U, S, V, C, P, B, M>),
                        )
                        .route(
                            "/{id}/videos",
                            web::post()
                                .to(playlists::add_video::<U, S, V, C, P, B, M>)
                                .wrap(auth()),
                        )
                        .route(
                            "/{id}/videos/{video_id}",
                            web::delete()
                                .to(playlists::remove_video::<U, S, V, C, P, B, M>)
                                .wrap(auth()),
                        )
                        .route(
                            "/{id}",
                            web::delete()
                                .to(playlists::delete_playlist::<U, S, V, C, P, B, M>)
                                .wrap(auth()),
                        ),
                )
                .service(
                    web::scope("/subscriptions")
                        .route(
                            "/toggle",
                            web::post()
                                .to(subscriptions::toggle::<U, S, V, C, P, B, M>)
                                .wrap(auth()),
                        )
                        .route(
                            "/channels",
                            web::get()
                                .to(subscriptions::subscribed_channels::<U, S, V, C, P, B, M>)
                                .wrap(auth()),
                        )
                        .route(
                            "/count/{channel_id}",
                            web::get().to(subscriptions::subscriber_count::<U, S, V, C, P, B, M>),
                        ),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "vidstream-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "success": false,
        "message": "The requested resource was not found"
    }))
}
