//! MySQL implementations of the core repository traits

pub mod comment_repository_impl;
pub mod playlist_repository_impl;
pub mod session_repository_impl;
pub mod subscription_repository_impl;
pub mod user_repository_impl;
pub mod video_repository_impl;

pub use comment_repository_impl::MySqlCommentRepository;
pub use playlist_repository_impl::MySqlPlaylistRepository;
pub use session_repository_impl::MySqlSessionRepository;
pub use subscription_repository_impl::MySqlSubscriptionRepository;
pub use user_repository_impl::MySqlUserRepository;
pub use video_repository_impl::MySqlVideoRepository;

/// True when a SQLx error is a unique-index violation (SQLSTATE 23000)
pub(crate) fn is_duplicate_entry(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23000"),
        _ => false,
    }
}
