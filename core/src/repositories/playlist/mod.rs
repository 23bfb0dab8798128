//! Playlist repository interface and mock implementation

pub mod mock;
pub mod repository;

pub use mock::MockPlaylistRepository;
pub use repository::PlaylistRepository;
