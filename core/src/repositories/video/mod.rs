//! Video repository interface and mock implementation

pub mod mock;
pub mod repository;

pub use mock::MockVideoRepository;
pub use repository::{VideoQuery, VideoRepository};
