//! Session record repository interface and mock implementation

pub mod mock;
pub mod repository;

pub use mock::MockSessionRepository;
pub use repository::SessionRepository;
