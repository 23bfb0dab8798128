//! User repository interface and mock implementation

pub mod mock;
pub mod repository;

pub use mock::MockUserRepository;
pub use repository::UserRepository;
