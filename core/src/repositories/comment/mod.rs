//! Comment repository interface and mock implementation

pub mod mock;
pub mod repository;

pub use mock::MockCommentRepository;
pub use repository::{CommentQuery, CommentRepository, SortOrder};
