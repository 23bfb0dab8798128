//! Business services

pub mod comment;
pub mod credential;
pub mod media;
pub mod playlist;
pub mod session;
pub mod subscription;
pub mod token;
pub mod video;

pub use comment::CommentService;
pub use credential::CredentialService;
pub use media::{MediaStorage, MockMediaStorage, UploadedMedia};
pub use playlist::PlaylistService;
pub use session::SessionService;
pub use subscription::SubscriptionService;
pub use token::{TokenService, TokenServiceConfig};
pub use video::VideoService;
