//! Value objects passed across service boundaries

pub mod auth_response;
pub mod new_user;

pub use auth_response::AuthResponse;
pub use new_user::NewUser;
