//! Session lifecycle: login, refresh rotation, logout, password change

pub mod service;

#[cfg(test)]
mod tests;

pub use service::SessionService;
