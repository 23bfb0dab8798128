//! # VidStream Infrastructure
//!
//! Concrete implementations of the core repository and media storage
//! interfaces: MySQL persistence via SQLx and the HTTP client for the
//! third-party media host.

pub mod database;
pub mod media;

pub use database::connection::DatabasePool;
