//! Response shaping helpers

pub mod error_handler;
