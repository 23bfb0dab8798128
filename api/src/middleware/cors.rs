//! CORS configuration for the browser client

use actix_cors::Cors;
use actix_web::http::header;

/// Build the CORS middleware from the configured origin
///
/// Credentials are allowed because tokens travel in cookies.
pub fn create_cors(origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(origin)
        .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
