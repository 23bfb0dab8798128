//! User and authentication route handlers
//!
//! Covers registration, the session lifecycle (login, refresh, logout,
//! password change) and account endpoints. Login and refresh deliver the
//! token pair both as HttpOnly cookies and in the response body; logout
//! clears the cookies.

pub mod account;
pub mod change_password;
pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;

use actix_web::cookie::{time::Duration, Cookie, SameSite};

use vs_shared::config::CookieConfig;

fn same_site(config: &CookieConfig) -> SameSite {
    match config.same_site.to_ascii_lowercase().as_str() {
        "strict" => SameSite::Strict,
        "none" => SameSite::None,
        _ => SameSite::Lax,
    }
}

/// Build a credential cookie: HttpOnly, never readable by scripts
pub(crate) fn credential_cookie(
    config: &CookieConfig,
    name: &str,
    value: &str,
    max_age_secs: i64,
) -> Cookie<'static> {
    Cookie::build(name.to_string(), value.to_string())
        .path("/")
        .http_only(true)
        .secure(config.secure)
        .same_site(same_site(config))
        .max_age(Duration::seconds(max_age_secs))
        .finish()
}

/// Build an expired cookie that instructs the client to drop the credential
pub(crate) fn removal_cookie(config: &CookieConfig, name: &str) -> Cookie<'static> {
    Cookie::build(name.to_string(), String::new())
        .path("/")
        .http_only(true)
        .secure(config.secure)
        .same_site(same_site(config))
        .max_age(Duration::ZERO)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_cookie_is_http_only() {
        let config = CookieConfig::default();
        let cookie = credential_cookie(&config, "access_token", "abc", 900);

        assert_eq!(cookie.name(), "access_token");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(900)));
    }

    #[test]
    fn test_removal_cookie_expires_immediately() {
        let config = CookieConfig::default();
        let cookie = removal_cookie(&config, "refresh_token");

        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}
