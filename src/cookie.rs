//! Refresh-token cookie builders.
//!
//! The refresh token travels only on this channel, never in a response
//! body or script-readable storage. Access tokens take the opposite path:
//! response body, then `Authorization: Bearer` on subsequent calls.

use cookie::time::Duration;
use cookie::{Cookie, SameSite};

/// Cookie name for the refresh token.
pub const REFRESH_COOKIE: &str = "verso_refresh";

/// Build the http-only cookie carrying a refresh token. `max_age_secs`
/// should equal the refresh ttl from [`crate::AuthConfig`].
pub fn refresh_cookie(token: &str, max_age_secs: i64) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE, token.to_string()))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(Duration::seconds(max_age_secs))
        .build()
}

/// Build an expired cookie that clears the refresh token (logout).
pub fn clear_refresh_cookie() -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE, String::new()))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(Duration::ZERO)
        .build()
}
