use cookie::SameSite;
use cookie::time::Duration;
use verso_auth::cookie::{REFRESH_COOKIE, clear_refresh_cookie, refresh_cookie};

#[test]
fn test_refresh_cookie_is_script_inaccessible() {
    let cookie = refresh_cookie("some-token", 604_800);

    assert_eq!(cookie.name(), REFRESH_COOKIE);
    assert_eq!(cookie.value(), "some-token");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Strict));
    assert_eq!(cookie.path(), Some("/"));
}

#[test]
fn test_refresh_cookie_max_age_matches_ttl() {
    let cookie = refresh_cookie("some-token", 604_800);
    assert_eq!(cookie.max_age(), Some(Duration::seconds(604_800)));
}

#[test]
fn test_clear_cookie_expires_immediately() {
    let cookie = clear_refresh_cookie();

    assert_eq!(cookie.name(), REFRESH_COOKIE);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Strict));
}
