use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Access token claims.
///
/// The claim set is closed: a token carrying fields outside this struct
/// fails verification instead of being accepted loosely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccessClaims {
    /// Subject (user ID)
    pub sub: i32,
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Refresh token claims. Same mechanism as [`AccessClaims`], signed with
/// its own secret, plus the user's token version for logout-everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RefreshClaims {
    pub sub: i32,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_version: Option<i64>,
    pub iat: i64,
    pub exp: i64,
}

/// Mint a signed access token (HS256).
pub fn mint_access_token(
    user_id: i32,
    email: &str,
    secret: &str,
    ttl_secs: i64,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = AccessClaims {
        sub: user_id,
        email: email.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::seconds(ttl_secs)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::Internal(format!("Failed to mint access token: {}", e)))
}

/// Verify an access token and return its claims.
///
/// An expired token always reports [`AuthError::TokenExpired`]; every other
/// defect (bad signature, malformed structure, unknown claims) reports
/// [`AuthError::TokenInvalid`]. There is no leniency for mis-signed tokens.
pub fn verify_access_token(token: &str, secret: &str) -> Result<AccessClaims, AuthError> {
    decode::<AccessClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation(),
    )
    .map(|data| data.claims)
    .map_err(map_jwt_error)
}

/// Mint a signed refresh token (HS256, distinct secret from access tokens).
pub fn mint_refresh_token(
    user_id: i32,
    email: &str,
    token_version: Option<i64>,
    secret: &str,
    ttl_secs: i64,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = RefreshClaims {
        sub: user_id,
        email: email.to_string(),
        token_version,
        iat: now.timestamp(),
        exp: (now + Duration::seconds(ttl_secs)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::Internal(format!("Failed to mint refresh token: {}", e)))
}

/// Verify a refresh token and return its claims. Same error semantics as
/// [`verify_access_token`].
pub fn verify_refresh_token(token: &str, secret: &str) -> Result<RefreshClaims, AuthError> {
    decode::<RefreshClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation(),
    )
    .map(|data| data.claims)
    .map_err(map_jwt_error)
}

fn validation() -> Validation {
    let mut validation = Validation::default();
    // Token windows are exact; the default 60s leeway would let an expired
    // token pass.
    validation.leeway = 0;
    validation
}

fn map_jwt_error(e: jsonwebtoken::errors::Error) -> AuthError {
    match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::TokenInvalid,
    }
}
