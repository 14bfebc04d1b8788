use serde::Deserialize;

use crate::error::AuthError;

/// Credential and token configuration, handed to [`crate::SessionManager`]
/// at construction time. The core holds no ambient global state; everything
/// it needs to mint, verify, and hash lives here.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret for access tokens.
    pub access_secret: String,

    /// HMAC secret for refresh tokens. Must differ from `access_secret` so
    /// compromise of one signing key does not compromise the other.
    pub refresh_secret: String,

    /// Access token lifetime in seconds (default: 900 = 15 minutes).
    pub access_ttl_secs: i64,

    /// Refresh token lifetime in seconds (default: 604800 = 7 days).
    pub refresh_ttl_secs: i64,

    /// Password-reset token lifetime in seconds (default: 3600 = 1 hour).
    pub reset_token_ttl_secs: i64,

    /// bcrypt cost factor (default: 10).
    pub hash_cost: u32,

    /// Minimum accepted password length (default: 6).
    pub min_password_length: usize,
}

impl AuthConfig {
    /// Load configuration from environment variables (with .env support).
    pub fn from_env() -> Result<Self, AuthError> {
        // Load .env file if present (ignore errors if missing)
        let _ = dotenvy::dotenv();

        let config = AuthConfig {
            access_secret: std::env::var("ACCESS_TOKEN_SECRET")
                .unwrap_or_else(|_| "verso-dev-access-secret-change-me".to_string()),
            refresh_secret: std::env::var("REFRESH_TOKEN_SECRET")
                .unwrap_or_else(|_| "verso-dev-refresh-secret-change-me".to_string()),
            access_ttl_secs: env_parse("ACCESS_TOKEN_TTL_SECS", 900),
            refresh_ttl_secs: env_parse("REFRESH_TOKEN_TTL_SECS", 604_800),
            reset_token_ttl_secs: env_parse("RESET_TOKEN_TTL_SECS", 3_600),
            hash_cost: env_parse("PASSWORD_HASH_COST", 10),
            min_password_length: env_parse("MIN_PASSWORD_LENGTH", 6),
        };

        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the token scheme depends on.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.access_secret.is_empty() || self.refresh_secret.is_empty() {
            return Err(AuthError::Config(
                "token secrets must not be empty".to_string(),
            ));
        }
        if self.access_secret == self.refresh_secret {
            return Err(AuthError::Config(
                "access and refresh tokens must use distinct secrets".to_string(),
            ));
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
