use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use sha2::{Digest, Sha256};

/// Generate a password-reset token: 32 random bytes hex-encoded, plus its
/// expiry timestamp.
///
/// The raw token goes to the account's email; only its [`hash_token`]
/// digest belongs in the store.
pub fn generate_reset_token(ttl_secs: i64) -> (String, DateTime<Utc>) {
    let mut rng = rand::thread_rng();
    let mut bytes = [0u8; 32];
    rng.fill(&mut bytes[..]);

    let token = hex::encode(bytes);
    let expires_at = Utc::now() + Duration::seconds(ttl_secs);
    (token, expires_at)
}

/// SHA-256 hash a token for at-rest storage.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check a stored reset-token expiry.
///
/// A missing expiry is always invalid; an expiry equal to "now" has
/// already lapsed.
pub fn is_reset_token_valid(expires_at: Option<DateTime<Utc>>) -> bool {
    match expires_at {
        Some(expiry) => Utc::now() < expiry,
        None => false,
    }
}
