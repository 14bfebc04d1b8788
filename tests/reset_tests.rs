use chrono::{Duration, Utc};
use verso_auth::reset::{generate_reset_token, hash_token, is_reset_token_valid};

#[test]
fn test_token_is_256_bits_hex() {
    let (token, _) = generate_reset_token(3_600);

    // 32 bytes hex-encoded
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_consecutive_tokens_differ() {
    let (token1, _) = generate_reset_token(3_600);
    let (token2, _) = generate_reset_token(3_600);

    assert_ne!(token1, token2);
}

#[test]
fn test_expiry_is_ttl_from_now() {
    let before = Utc::now();
    let (_, expires_at) = generate_reset_token(3_600);
    let after = Utc::now();

    assert!(expires_at >= before + Duration::seconds(3_600));
    assert!(expires_at <= after + Duration::seconds(3_600));
}

#[test]
fn test_missing_expiry_is_invalid() {
    assert!(!is_reset_token_valid(None));
}

#[test]
fn test_future_expiry_is_valid() {
    assert!(is_reset_token_valid(Some(Utc::now() + Duration::hours(1))));
}

#[test]
fn test_past_expiry_is_invalid() {
    assert!(!is_reset_token_valid(Some(Utc::now() - Duration::seconds(1))));
    assert!(!is_reset_token_valid(Some(Utc::now() - Duration::hours(2))));
}

#[test]
fn test_hash_token_is_deterministic() {
    let (token, _) = generate_reset_token(3_600);

    let hash1 = hash_token(&token);
    let hash2 = hash_token(&token);

    assert_eq!(hash1, hash2);
    assert_ne!(hash1, token);
    // SHA-256 hex digest
    assert_eq!(hash1.len(), 64);
}

#[test]
fn test_hash_token_differs_per_token() {
    let (token1, _) = generate_reset_token(3_600);
    let (token2, _) = generate_reset_token(3_600);

    assert_ne!(hash_token(&token1), hash_token(&token2));
}
