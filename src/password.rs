use crate::error::AuthError;

/// Hash a plaintext password with bcrypt.
///
/// A fresh salt is drawn on every call, so hashing the same password twice
/// yields different strings; only [`verify_password`] can compare them.
pub fn hash_password(password: &str, cost: u32) -> Result<String, AuthError> {
    bcrypt::hash(password, cost)
        .map_err(|e| AuthError::Internal(format!("Failed to hash password: {}", e)))
}

/// Verify a plaintext password against a stored bcrypt hash.
///
/// A malformed stored hash counts as a mismatch — this never fails, it
/// answers yes or no.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}
