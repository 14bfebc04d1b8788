use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// A persisted user record, as the store collaborator returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i32,

    pub email: String,

    /// bcrypt hash; `None` for accounts created through federated login.
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,

    /// Bumped on logout-everywhere; embedded in refresh token claims.
    pub token_version: i64,

    /// SHA-256 hash of the outstanding reset token, if any. At most one
    /// live reset token exists per user.
    #[serde(skip_serializing)]
    pub reset_token_hash: Option<String>,

    pub reset_token_expires_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
}

/// Contract for the persistent user store.
///
/// The credential core performs no I/O of its own; everything durable goes
/// through this trait. Implementations map their own failures into
/// [`AuthError::Store`].
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<UserRecord>, AuthError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AuthError>;

    /// Look up the user holding this reset-token hash.
    async fn find_by_reset_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<UserRecord>, AuthError>;

    /// Insert a new user. Fails with [`AuthError::EmailTaken`] if the email
    /// is already registered.
    async fn create_user(
        &self,
        email: &str,
        password_hash: Option<String>,
    ) -> Result<UserRecord, AuthError>;

    /// Store a reset-token hash and expiry, overwriting any outstanding
    /// pair.
    async fn set_reset_token(
        &self,
        user_id: i32,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AuthError>;

    /// Clear the reset-token fields without touching the password.
    async fn clear_reset_token(&self, user_id: i32) -> Result<(), AuthError>;

    /// Set a new password hash and clear the reset-token fields in one
    /// atomic update. Two concurrent resets must not both succeed, and a
    /// half-applied update must not leave a live token behind a changed
    /// password.
    async fn update_password_and_clear_reset_token(
        &self,
        user_id: i32,
        password_hash: &str,
    ) -> Result<(), AuthError>;

    /// Increment the user's token version, invalidating every outstanding
    /// refresh token at its next rotation. Returns the new version.
    async fn bump_token_version(&self, user_id: i32) -> Result<i64, AuthError>;
}
