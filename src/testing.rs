//! Test support: an in-memory [`UserStore`].

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::AuthError;
use crate::store::{UserRecord, UserStore};

/// In-memory user store for tests and examples.
///
/// Implements the collaborator contract exactly, including the atomic
/// password-update-plus-token-clear: under the single mutex no other call
/// observes a half-applied state.
#[derive(Default)]
pub struct MemoryUserStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    users: HashMap<i32, UserRecord>,
    next_id: i32,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<UserRecord>, AuthError> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        Ok(inner.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AuthError> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        Ok(inner.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_reset_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<UserRecord>, AuthError> {
        let inner = self.inner.lock().expect("store mutex poisoned");
        Ok(inner
            .users
            .values()
            .find(|u| u.reset_token_hash.as_deref() == Some(token_hash))
            .cloned())
    }

    async fn create_user(
        &self,
        email: &str,
        password_hash: Option<String>,
    ) -> Result<UserRecord, AuthError> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");

        if inner.users.values().any(|u| u.email == email) {
            return Err(AuthError::EmailTaken);
        }

        inner.next_id += 1;
        let user = UserRecord {
            id: inner.next_id,
            email: email.to_string(),
            password_hash,
            token_version: 0,
            reset_token_hash: None,
            reset_token_expires_at: None,
            created_at: Utc::now(),
        };
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn set_reset_token(
        &self,
        user_id: i32,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AuthError> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        let user = inner
            .users
            .get_mut(&user_id)
            .ok_or_else(|| AuthError::Store(format!("no user {}", user_id)))?;
        user.reset_token_hash = Some(token_hash.to_string());
        user.reset_token_expires_at = Some(expires_at);
        Ok(())
    }

    async fn clear_reset_token(&self, user_id: i32) -> Result<(), AuthError> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        let user = inner
            .users
            .get_mut(&user_id)
            .ok_or_else(|| AuthError::Store(format!("no user {}", user_id)))?;
        user.reset_token_hash = None;
        user.reset_token_expires_at = None;
        Ok(())
    }

    async fn update_password_and_clear_reset_token(
        &self,
        user_id: i32,
        password_hash: &str,
    ) -> Result<(), AuthError> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        let user = inner
            .users
            .get_mut(&user_id)
            .ok_or_else(|| AuthError::Store(format!("no user {}", user_id)))?;
        user.password_hash = Some(password_hash.to_string());
        user.reset_token_hash = None;
        user.reset_token_expires_at = None;
        Ok(())
    }

    async fn bump_token_version(&self, user_id: i32) -> Result<i64, AuthError> {
        let mut inner = self.inner.lock().expect("store mutex poisoned");
        let user = inner
            .users
            .get_mut(&user_id)
            .ok_or_else(|| AuthError::Store(format!("no user {}", user_id)))?;
        user.token_version += 1;
        Ok(user.token_version)
    }
}
