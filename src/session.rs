use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::jwt::{
    AccessClaims, mint_access_token, mint_refresh_token, verify_access_token, verify_refresh_token,
};
use crate::password::{hash_password, verify_password};
use crate::reset::{generate_reset_token, hash_token, is_reset_token_valid};
use crate::store::{UserRecord, UserStore};

/// A freshly minted access/refresh pair.
///
/// The access token goes in the response body; the refresh token belongs
/// only in the http-only cookie built by [`crate::cookie::refresh_cookie`]
/// and is skipped when this struct is serialized.
#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    #[serde(skip_serializing)]
    pub refresh_token: String,
}

/// Result of a successful register / login / refresh: the user plus a new
/// token pair.
#[derive(Debug)]
pub struct AuthSession {
    pub user: UserRecord,
    pub tokens: TokenPair,
}

/// Outstanding reset token, for the mailer collaborator to deliver.
#[derive(Debug, Clone)]
pub struct ResetToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Orchestrates credential and token flows over a [`UserStore`].
///
/// Every cryptographic step is local and deterministic; the store is the
/// only collaborator reached from here.
pub struct SessionManager<S: UserStore> {
    config: AuthConfig,
    store: S,
}

impl<S: UserStore> SessionManager<S> {
    /// Create a manager. Fails if the config breaks a token invariant
    /// (empty or shared secrets).
    pub fn new(config: AuthConfig, store: S) -> Result<Self, AuthError> {
        config.validate()?;
        Ok(SessionManager { config, store })
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a new user with email + password.
    pub async fn register(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        self.check_password_policy(password)?;

        if self.store.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = hash_password(password, self.config.hash_cost)?;
        let user = self.store.create_user(email, Some(password_hash)).await?;
        info!(user_id = user.id, "registered new user");

        let tokens = self.issue_tokens(&user)?;
        Ok(AuthSession { user, tokens })
    }

    /// Authenticate with email + password.
    ///
    /// Unknown email, a passwordless federated account, and a wrong
    /// password are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let hash = user
            .password_hash
            .as_deref()
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, hash) {
            return Err(AuthError::InvalidCredentials);
        }

        let tokens = self.issue_tokens(&user)?;
        Ok(AuthSession { user, tokens })
    }

    /// Log in an identity already verified by the external identity
    /// provider. Creates the record on first sight, without a password.
    pub async fn login_federated(&self, email: &str) -> Result<AuthSession, AuthError> {
        let user = match self.store.find_by_email(email).await? {
            Some(user) => user,
            None => {
                let user = self.store.create_user(email, None).await?;
                info!(user_id = user.id, "created user from federated identity");
                user
            }
        };

        let tokens = self.issue_tokens(&user)?;
        Ok(AuthSession { user, tokens })
    }

    /// Mint a fresh access/refresh pair for a user.
    pub fn issue_tokens(&self, user: &UserRecord) -> Result<TokenPair, AuthError> {
        let access_token = mint_access_token(
            user.id,
            &user.email,
            &self.config.access_secret,
            self.config.access_ttl_secs,
        )?;
        let refresh_token = mint_refresh_token(
            user.id,
            &user.email,
            Some(user.token_version),
            &self.config.refresh_secret,
            self.config.refresh_ttl_secs,
        )?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Verify a bearer access token presented by the HTTP layer.
    pub fn verify_access(&self, token: &str) -> Result<AccessClaims, AuthError> {
        verify_access_token(token, &self.config.access_secret)
    }

    /// Exchange a refresh token for a brand-new access/refresh pair
    /// (rotation).
    ///
    /// Verification, user lookup, and the token-version check all gate the
    /// mint; a failure anywhere rejects the whole operation and persists
    /// nothing. The superseded token is not tracked server-side; the new
    /// cookie replaces it and its own expiry bounds the replay window.
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthSession, AuthError> {
        let claims = verify_refresh_token(refresh_token, &self.config.refresh_secret)?;

        let user = self
            .store
            .find_by_id(claims.sub)
            .await?
            .ok_or(AuthError::TokenInvalid)?;

        if claims.token_version.is_some_and(|v| v != user.token_version) {
            debug!(user_id = user.id, "refresh token version superseded");
            return Err(AuthError::TokenInvalid);
        }

        let tokens = self.issue_tokens(&user)?;
        Ok(AuthSession { user, tokens })
    }

    /// Issue a reset token for the account holding `email`, overwriting any
    /// outstanding token.
    ///
    /// Returns `None` for unknown emails; the boundary reports the same
    /// success either way to prevent enumeration.
    pub async fn request_password_reset(
        &self,
        email: &str,
    ) -> Result<Option<ResetToken>, AuthError> {
        let Some(user) = self.store.find_by_email(email).await? else {
            return Ok(None);
        };

        let (token, expires_at) = generate_reset_token(self.config.reset_token_ttl_secs);
        self.store
            .set_reset_token(user.id, &hash_token(&token), expires_at)
            .await?;
        info!(user_id = user.id, "issued password reset token");

        Ok(Some(ResetToken { token, expires_at }))
    }

    /// Consume a reset token and set a new password.
    ///
    /// An expired token is cleared before the failure is reported, so the
    /// same token cannot be retried. On success the password update and the
    /// field-clearing land as one atomic store operation.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), AuthError> {
        self.check_password_policy(new_password)?;

        let user = self
            .store
            .find_by_reset_token_hash(&hash_token(token))
            .await?
            .ok_or(AuthError::ResetTokenExpired)?;

        if !is_reset_token_valid(user.reset_token_expires_at) {
            self.store.clear_reset_token(user.id).await?;
            return Err(AuthError::ResetTokenExpired);
        }

        let password_hash = hash_password(new_password, self.config.hash_cost)?;
        self.store
            .update_password_and_clear_reset_token(user.id, &password_hash)
            .await?;
        info!(user_id = user.id, "password reset completed");

        Ok(())
    }

    /// Invalidate every outstanding refresh token for a user by bumping
    /// the stored token version.
    ///
    /// Single-session logout needs no call here: clearing the refresh
    /// cookie is enough, since access tokens die on their own expiry.
    pub async fn logout_all(&self, user_id: i32) -> Result<(), AuthError> {
        let version = self.store.bump_token_version(user_id).await?;
        info!(user_id, token_version = version, "revoked all refresh tokens");
        Ok(())
    }

    fn check_password_policy(&self, password: &str) -> Result<(), AuthError> {
        if password.len() < self.config.min_password_length {
            return Err(AuthError::WeakPassword(self.config.min_password_length));
        }
        Ok(())
    }
}
