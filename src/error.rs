use thiserror::Error;

/// Standard error type for the Verso credential core.
///
/// Unknown email and wrong password both surface as
/// [`AuthError::InvalidCredentials`] so the boundary cannot leak which
/// accounts exist.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid token")]
    TokenInvalid,

    #[error("Token has expired")]
    TokenExpired,

    /// Reset token unknown or past its expiry. The flow raising this has
    /// already cleared the stored token fields, so the token cannot be
    /// retried.
    #[error("Password reset token is invalid or has expired")]
    ResetTokenExpired,

    #[error("Password must be at least {0} characters")]
    WeakPassword(usize),

    #[error("Email is already registered")]
    EmailTaken,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("User store error: {0}")]
    Store(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Stable code string for the HTTP layer to map onto status codes.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::TokenInvalid => "TOKEN_INVALID",
            AuthError::TokenExpired => "TOKEN_EXPIRED",
            AuthError::ResetTokenExpired => "RESET_TOKEN_EXPIRED",
            AuthError::WeakPassword(_) => "WEAK_PASSWORD",
            AuthError::EmailTaken => "EMAIL_TAKEN",
            AuthError::Config(_) => "CONFIG_ERROR",
            AuthError::Store(_) => "STORE_ERROR",
            AuthError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the boundary should collapse this into its generic
    /// "invalid or expired token" response.
    pub fn is_token_error(&self) -> bool {
        matches!(self, AuthError::TokenInvalid | AuthError::TokenExpired)
    }
}
