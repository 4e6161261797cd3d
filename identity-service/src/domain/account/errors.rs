use auth::PasswordError;
use auth::TokenError;
use http::StatusCode;
use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username must not be empty")]
    Empty,
}

/// Error for RoleName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Role name must not be empty")]
    Empty,
}

/// Top-level error for account operations.
///
/// `InvalidCredentials` is deliberately a single variant with a fixed
/// message: a wrong secret and an unknown username must stay externally
/// indistinguishable.
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid role: {0}")]
    InvalidRole(#[from] RoleError),

    // Domain-level errors
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    // Infrastructure errors
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl AccountError {
    /// Status-code classification for the transport layer.
    ///
    /// Hashing and signing failures are configuration errors, not request
    /// errors, so they classify as server faults.
    pub fn status(&self) -> StatusCode {
        match self {
            AccountError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AccountError::InvalidUsername(_) | AccountError::InvalidRole(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AccountError::UsernameAlreadyExists(_) => StatusCode::CONFLICT,
            AccountError::Password(_)
            | AccountError::Token(_)
            | AccountError::Store(_)
            | AccountError::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for AccountError {
    fn from(err: anyhow::Error) -> Self {
        AccountError::Unknown(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(
            AccountError::InvalidCredentials.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AccountError::InvalidUsername(UsernameError::Empty).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AccountError::UsernameAlreadyExists("anna".to_string()).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AccountError::Store("connection reset".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
