use thiserror::Error;

/// Error type for secret hashing.
///
/// Verification has no error path: a malformed stored hash verifies as false.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Secret hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid work factor: {0}")]
    InvalidCost(String),
}
