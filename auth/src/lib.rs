//! Authentication primitives for the identity gateway
//!
//! Provides the two security-sensitive building blocks the identity service
//! is composed from:
//! - Secret hashing (Argon2id, salted, configurable work factor)
//! - Signed, time-bounded token issuance (HS256)
//!
//! Both are constructed once from process-wide configuration and shared
//! read-only across requests. Neither holds per-request state.
//!
//! # Examples
//!
//! ## Secret hashing
//! ```
//! use auth::SecretHasher;
//!
//! let hasher = SecretHasher::new(SecretHasher::DEFAULT_COST);
//! let stored = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &stored));
//! assert!(!hasher.verify("wrong_password", &stored));
//! ```
//!
//! ## Token issuance
//! ```
//! use auth::{Claims, TokenIssuer};
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::new(7, "bob".to_string(), "admin".to_string());
//! let token = issuer.issue(&claims).unwrap();
//! assert_eq!(token.split('.').count(), 3);
//! ```

pub mod password;
pub mod token;

pub use password::PasswordError;
pub use password::SecretHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenIssuer;
pub use token::TOKEN_TTL_HOURS;
