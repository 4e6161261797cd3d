use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::errors::TokenError;

/// Signs claims into self-contained bearer tokens.
///
/// Uses HS256 (HMAC with SHA-256) with a shared secret loaded once at process
/// start. The issuer keeps no record of issued tokens; every token is
/// stateless and stands on its signature and expiry alone. There is no decode
/// operation here: this service only mints tokens, it never consumes them.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    algorithm: Algorithm,
}

impl TokenIssuer {
    /// Create an issuer from the process-wide signing secret.
    ///
    /// The secret is opaque key material; it must never be logged or echoed
    /// back in responses. At least 32 bytes is recommended for HS256.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Sign claims into a URL-safe, dot-delimited three-part token.
    ///
    /// Pure computation: the same claims under the same secret always
    /// produce the same string.
    ///
    /// # Errors
    /// * `SigningFailed` - Claims serialization or signing failed
    pub fn issue(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }
}
