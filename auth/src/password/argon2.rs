use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// One-way secret hasher with a process-wide work factor.
///
/// Uses Argon2id with a fresh random salt per call. The work factor maps to
/// the iteration count; memory and parallelism stay at crate defaults. All
/// parameters travel inside the PHC output string, so verification reads them
/// back from the stored hash and needs no configuration.
#[derive(Debug, Clone)]
pub struct SecretHasher {
    cost: u32,
}

impl SecretHasher {
    /// Default iteration count, matching the Argon2 crate default.
    pub const DEFAULT_COST: u32 = Params::DEFAULT_T_COST;

    /// Create a hasher with the given work factor (iteration count).
    ///
    /// The cost is validated lazily on first `hash` call; a cost of zero is
    /// rejected there.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    fn argon2(&self) -> Result<Argon2<'static>, PasswordError> {
        let params = Params::new(
            Params::DEFAULT_M_COST,
            self.cost,
            Params::DEFAULT_P_COST,
            None,
        )
        .map_err(|e| PasswordError::InvalidCost(e.to_string()))?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }

    /// Hash a plaintext secret for storage.
    ///
    /// Each call salts independently, so hashing the same secret twice yields
    /// different strings. Stored hashes are never compared byte-for-byte;
    /// only `verify` relates a plaintext to a stored hash.
    ///
    /// # Errors
    /// * `InvalidCost` - Configured work factor is out of range
    /// * `HashingFailed` - Hashing operation failed
    pub fn hash(&self, secret: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()?
            .hash_password(secret.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Whether `secret` reproduces `stored` under the salt and parameters
    /// embedded in `stored`.
    ///
    /// A malformed stored hash verifies as false rather than erroring, so the
    /// mismatch and malformed paths are indistinguishable to callers.
    pub fn verify(&self, secret: &str, stored: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(stored) else {
            return false;
        };

        Argon2::default()
            .verify_password(secret.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Low cost keeps the tests fast; parameters round-trip through the hash
    // string either way.
    fn hasher() -> SecretHasher {
        SecretHasher::new(1)
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = hasher();
        let secret = "my_secure_password";

        let stored = hasher.hash(secret).expect("Failed to hash secret");

        assert!(hasher.verify(secret, &stored));
        assert!(!hasher.verify("wrong_password", &stored));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = hasher();
        let secret = "same_secret";

        let first = hasher.hash(secret).expect("Failed to hash secret");
        let second = hasher.hash(secret).expect("Failed to hash secret");

        assert_ne!(first, second);
        assert!(hasher.verify(secret, &first));
        assert!(hasher.verify(secret, &second));
    }

    #[test]
    fn test_cost_is_embedded_in_hash() {
        let hasher = SecretHasher::new(3);
        let stored = hasher.hash("password").expect("Failed to hash secret");

        assert!(stored.starts_with("$argon2id$"));
        assert!(stored.contains("t=3"));
    }

    #[test]
    fn test_verify_malformed_hash_is_false() {
        let hasher = hasher();

        assert!(!hasher.verify("password", "not_a_phc_string"));
        assert!(!hasher.verify("password", ""));
        assert!(!hasher.verify("password", "$argon2id$truncated"));
    }

    #[test]
    fn test_verify_ignores_own_cost() {
        // Verification follows the parameters stored in the hash, not the
        // hasher's configuration.
        let writer = SecretHasher::new(1);
        let reader = SecretHasher::new(4);

        let stored = writer.hash("password").expect("Failed to hash secret");
        assert!(reader.verify("password", &stored));
    }

    #[test]
    fn test_zero_cost_rejected() {
        let hasher = SecretHasher::new(0);
        let result = hasher.hash("password");

        assert!(matches!(result, Err(PasswordError::InvalidCost(_))));
    }
}
