use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountProjection;
use crate::account::models::AuthenticatedSession;
use crate::account::models::Credentials;
use crate::account::models::NewAccount;
use crate::account::models::RegisterCommand;
use crate::account::models::Username;

/// Port for the identity workflows exposed to the transport layer.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account from validated input.
    ///
    /// # Arguments
    /// * `command` - Validated command with username, plaintext secret, role
    ///
    /// # Returns
    /// Public projection of the created account (never the hash)
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Store rejected a duplicate username
    /// * `Password` - Secret hashing failed (configuration fault)
    /// * `Store` - Store operation failed
    async fn register(&self, command: RegisterCommand)
        -> Result<AccountProjection, AccountError>;

    /// Authenticate a credential pair and issue a token.
    ///
    /// # Arguments
    /// * `credentials` - Username and plaintext secret
    ///
    /// # Returns
    /// Confirmation message and signed 24h token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong secret; the two
    ///   cases are indistinguishable by design
    /// * `Token` - Signing failed (configuration fault)
    /// * `Store` - Store operation failed
    async fn authenticate(
        &self,
        credentials: Credentials,
    ) -> Result<AuthenticatedSession, AccountError>;
}

/// Persistence operations the identity workflows require.
///
/// The implementation is an external collaborator; this crate assumes only
/// read-your-writes visibility within a single request.
#[async_trait]
pub trait AccountStore: Send + Sync + 'static {
    /// Persist a new account; the store assigns the identifier.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken (store-defined)
    /// * `Store` - Store operation failed
    async fn create(&self, account: NewAccount) -> Result<Account, AccountError>;

    /// Retrieve an account by username; first match when several exist.
    ///
    /// # Errors
    /// * `Store` - Store operation failed
    async fn find_by_username(&self, username: &Username)
        -> Result<Option<Account>, AccountError>;
}
