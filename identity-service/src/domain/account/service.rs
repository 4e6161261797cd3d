use std::sync::Arc;

use async_trait::async_trait;
use auth::Claims;
use auth::SecretHasher;
use auth::TokenIssuer;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountProjection;
use crate::account::models::AuthenticatedSession;
use crate::account::models::Credentials;
use crate::account::models::NewAccount;
use crate::account::models::RegisterCommand;
use crate::account::ports::AccountServicePort;
use crate::account::ports::AccountStore;

/// Identity workflows over an account store.
///
/// Holds only read-only, process-wide state (hasher work factor, signing
/// key); every request is an independent unit of work.
pub struct AccountService<S>
where
    S: AccountStore,
{
    store: Arc<S>,
    hasher: SecretHasher,
    issuer: TokenIssuer,
}

/// Single decision point for authentication.
///
/// Unknown username and wrong secret both collapse to `Rejected` before any
/// caller-visible result is built, which keeps the two paths externally
/// indistinguishable.
enum AuthOutcome {
    Authenticated(Account),
    Rejected,
}

impl<S> AccountService<S>
where
    S: AccountStore,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Account persistence implementation
    /// * `hasher` - Secret hasher, built from process-wide configuration
    /// * `issuer` - Token issuer, built from the process-wide signing secret
    pub fn new(store: Arc<S>, hasher: SecretHasher, issuer: TokenIssuer) -> Self {
        Self {
            store,
            hasher,
            issuer,
        }
    }

    // Hashing and verification are deliberately expensive; both run on the
    // blocking pool so unrelated requests are not serialized behind them.
    async fn hash_secret(&self, secret: String) -> Result<String, AccountError> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&secret))
            .await
            .map_err(|e| AccountError::Unknown(format!("Hashing task failed: {}", e)))?
            .map_err(AccountError::from)
    }

    async fn verify_secret(&self, secret: String, stored: String) -> Result<bool, AccountError> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&secret, &stored))
            .await
            .map_err(|e| AccountError::Unknown(format!("Verification task failed: {}", e)))
    }

    async fn check(&self, credentials: Credentials) -> Result<AuthOutcome, AccountError> {
        let Some(account) = self.store.find_by_username(&credentials.username).await? else {
            return Ok(AuthOutcome::Rejected);
        };

        let verified = self
            .verify_secret(credentials.password, account.password_hash.clone())
            .await?;

        if verified {
            Ok(AuthOutcome::Authenticated(account))
        } else {
            Ok(AuthOutcome::Rejected)
        }
    }
}

#[async_trait]
impl<S> AccountServicePort for AccountService<S>
where
    S: AccountStore,
{
    async fn register(
        &self,
        command: RegisterCommand,
    ) -> Result<AccountProjection, AccountError> {
        let password_hash = self.hash_secret(command.password).await?;

        let account = self
            .store
            .create(NewAccount {
                username: command.username,
                password_hash,
                role_name: command.role_name,
            })
            .await?;

        tracing::debug!(
            account_id = %account.id,
            username = %account.username,
            role_name = %account.role_name,
            "Account created"
        );

        Ok(AccountProjection::from(&account))
    }

    async fn authenticate(
        &self,
        credentials: Credentials,
    ) -> Result<AuthenticatedSession, AccountError> {
        match self.check(credentials).await? {
            AuthOutcome::Authenticated(account) => {
                // Claims reflect the account as found for this login; they
                // are never cached across logins.
                let claims = Claims::new(
                    account.id.0,
                    account.username.as_str().to_string(),
                    account.role_name.as_str().to_string(),
                );
                let token = self.issuer.issue(&claims)?;

                tracing::debug!(username = %account.username, "Authentication succeeded");

                Ok(AuthenticatedSession {
                    message: format!("{} is back", account.username),
                    token,
                })
            }
            AuthOutcome::Rejected => {
                tracing::debug!("Authentication rejected");
                Err(AccountError::InvalidCredentials)
            }
        }
    }
}
