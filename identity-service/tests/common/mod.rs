use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::SecretHasher;
use auth::TokenIssuer;
use identity_service::account::errors::AccountError;
use identity_service::account::models::Account;
use identity_service::account::models::AccountId;
use identity_service::account::models::NewAccount;
use identity_service::account::models::Username;
use identity_service::account::ports::AccountStore;
use identity_service::account::service::AccountService;

pub const JWT_SECRET: &[u8] = b"integration_secret_32_bytes_long!!";

/// In-memory account store with sequential, store-assigned ids.
///
/// Stands in for the external persistence collaborator; enforces username
/// uniqueness the way a database unique constraint would.
pub struct InMemoryAccountStore {
    accounts: Mutex<Vec<Account>>,
    next_id: AtomicI64,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn create(&self, account: NewAccount) -> Result<Account, AccountError> {
        let mut accounts = self.accounts.lock().unwrap();

        if accounts
            .iter()
            .any(|existing| existing.username == account.username)
        {
            return Err(AccountError::UsernameAlreadyExists(
                account.username.as_str().to_string(),
            ));
        }

        let created = Account {
            id: AccountId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            username: account.username,
            password_hash: account.password_hash,
            role_name: account.role_name,
        };
        accounts.push(created.clone());

        Ok(created)
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Account>, AccountError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts
            .iter()
            .find(|account| &account.username == username)
            .cloned())
    }
}

/// Service wired exactly as a process would at startup: low hash cost for
/// test speed, fixed signing secret.
pub fn service() -> AccountService<InMemoryAccountStore> {
    init_tracing();
    AccountService::new(
        Arc::new(InMemoryAccountStore::new()),
        SecretHasher::new(1),
        TokenIssuer::new(JWT_SECRET),
    )
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
