use std::fmt;

use serde::Serialize;

use crate::account::errors::RoleError;
use crate::account::errors::UsernameError;

/// Account aggregate entity.
///
/// Created once at registration and read-only afterwards. The secret hash is
/// opaque storage material and never leaves this crate; callers see accounts
/// only through [`AccountProjection`].
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub username: Username,
    pub password_hash: String,
    pub role_name: RoleName,
}

/// Account identifier, assigned by the store at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub i64);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Only emptiness is rejected here; richer syntax rules belong to the
/// boundary pre-checks in front of this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Create a new username.
    ///
    /// # Errors
    /// * `Empty` - Username is empty or whitespace-only
    pub fn new(username: impl Into<String>) -> Result<Self, UsernameError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(UsernameError::Empty);
        }
        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Role name value type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleName(String);

impl RoleName {
    /// Role assigned when registration omits one.
    pub const FALLBACK: &'static str = "student";

    /// Create a new role name.
    ///
    /// # Errors
    /// * `Empty` - Role name is empty or whitespace-only
    pub fn new(role_name: impl Into<String>) -> Result<Self, RoleError> {
        let role_name = role_name.into();
        if role_name.trim().is_empty() {
            return Err(RoleError::Empty);
        }
        Ok(Self(role_name))
    }

    /// Resolve an optional role, falling back to [`Self::FALLBACK`] when
    /// omitted. A present but empty role is still rejected.
    pub fn from_optional(role_name: Option<String>) -> Result<Self, RoleError> {
        match role_name {
            Some(role_name) => Self::new(role_name),
            None => Ok(Self(Self::FALLBACK.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Record handed to the store for creation; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: Username,
    pub password_hash: String,
    pub role_name: RoleName,
}

/// Caller-facing projection of an account.
///
/// The only account view that crosses the transport boundary; carries no
/// secret material by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountProjection {
    pub user_id: i64,
    pub username: String,
    pub role_name: String,
}

impl From<&Account> for AccountProjection {
    fn from(account: &Account) -> Self {
        Self {
            user_id: account.id.0,
            username: account.username.as_str().to_string(),
            role_name: account.role_name.as_str().to_string(),
        }
    }
}

/// Command to register a new account with validated fields.
#[derive(Debug)]
pub struct RegisterCommand {
    pub username: Username,
    pub password: String,
    pub role_name: RoleName,
}

impl RegisterCommand {
    /// Construct a new register command.
    ///
    /// # Arguments
    /// * `username` - Validated username
    /// * `password` - Plain text secret (hashed by the service, never stored)
    /// * `role_name` - Validated role, fallback already applied
    pub fn new(username: Username, password: String, role_name: RoleName) -> Self {
        Self {
            username,
            password,
            role_name,
        }
    }
}

/// Credential pair supplied at login; transient, never persisted.
#[derive(Debug)]
pub struct Credentials {
    pub username: Username,
    pub password: String,
}

impl Credentials {
    pub fn new(username: Username, password: String) -> Self {
        Self { username, password }
    }
}

/// Successful authentication payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedSession {
    /// Confirmation message referencing the username
    pub message: String,

    /// Signed bearer token, valid for 24 hours
    pub token: String,
}
