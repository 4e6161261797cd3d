use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Token lifetime: exactly one day from issuance.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Fixed-shape token claims.
///
/// Carries the identity triple (subject, username, role name) captured at
/// the moment of successful authentication, plus the issuance/expiry pair.
/// Claims are built fresh per login and never cached or reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account identifier of the authenticated user
    pub subject: i64,

    /// Username of the authenticated user
    pub username: String,

    /// Role of the authenticated user
    pub role_name: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp), always `iat` + 24h
    pub exp: i64,
}

impl Claims {
    /// Create claims issued now.
    pub fn new(subject: i64, username: String, role_name: String) -> Self {
        Self::issued_at(subject, username, role_name, Utc::now())
    }

    /// Create claims with an explicit issuance instant.
    ///
    /// Encoding is a pure function of the claims and the signing secret, so
    /// pinning the instant makes token construction reproducible.
    pub fn issued_at(
        subject: i64,
        username: String,
        role_name: String,
        issued: DateTime<Utc>,
    ) -> Self {
        let iat = issued.timestamp();
        let exp = (issued + Duration::hours(TOKEN_TTL_HOURS)).timestamp();

        Self {
            subject,
            username,
            role_name,
            iat,
            exp,
        }
    }
}
