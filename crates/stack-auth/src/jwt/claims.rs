//! Claims carried by every access token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JWT claims payload embedded in every access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, always `"access"`.
    pub sub: String,
    /// Issuer, the service name.
    pub iss: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Authenticated username.
    pub username: String,
    /// Whether the user held the admin role at Login time. Absent means `false`.
    #[serde(default)]
    pub admin: bool,
}

impl Claims {
    /// Returns the authenticated username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the admin flag.
    pub fn is_admin(&self) -> bool {
        self.admin
    }

    /// Checks whether this token has expired at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}
