//! Identity as seen by the Login boundary.

use serde::{Deserialize, Serialize};

/// Role name granting administrative rights.
pub const ADMIN_ROLE: &str = "admin";

/// A user resolved by a [`CredentialStore`](crate::traits::CredentialStore).
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedUser {
    /// Unique username.
    pub username: String,
    /// Opaque password digest (PHC string).
    pub password_digest: String,
    /// Role names assigned to the user.
    pub roles: Vec<String>,
}

impl ResolvedUser {
    /// Returns `true` if the user holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r == ADMIN_ROLE)
    }
}

impl std::fmt::Debug for ResolvedUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedUser")
            .field("username", &self.username)
            .field("roles", &self.roles)
            .finish_non_exhaustive()
    }
}
