//! Credential record held by the in-memory store.

use stack_core::error::AppError;
use stack_core::types::user::{ADMIN_ROLE, ResolvedUser};

use crate::password::PasswordHasher;

/// A username with its password digest and admin flag.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// Unique username.
    pub username: String,
    /// Argon2id PHC string.
    pub password_digest: String,
    /// Whether the user is an administrator.
    pub is_admin: bool,
}

impl Credential {
    /// Builds a credential by hashing `password`.
    pub fn new(
        username: impl Into<String>,
        password: &str,
        is_admin: bool,
        hasher: &PasswordHasher,
    ) -> Result<Self, AppError> {
        Ok(Self {
            username: username.into(),
            password_digest: hasher.hash(password)?,
            is_admin,
        })
    }

    /// Checks `password` against the stored digest.
    pub fn is_password(&self, password: &str, hasher: &PasswordHasher) -> bool {
        hasher.verify(&self.password_digest, password)
    }
}

impl From<Credential> for ResolvedUser {
    fn from(c: Credential) -> Self {
        let roles = if c.is_admin {
            vec![ADMIN_ROLE.to_string()]
        } else {
            Vec::new()
        };
        Self {
            username: c.username,
            password_digest: c.password_digest,
            roles,
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("is_admin", &self.is_admin)
            .finish_non_exhaustive()
    }
}
