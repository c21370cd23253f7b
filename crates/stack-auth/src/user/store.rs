//! Concurrency-safe in-memory credential store for bootstrap identities.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use parking_lot::RwLock;

use stack_core::error::AppError;
use stack_core::traits::CredentialStore;
use stack_core::types::user::ResolvedUser;

use super::credential::Credential;

/// Username → credential map behind a reader/writer lock.
///
/// Lookups share the read lock and never block each other; `save` takes the
/// write lock. Records are never updated or removed once saved.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<HashMap<String, Credential>>,
}

impl UserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a credential. Fails with `AlreadyExists` if the username is taken.
    pub fn save(&self, credential: Credential) -> Result<(), AppError> {
        let mut users = self.users.write();
        match users.entry(credential.username.clone()) {
            Entry::Occupied(_) => Err(AppError::already_exists(format!(
                "user {} exists",
                credential.username
            ))),
            Entry::Vacant(slot) => {
                slot.insert(credential);
                Ok(())
            }
        }
    }

    /// Looks up a credential. Fails with `NotFound` if absent.
    pub fn get(&self, username: &str) -> Result<Credential, AppError> {
        self.users
            .read()
            .get(username)
            .cloned()
            .ok_or_else(|| AppError::not_found("user not found"))
    }
}

#[async_trait]
impl CredentialStore for UserStore {
    async fn resolve_user(&self, username: &str) -> Result<ResolvedUser, AppError> {
        self.get(username).map(ResolvedUser::from)
    }
}
