//! Ordered fallback across several credential stores.

use std::sync::Arc;

use async_trait::async_trait;

use stack_core::error::{AppError, ErrorKind};
use stack_core::traits::CredentialStore;
use stack_core::types::user::ResolvedUser;

/// Resolves a user from the first store that knows it.
///
/// `NotFound` from one layer falls through to the next; any other error
/// stops the search and is returned as-is.
#[derive(Debug, Clone)]
pub struct LayeredCredentialStore {
    layers: Vec<Arc<dyn CredentialStore>>,
}

impl LayeredCredentialStore {
    /// Creates a store that consults `layers` in order.
    pub fn new(layers: Vec<Arc<dyn CredentialStore>>) -> Self {
        Self { layers }
    }
}

#[async_trait]
impl CredentialStore for LayeredCredentialStore {
    async fn resolve_user(&self, username: &str) -> Result<ResolvedUser, AppError> {
        for layer in &self.layers {
            match layer.resolve_user(username).await {
                Err(e) if e.is(ErrorKind::NotFound) => continue,
                other => return other,
            }
        }
        Err(AppError::not_found("user not found"))
    }
}
