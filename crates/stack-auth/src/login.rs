//! The Login boundary: username and password in, access token out.

use std::sync::Arc;

use tracing::{debug, error, info};

use stack_core::error::{AppError, ErrorKind};
use stack_core::traits::CredentialStore;

use crate::jwt::TokenManager;
use crate::password::PasswordHasher;

/// Message for every credential failure. Unknown user and wrong password
/// must look identical to the caller.
const INVALID_CREDENTIALS: &str = "invalid username or password";

/// Plaintext hashed once at construction to build the decoy digest.
const DECOY_PASSWORD: &str = "stackd-decoy-password";

/// Authenticates callers against a [`CredentialStore`] and mints tokens.
#[derive(Debug, Clone)]
pub struct LoginService {
    store: Arc<dyn CredentialStore>,
    hasher: PasswordHasher,
    tokens: Arc<TokenManager>,
    /// Verified against when the user does not exist, so both failure
    /// paths pay for one hash verification.
    decoy_digest: Arc<str>,
}

impl LoginService {
    /// Creates a login service. Hashes the decoy digest up front.
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: PasswordHasher,
        tokens: Arc<TokenManager>,
    ) -> Result<Self, AppError> {
        let decoy_digest = hasher.hash(DECOY_PASSWORD)?.into();
        Ok(Self {
            store,
            hasher,
            tokens,
            decoy_digest,
        })
    }

    /// Verifies `username`/`password` and returns a signed access token.
    ///
    /// Errors:
    /// - `Unauthenticated` for an unknown user or a wrong password (same message)
    /// - `Internal` if the store fails or the token cannot be signed
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        let user = match self.store.resolve_user(username).await {
            Ok(user) => Some(user),
            Err(e) if e.is(ErrorKind::NotFound) => None,
            Err(e) => {
                error!(username = %username, error = %e, "Credential lookup failed");
                return Err(AppError::internal("cannot resolve user"));
            }
        };

        let digest = user
            .as_ref()
            .map_or(&*self.decoy_digest, |u| u.password_digest.as_str());
        let matched = self.hasher.verify(digest, password);

        let user = match user {
            Some(user) if matched => user,
            Some(_) => {
                debug!(username = %username, "Login rejected: wrong password");
                return Err(AppError::unauthenticated(INVALID_CREDENTIALS));
            }
            None => {
                debug!(username = %username, "Login rejected: unknown user");
                return Err(AppError::unauthenticated(INVALID_CREDENTIALS));
            }
        };

        let admin = user.is_admin();
        let token = self.tokens.generate(&user.username, admin).map_err(|e| {
            error!(username = %user.username, error = %e, "Token generation failed");
            AppError::internal("cannot generate access token")
        })?;

        info!(username = %user.username, admin, "User logged in");
        Ok(token)
    }
}
