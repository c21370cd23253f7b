//! Credential resolution trait consumed by the Login boundary.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::user::ResolvedUser;

/// System of record mapping usernames to password digests and roles.
///
/// Implementations may be in-memory (bootstrap identities) or backed by
/// durable storage. An unknown username must be reported as
/// [`ErrorKind::NotFound`](crate::error::ErrorKind::NotFound); any other
/// error is treated as a failure of the store itself.
#[async_trait]
pub trait CredentialStore: Send + Sync + std::fmt::Debug + 'static {
    /// Resolve a username into its stored digest and role names.
    async fn resolve_user(&self, username: &str) -> AppResult<ResolvedUser>;
}
