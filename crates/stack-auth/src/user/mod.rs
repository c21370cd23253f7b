//! In-memory credential cache and credential-store composition.

pub mod credential;
pub mod layered;
pub mod store;

pub use credential::Credential;
pub use layered::LayeredCredentialStore;
pub use store::UserStore;
