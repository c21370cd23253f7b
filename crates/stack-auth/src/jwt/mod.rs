//! Bearer token issuance and verification.

pub mod claims;
mod key;
pub mod manager;

pub use claims::Claims;
pub use manager::{ACCESS_SUBJECT, DEFAULT_ISSUER, SIGNING_ALGORITHM, TokenManager};
