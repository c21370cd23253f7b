//! Core trait definitions for stackd.
//!
//! Implementations live in downstream crates; this crate only defines
//! the contracts so that consumers can depend on abstractions.

pub mod credential_store;

pub use credential_store::CredentialStore;
