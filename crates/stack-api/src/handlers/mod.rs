//! RPC handlers.

pub mod auth;
pub mod fallback;
