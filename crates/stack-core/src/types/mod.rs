//! Shared value types.

pub mod user;

pub use user::ResolvedUser;
