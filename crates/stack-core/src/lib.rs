//! # stack-core
//!
//! Core crate for stackd. Contains the credential-resolution trait,
//! configuration schemas, shared user types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other stackd crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
