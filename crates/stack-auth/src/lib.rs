//! # stack-auth
//!
//! Authentication and call authorization for the stackd RPC service.
//!
//! ## Modules
//!
//! - `password` - Argon2id password hashing and verification
//! - `user` - in-memory credential cache for bootstrap identities
//! - `jwt` - bearer token issuance and verification
//! - `interceptor` - per-call token enforcement for unary and streaming calls
//! - `login` - the Login boundary: credentials in, token out
//! - `service` - wiring of the above into one injectable service

pub mod interceptor;
pub mod jwt;
pub mod login;
pub mod password;
pub mod service;
pub mod user;

pub use interceptor::{AUTHORIZATION_METADATA, Interceptor, MethodSkipSet};
pub use jwt::{Claims, TokenManager};
pub use login::LoginService;
pub use password::PasswordHasher;
pub use service::{AuthService, AuthServiceBuilder, LOGIN_METHOD};
pub use user::{Credential, LayeredCredentialStore, UserStore};
