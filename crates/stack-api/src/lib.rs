//! # stack-api
//!
//! RPC-over-HTTP transport for stackd built on Axum.
//!
//! Each RPC method is served at `POST /<package>.<Service>/<Method>` with a
//! JSON body. The path is the fully-qualified method name handed to the
//! authorization interceptor and the request headers are the call metadata.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::{build_router, build_router_with};
pub use state::AppState;
