//! Per-call token enforcement.
//!
//! Every inbound call, unary or streaming, passes through [`Interceptor`]
//! before it reaches a business handler. The gate fails closed: anything
//! other than a skip-listed method or a valid token is `Unauthenticated`.

pub mod skip;

use std::future::Future;
use std::sync::Arc;

use futures::Stream;
use http::HeaderMap;

use stack_core::error::AppError;

use crate::jwt::{Claims, TokenManager};

pub use skip::MethodSkipSet;

/// The single metadata key carrying the raw bearer token (no scheme prefix).
pub const AUTHORIZATION_METADATA: &str = "authorization";

/// Verifies the bearer token of each call unless the method is skip-listed.
///
/// Authorization is coarse: any verified token is allowed to call any
/// method. The admin claim may be absent (read as `false`); when present it
/// must be a boolean or the token fails verification. It does not restrict
/// which methods may be called.
///
/// This component does not log. Request logging is a separate layer.
#[derive(Debug, Clone)]
pub struct Interceptor {
    tokens: Arc<TokenManager>,
    skip: Arc<MethodSkipSet>,
}

impl Interceptor {
    /// Creates an interceptor verifying tokens with `tokens`.
    pub fn new(tokens: Arc<TokenManager>, skip: MethodSkipSet) -> Self {
        Self {
            tokens,
            skip: Arc::new(skip),
        }
    }

    /// Returns the exempt methods.
    pub fn skip_set(&self) -> &MethodSkipSet {
        &self.skip
    }

    /// Gates one call.
    ///
    /// Returns `Ok(None)` for a skip-listed method (metadata is not looked
    /// at), `Ok(Some(claims))` for a valid token, and `Unauthenticated`
    /// otherwise.
    pub fn authorize(&self, method: &str, metadata: &HeaderMap) -> Result<Option<Claims>, AppError> {
        if self.skip.contains(method) {
            return Ok(None);
        }

        let token = metadata
            .get(AUTHORIZATION_METADATA)
            .ok_or_else(|| AppError::unauthenticated("authorization metadata not found"))?
            .to_str()
            .map_err(|_| AppError::unauthenticated("invalid token"))?;

        let claims = self
            .tokens
            .verify(token)
            .map_err(|_| AppError::unauthenticated("invalid token"))?;

        Ok(Some(claims))
    }

    /// Unary interceptor: gate the call, then hand `request` to `next`
    /// unchanged.
    pub async fn unary<Req, Resp, F, Fut>(
        &self,
        method: &str,
        metadata: &HeaderMap,
        request: Req,
        next: F,
    ) -> Result<Resp, AppError>
    where
        F: FnOnce(Req) -> Fut,
        Fut: Future<Output = Result<Resp, AppError>>,
    {
        self.authorize(method, metadata)?;
        next(request).await
    }

    /// Streaming interceptor: gate once at stream open, then delegate the
    /// whole stream to `next`. Individual messages are not checked.
    pub async fn stream<S, Resp, F, Fut>(
        &self,
        method: &str,
        metadata: &HeaderMap,
        stream: S,
        next: F,
    ) -> Result<Resp, AppError>
    where
        S: Stream,
        F: FnOnce(S) -> Fut,
        Fut: Future<Output = Result<Resp, AppError>>,
    {
        self.authorize(method, metadata)?;
        next(stream).await
    }
}
