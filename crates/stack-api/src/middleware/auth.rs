//! Authorization middleware: runs the interceptor before every handler.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::state::AppState;

/// Rejects the call unless its method is skip-listed or it carries a valid
/// token in the `authorization` header.
///
/// Verified [`Claims`](stack_auth::Claims) are inserted into the request
/// extensions for downstream handlers. Streaming bodies are gated here once,
/// before the handler starts reading them.
pub async fn authorize(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let method = request.uri().path().to_owned();

    if let Some(claims) = state
        .auth
        .interceptor()
        .authorize(&method, request.headers())?
    {
        request.extensions_mut().insert(claims);
    }

    Ok(next.run(request).await)
}
