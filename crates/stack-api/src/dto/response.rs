//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Login response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed access token to send as `authorization` metadata.
    pub token: String,
}
