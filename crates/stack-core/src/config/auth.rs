//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Default access token lifetime: five minutes.
pub const DEFAULT_TOKEN_TTL_SECONDS: u64 = 300;

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Access token TTL in seconds.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_seconds: u64,
    /// Value of the `iss` claim in issued tokens.
    #[serde(default = "default_issuer")]
    pub issuer: String,
    /// Username of the bootstrap administrator.
    #[serde(default = "default_admin_username")]
    pub admin_username: String,
    /// Password of the bootstrap administrator. No bootstrap user is created when unset.
    #[serde(default)]
    pub admin_password: Option<String>,
    /// Fully-qualified method names callable without a token.
    /// The Login method is always exempt, whether listed or not.
    #[serde(default)]
    pub skip_methods: Vec<String>,
    /// Password hashing cost.
    #[serde(default)]
    pub password: PasswordConfig,
}

/// Argon2id cost parameters.
///
/// Raising any of these makes every hash and every login proportionally
/// slower, for both the server and an offline attacker. Defaults are the
/// argon2 crate's defaults (the OWASP minimum for Argon2id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordConfig {
    /// Memory cost in KiB.
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    /// Number of passes over memory.
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    /// Degree of parallelism.
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_ttl_seconds: default_token_ttl(),
            issuer: default_issuer(),
            admin_username: default_admin_username(),
            admin_password: None,
            skip_methods: Vec::new(),
            password: PasswordConfig::default(),
        }
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

fn default_token_ttl() -> u64 {
    DEFAULT_TOKEN_TTL_SECONDS
}

fn default_issuer() -> String {
    "stackd".to_string()
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_memory_kib() -> u32 {
    19 * 1024
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}
