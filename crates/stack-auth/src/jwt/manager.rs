//! Signs and verifies HS256 access tokens.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, Header, Validation, decode, encode};
use tracing::debug;

use stack_core::error::{AppError, ErrorKind};

use super::claims::Claims;
use super::key::SigningKey;

/// The only algorithm tokens are signed with, and the only one accepted.
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Value of the `sub` claim in every access token.
pub const ACCESS_SUBJECT: &str = "access";

/// Default value of the `iss` claim.
pub const DEFAULT_ISSUER: &str = "stackd";

/// Message returned for every rejected token, whatever the cause.
const INVALID_TOKEN: &str = "invalid token";

/// Issues and verifies access tokens with a key that lives as long as the
/// manager does.
///
/// The key is fixed at construction, so a shared `Arc<TokenManager>` needs
/// no locking. A process restart (or a second manager) produces a new key,
/// and tokens from the old one no longer verify.
pub struct TokenManager {
    key: SigningKey,
    validation: Validation,
    issuer: String,
    ttl: Duration,
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("issuer", &self.issuer)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenManager {
    /// Creates a manager with a freshly generated signing key.
    pub fn new(ttl: Duration, issuer: impl Into<String>) -> Result<Self, AppError> {
        let issuer = issuer.into();

        let mut validation = Validation::new(SIGNING_ALGORITHM);
        // Expiry is checked against the caller-supplied clock in `verify_at`.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_issuer(&[issuer.as_str()]);
        validation.sub = Some(ACCESS_SUBJECT.to_string());
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Ok(Self {
            key: SigningKey::generate()?,
            validation,
            issuer,
            ttl,
        })
    }

    /// Returns the configured token lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the issuer stamped into tokens.
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Issues a token for `username` valid from now for the configured TTL.
    pub fn generate(&self, username: &str, is_admin: bool) -> Result<String, AppError> {
        self.generate_at(username, is_admin, Utc::now())
    }

    /// Issues a token as if the current time were `now`.
    pub fn generate_at(
        &self,
        username: &str,
        is_admin: bool,
        now: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let iat = now.timestamp();
        let claims = Claims {
            sub: ACCESS_SUBJECT.to_string(),
            iss: self.issuer.clone(),
            iat,
            exp: iat + self.ttl.num_seconds(),
            username: username.to_string(),
            admin: is_admin,
        };

        encode(&Header::new(SIGNING_ALGORITHM), &claims, self.key.encoding())
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to sign access token", e))
    }

    /// Verifies a token against the current time.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies signature, algorithm, issuer, subject and expiry as of `now`.
    ///
    /// Every failure yields the same `Unauthenticated("invalid token")`; the
    /// precise reason is only logged.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AppError> {
        let data = decode::<Claims>(token, self.key.decoding(), &self.validation).map_err(|e| {
            let reason = match e.kind() {
                JwtErrorKind::InvalidAlgorithm => "unexpected signing algorithm",
                JwtErrorKind::InvalidSignature => "bad signature",
                JwtErrorKind::InvalidIssuer => "wrong issuer",
                JwtErrorKind::InvalidSubject => "wrong subject",
                JwtErrorKind::MissingRequiredClaim(_) => "missing claim",
                _ => "malformed token",
            };
            debug!(reason, error = %e, "Token rejected");
            AppError::unauthenticated(INVALID_TOKEN)
        })?;

        let claims = data.claims;
        if claims.is_expired_at(now) {
            debug!(username = %claims.username, exp = claims.exp, "Token rejected: expired");
            return Err(AppError::unauthenticated(INVALID_TOKEN));
        }

        Ok(claims)
    }
}
