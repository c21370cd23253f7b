//! Process-lifetime HMAC signing key.

use argon2::password_hash::rand_core::{OsRng, RngCore};
use jsonwebtoken::{DecodingKey, EncodingKey};

use stack_core::error::{AppError, ErrorKind};

/// Length of the generated HMAC secret in bytes.
pub(crate) const KEY_LEN: usize = 64;

/// Random symmetric secret drawn from the OS CSPRNG.
///
/// Never persisted and never printed. Dropping it invalidates every token
/// it signed.
pub(crate) struct SigningKey {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKey {
    /// Draws a fresh key. Fails only if the OS entropy source fails.
    pub(crate) fn generate() -> Result<Self, AppError> {
        let mut secret = [0u8; KEY_LEN];
        OsRng.try_fill_bytes(&mut secret).map_err(|e| {
            AppError::with_source(ErrorKind::Internal, "Cannot generate signing key", e)
        })?;

        let key = Self {
            encoding: EncodingKey::from_secret(&secret),
            decoding: DecodingKey::from_secret(&secret),
        };
        secret.fill(0);
        Ok(key)
    }

    pub(crate) fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub(crate) fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningKey(..)")
    }
}
