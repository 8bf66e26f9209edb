//! HMAC signing secret for session tokens.
//!
//! The secret is loaded once at startup and shared read-only for the
//! lifetime of the process.

use std::fmt;
use std::sync::Arc;

#[cfg(any(test, feature = "config"))]
use clap::Args;
use jsonwebtoken::{DecodingKey, EncodingKey};
use serde::{Deserialize, Serialize};

use crate::utility::tracing_targets::SESSION_KEYS as TRACING_TARGET;
use crate::{Error, Result};

/// Fallback secret for local development. Never accepted in production.
const DEVELOPMENT_SECRET: &str = "worktrack-development-secret";

/// Signing secret configuration.
#[derive(Clone, Default, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "config"), derive(Args))]
pub struct SessionKeysConfig {
    /// HMAC-SHA-256 secret used to sign session tokens
    #[cfg_attr(any(test, feature = "config"), arg(long, env = "JWT_SECRET"))]
    #[serde(default)]
    pub jwt_secret: Option<String>,
}

impl SessionKeysConfig {
    /// Creates a configuration with the given secret.
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: Some(jwt_secret.into()),
        }
    }

    /// Fails when `production` is set and no non-empty secret is configured.
    pub fn validate(&self, production: bool) -> Result<()> {
        if production && self.secret().is_none() {
            return Err(Error::config(
                "a session signing secret (JWT_SECRET) is required in production",
            ));
        }

        Ok(())
    }

    /// Returns the secret if one is configured and non-empty.
    fn secret(&self) -> Option<&str> {
        self.jwt_secret.as_deref().filter(|s| !s.is_empty())
    }
}

impl fmt::Debug for SessionKeysConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionKeysConfig")
            .field("jwt_secret", &self.secret().map(|_| "***"))
            .finish()
    }
}

/// Keys for signing and verifying session tokens.
#[derive(Clone)]
pub struct SessionKeys {
    inner: Arc<SessionKeysInner>,
}

struct SessionKeysInner {
    decoding_key: DecodingKey,
    encoding_key: EncodingKey,
    development: bool,
}

impl SessionKeys {
    /// Derives the keys from the configured secret.
    ///
    /// # Errors
    ///
    /// A missing or empty secret is a configuration error in production.
    /// Elsewhere it falls back to a fixed development secret.
    pub fn from_config(config: &SessionKeysConfig, production: bool) -> Result<Self> {
        if let Err(error) = config.validate(production) {
            tracing::error!(
                target: TRACING_TARGET,
                "JWT_SECRET is not set in production"
            );
            return Err(error);
        }

        match config.secret() {
            Some(secret) => {
                tracing::info!(
                    target: TRACING_TARGET,
                    "session signing secret loaded"
                );
                Ok(Self::from_secret(secret.as_bytes(), false))
            }
            None => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    "JWT_SECRET is not set, using the built-in development secret"
                );
                Ok(Self::from_secret(DEVELOPMENT_SECRET.as_bytes(), true))
            }
        }
    }

    /// Creates keys directly from secret bytes.
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self::from_secret(secret.as_ref(), false)
    }

    fn from_secret(secret: &[u8], development: bool) -> Self {
        let inner = SessionKeysInner {
            decoding_key: DecodingKey::from_secret(secret),
            encoding_key: EncodingKey::from_secret(secret),
            development,
        };

        Self {
            inner: Arc::new(inner),
        }
    }

    #[inline]
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.inner.decoding_key
    }

    #[inline]
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.inner.encoding_key
    }

    /// Returns `true` if the development fallback secret is in use.
    #[inline]
    pub fn is_development(&self) -> bool {
        self.inner.development
    }
}

impl fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionKeys")
            .field("development", &self.inner.development)
            .finish_non_exhaustive()
    }
}
