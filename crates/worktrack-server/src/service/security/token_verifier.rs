//! Session token verification.
//!
//! Checks run in order: segment count, signature, claims decoding, expiry.
//! Every failure collapses into `None` for callers; the category is only
//! visible in debug logs.

use std::collections::HashSet;

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, Validation, decode};

use super::{AuthClaims, SessionKeys};
use crate::utility::tracing_targets::SESSION_TOKENS as TRACING_TARGET;

/// Why a token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub(crate) enum TokenRejection {
    /// Wrong segment count, bad encoding, or missing claims.
    Malformed,
    /// Signature does not match the secret.
    SignatureMismatch,
    /// Signature is intact but `now > exp`.
    Expired,
}

/// Verifies HS256 session tokens.
#[derive(Debug, Clone)]
pub struct TokenVerifier {
    keys: SessionKeys,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(keys: SessionKeys) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against an explicit clock in `verify_at`.
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.required_spec_claims = HashSet::from(["exp".to_owned()]);

        Self { keys, validation }
    }

    /// Verifies `token` against the current time.
    pub fn verify(&self, token: &str) -> Option<AuthClaims> {
        self.verify_at(token, jiff::Timestamp::now().as_second())
    }

    /// Verifies `token` at `now`, in unix seconds.
    pub fn verify_at(&self, token: &str, now: i64) -> Option<AuthClaims> {
        match self.check(token, now) {
            Ok(claims) => Some(claims),
            Err(rejection) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    reason = %rejection,
                    "session token rejected"
                );
                None
            }
        }
    }

    pub(crate) fn check(&self, token: &str, now: i64) -> Result<AuthClaims, TokenRejection> {
        if token.split('.').count() != 3 {
            return Err(TokenRejection::Malformed);
        }

        let data = decode::<AuthClaims>(token, self.keys.decoding_key(), &self.validation)
            .map_err(|e| match e.kind() {
                JwtErrorKind::InvalidSignature => TokenRejection::SignatureMismatch,
                _ => TokenRejection::Malformed,
            })?;

        if data.claims.is_expired_at(now) {
            return Err(TokenRejection::Expired);
        }

        Ok(data.claims)
    }
}
