//! Session token issuing.

use jsonwebtoken::{Algorithm, Header, encode};

use super::{AuthClaims, SessionKeys, TokenSubject};
use crate::utility::tracing_targets::SESSION_TOKENS as TRACING_TARGET;
use crate::{Error, Result};

/// Signs HS256 session tokens.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    keys: SessionKeys,
}

impl TokenIssuer {
    pub fn new(keys: SessionKeys) -> Self {
        Self { keys }
    }

    /// Issues a token for `subject` at the current time.
    pub fn issue(&self, subject: TokenSubject) -> Result<String> {
        self.issue_at(subject, jiff::Timestamp::now().as_second())
    }

    /// Issues a token for `subject` with `iat = now`, in unix seconds.
    ///
    /// # Errors
    ///
    /// Only fails if signing fails, which does not happen with HMAC keys.
    pub fn issue_at(&self, subject: TokenSubject, now: i64) -> Result<String> {
        let claims = AuthClaims::new(subject, now);
        let header = Header::new(Algorithm::HS256);

        let token = encode(&header, &claims, self.keys.encoding_key()).map_err(|e| {
            tracing::error!(
                target: TRACING_TARGET,
                error = %e,
                "failed to sign session token"
            );
            Error::internal("token_issuer", "failed to sign session token").with_source(e)
        })?;

        tracing::debug!(
            target: TRACING_TARGET,
            user_id = claims.user_id,
            expires_at = claims.exp,
            "session token issued"
        );

        Ok(token)
    }
}
