//! Verified authentication state extractor.
//!
//! [`AuthState`] runs the token through [`TokenVerifier`] and exposes the
//! resulting claims. Every token failure (bad shape, bad signature, expired)
//! becomes the same `401 Unauthorized`. Verified claims are cached in the
//! request extensions, so the guard middleware and the handler verify once.
//!
//! ```rust,ignore
//! async fn handler(auth_state: AuthState) -> Result<impl IntoResponse> {
//!     let notes = conn.list_notes(auth_state.user_id).await?;
//!     // ...
//! }
//! ```

use axum::extract::{FromRef, FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;
use derive_more::Deref;

use super::AuthToken;
use crate::handler::{Error, ErrorKind, Result};
use crate::service::{AuthClaims, TokenVerifier};
use crate::utility::tracing_targets::AUTHENTICATION as TRACING_TARGET;

/// Claims of a verified session token.
///
/// Downstream queries scope every row by [`AuthClaims::user_id`].
#[must_use]
#[derive(Debug, Clone, Deref, PartialEq, Eq)]
pub struct AuthState(pub AuthClaims);

impl AuthState {
    /// Verifies a raw token and wraps its claims.
    pub fn from_token(auth_token: &AuthToken, verifier: &TokenVerifier) -> Result<Self> {
        match verifier.verify(auth_token.as_str()) {
            Some(claims) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    user_id = claims.user_id,
                    source = ?auth_token.source(),
                    "request authenticated"
                );
                Ok(Self(claims))
            }
            None => Err(ErrorKind::Unauthorized.with_resource("authentication")),
        }
    }

    #[inline]
    pub fn into_claims(self) -> AuthClaims {
        self.0
    }
}

impl<S> FromRequestParts<S> for AuthState
where
    S: Sync + Send,
    TokenVerifier: FromRef<S>,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(auth_state) = parts.extensions.get::<Self>() {
            return Ok(auth_state.clone());
        }

        let auth_token = AuthToken::from_request_parts(parts, state).await?;
        let verifier = TokenVerifier::from_ref(state);
        let auth_state = Self::from_token(&auth_token, &verifier)?;

        parts.extensions.insert(auth_state.clone());
        Ok(auth_state)
    }
}

impl<S> OptionalFromRequestParts<S> for AuthState
where
    S: Sync + Send,
    TokenVerifier: FromRef<S>,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        match <Self as FromRequestParts<S>>::from_request_parts(parts, state).await {
            Ok(auth_state) => Ok(Some(auth_state)),
            Err(error) if error.kind() == ErrorKind::InternalServerError => Err(error),
            Err(_) => Ok(None),
        }
    }
}
