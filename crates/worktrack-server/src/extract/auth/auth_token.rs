//! Raw bearer token extraction.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, Cookie};
use axum_extra::typed_header::TypedHeaderRejectionReason;

use crate::handler::{Error, ErrorKind};
use crate::utility::tracing_targets::AUTHENTICATION as TRACING_TARGET;

/// Name of the cookie carrying the session token.
pub const AUTH_COOKIE_NAME: &str = "token";

/// Where the token was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Header,
    Cookie,
}

/// Unverified session token taken from the request.
///
/// An `Authorization: Bearer` header takes precedence over the `token` cookie.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken {
    token: String,
    source: TokenSource,
}

impl AuthToken {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.token
    }

    #[inline]
    pub fn source(&self) -> TokenSource {
        self.source
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthToken")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl<S> FromRequestParts<S> for AuthToken
where
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        type AuthBearerHeader = TypedHeader<Authorization<Bearer>>;

        match AuthBearerHeader::from_request_parts(parts, state).await {
            Ok(TypedHeader(Authorization(bearer))) => {
                return Ok(Self {
                    token: bearer.token().to_owned(),
                    source: TokenSource::Header,
                });
            }
            Err(rejection) => match rejection.reason() {
                TypedHeaderRejectionReason::Missing => {}
                _ => {
                    tracing::debug!(
                        target: TRACING_TARGET,
                        error = %rejection,
                        "authorization header is not a bearer token"
                    );
                    return Err(ErrorKind::Unauthorized.with_resource("authentication"));
                }
            },
        }

        let cookie_token = TypedHeader::<Cookie>::from_request_parts(parts, state)
            .await
            .ok()
            .and_then(|TypedHeader(cookie)| cookie.get(AUTH_COOKIE_NAME).map(str::to_owned))
            .filter(|token| !token.is_empty());

        match cookie_token {
            Some(token) => Ok(Self {
                token,
                source: TokenSource::Cookie,
            }),
            None => Err(ErrorKind::MissingAuthToken
                .with_context("Send an Authorization: Bearer header or the session cookie")
                .with_resource("authentication")),
        }
    }
}
