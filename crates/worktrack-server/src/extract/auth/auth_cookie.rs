//! Session cookie emission.

use axum::http::HeaderValue;
use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponseParts, ResponseParts};

use super::AUTH_COOKIE_NAME;
use crate::handler::{Error, ErrorKind};
use crate::service::{CookiePolicy, TOKEN_LIFETIME_SECS};

/// Sets or clears the session cookie when returned from a handler.
///
/// The cookie is `HttpOnly`, `SameSite=Strict`, scoped to `/`, and `Secure`
/// when the policy asks for it.
#[must_use]
#[derive(Clone, PartialEq, Eq)]
pub struct AuthCookie {
    token: Option<String>,
    policy: CookiePolicy,
}

impl AuthCookie {
    /// A cookie carrying `token` for the full token lifetime.
    pub fn session(token: impl Into<String>, policy: CookiePolicy) -> Self {
        Self {
            token: Some(token.into()),
            policy,
        }
    }

    /// An expired, empty cookie that makes the browser drop the session.
    pub fn cleared(policy: CookiePolicy) -> Self {
        Self {
            token: None,
            policy,
        }
    }

    /// Renders the `Set-Cookie` header value.
    pub fn header_value(&self) -> String {
        let (value, max_age) = match &self.token {
            Some(token) => (token.as_str(), TOKEN_LIFETIME_SECS),
            None => ("", 0),
        };

        let mut cookie = format!(
            "{AUTH_COOKIE_NAME}={value}; HttpOnly; SameSite=Strict; Max-Age={max_age}; Path=/"
        );
        if self.policy.secure {
            cookie.push_str("; Secure");
        }

        cookie
    }
}

impl std::fmt::Debug for AuthCookie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthCookie")
            .field("cleared", &self.token.is_none())
            .field("policy", &self.policy)
            .finish()
    }
}

impl IntoResponseParts for AuthCookie {
    type Error = Error<'static>;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        let value = HeaderValue::from_str(&self.header_value()).map_err(|_| {
            ErrorKind::InternalServerError
                .with_message("Failed to set the session cookie")
                .with_resource("authentication")
        })?;

        res.headers_mut().append(SET_COOKIE, value);
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use axum::response::IntoResponse;

    use super::*;

    #[test]
    fn session_cookie_attributes() {
        let cookie = AuthCookie::session("a.b.c", CookiePolicy::new(false));
        assert_eq!(
            cookie.header_value(),
            "token=a.b.c; HttpOnly; SameSite=Strict; Max-Age=604800; Path=/"
        );
    }

    #[test]
    fn secure_in_production() {
        let cookie = AuthCookie::session("a.b.c", CookiePolicy::new(true));
        assert!(cookie.header_value().ends_with("; Secure"));
    }

    #[test]
    fn cleared_cookie_expires_immediately() {
        let cookie = AuthCookie::cleared(CookiePolicy::default());
        assert!(cookie.header_value().starts_with("token=; "));
        assert!(cookie.header_value().contains("Max-Age=0"));
    }

    #[test]
    fn sets_header_on_response() {
        let response = (AuthCookie::session("a.b.c", CookiePolicy::default()), "ok").into_response();
        let header = response.headers().get(SET_COOKIE);
        assert!(header.is_some_and(|value| value.as_bytes().starts_with(b"token=a.b.c;")));
    }
}
