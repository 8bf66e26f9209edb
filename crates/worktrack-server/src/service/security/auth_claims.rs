use serde::{Deserialize, Serialize};

/// Token lifetime in seconds (seven days).
pub const TOKEN_LIFETIME_SECS: i64 = 7 * 24 * 60 * 60;

/// Identity a token is issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSubject {
    pub user_id: i64,
    pub email: String,
}

impl TokenSubject {
    pub fn new(user_id: i64, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
        }
    }
}

/// Claims carried in the payload segment of a session token.
///
/// Serialized as `{"userId", "email", "iat", "exp"}` with unix-second timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthClaims {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub email: String,
    /// Issued at.
    pub iat: i64,
    /// Expires at.
    pub exp: i64,
}

impl AuthClaims {
    /// Builds claims for `subject` issued at `now`.
    pub fn new(subject: TokenSubject, now: i64) -> Self {
        Self {
            user_id: subject.user_id,
            email: subject.email,
            iat: now,
            exp: now + TOKEN_LIFETIME_SECS,
        }
    }

    /// Returns `true` once `now` is past the expiry. A token is still valid at `now == exp`.
    #[inline]
    pub fn is_expired_at(&self, now: i64) -> bool {
        now > self.exp
    }

    /// Returns the identity the claims were issued for.
    pub fn subject(&self) -> TokenSubject {
        TokenSubject::new(self.user_id, self.email.clone())
    }
}
