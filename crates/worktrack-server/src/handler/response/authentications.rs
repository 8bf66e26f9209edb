//! Authentication response types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::service::{AuthClaims, Credential};

/// Public view of an account.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
}

impl From<Credential> for UserProfile {
    fn from(credential: Credential) -> Self {
        Self {
            id: credential.user_id,
            email: credential.email,
            name: credential.name,
        }
    }
}

/// Response returned after registration or login.
///
/// The token is also set as an `HttpOnly` cookie.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub user: UserProfile,
    pub token: String,
}

impl AuthResponse {
    pub fn new(message: impl Into<String>, user: impl Into<UserProfile>, token: String) -> Self {
        Self {
            success: true,
            message: message.into(),
            user: user.into(),
            token,
        }
    }
}

/// Response returned after logout.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

impl Default for LogoutResponse {
    fn default() -> Self {
        Self {
            success: true,
            message: "Logged out successfully".to_owned(),
        }
    }
}

/// Identity of the caller as carried by the session token.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub email: String,
}

/// Response for the current session.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub user: SessionUser,
    pub issued_at: Timestamp,
    pub expires_at: Timestamp,
}

impl From<AuthClaims> for SessionResponse {
    fn from(claims: AuthClaims) -> Self {
        Self {
            issued_at: Timestamp::from_second(claims.iat).unwrap_or_default(),
            expires_at: Timestamp::from_second(claims.exp).unwrap_or_default(),
            user: SessionUser {
                id: claims.user_id,
                email: claims.email,
            },
        }
    }
}
