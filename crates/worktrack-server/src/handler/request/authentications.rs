//! Authentication request types.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validations::{password_size, trimmed};

/// Request payload for registration.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address; normalized before storage.
    #[serde(deserialize_with = "trimmed")]
    #[validate(email)]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 6, max = 128), custom(function = "password_size"))]
    pub password: String,
    /// Optional display name.
    #[serde(default)]
    #[validate(length(max = 100))]
    pub name: Option<String>,
}

/// Request payload for login.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address of the account.
    #[serde(deserialize_with = "trimmed")]
    #[validate(email)]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1), custom(function = "password_size"))]
    pub password: String,
}
