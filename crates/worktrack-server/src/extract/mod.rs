//! Request extractors.
//!
//! - [`AuthState`]: verified session claims, from a bearer header or the
//!   session cookie.
//! - [`AuthCookie`]: sets or clears the session cookie on a response.
//! - [`Json`], [`ValidateJson`] and [`Path`]: drop-in replacements for the
//!   axum extractors whose rejections render as JSON [`Error`]s.
//!
//! [`Error`]: crate::handler::Error

mod auth;
mod reject;

pub use crate::extract::auth::{AUTH_COOKIE_NAME, AuthCookie, AuthState, AuthToken, TokenSource};
pub use crate::extract::reject::{Json, Path, ValidateJson};
