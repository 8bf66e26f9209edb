//! Session token extraction and the session cookie.

mod auth_cookie;
mod auth_state;
mod auth_token;

pub use self::auth_cookie::AuthCookie;
pub use self::auth_state::AuthState;
pub use self::auth_token::{AUTH_COOKIE_NAME, AuthToken, TokenSource};
