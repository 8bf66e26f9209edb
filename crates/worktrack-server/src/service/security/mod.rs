//! Password hashing and session token services.
//!
//! Hashing, issuing and verifying are pure, request-scoped computations.
//! The only shared resource is the signing secret held by [`SessionKeys`],
//! which is immutable after startup.

mod auth_claims;
mod cookie_policy;
mod password_hasher;
mod session_keys;
mod token_issuer;
mod token_verifier;

pub use auth_claims::{AuthClaims, TOKEN_LIFETIME_SECS, TokenSubject};
pub use cookie_policy::CookiePolicy;
#[cfg(test)]
pub(crate) use password_hasher::tests::fast_hasher;
pub use password_hasher::{PasswordHasher, PasswordHasherConfig};
pub use session_keys::{SessionKeys, SessionKeysConfig};
pub use token_issuer::TokenIssuer;
pub use token_verifier::TokenVerifier;
