//! Middleware for `axum::Router` and HTTP request processing.
//!
//! ```rust,no_run
//! use axum::Router;
//! use worktrack_server::middleware::{
//!     RecoveryConfig, RouterObservabilityExt, RouterRecoveryExt, RouterSecurityExt,
//!     SecurityConfig,
//! };
//!
//! let app: Router = Router::new()
//!     .with_security(&SecurityConfig::default())
//!     .with_observability()
//!     .with_recovery(&RecoveryConfig::default());
//! ```

mod auth;
mod observability;
mod recovery;
mod security;

pub use auth::require_authentication;
pub use observability::{REQUEST_ID_HEADER, RouterObservabilityExt};
pub use recovery::{RecoveryConfig, RouterRecoveryExt};
pub use security::{CorsConfig, RouterSecurityExt, SecurityConfig};
