//! Centralized tracing target constants for structured logging.
//!
//! Using consistent targets enables fine-grained control over log output
//! via tracing subscriber filters, e.g. `RUST_LOG=worktrack_server::authentication=debug`.

/// Token extraction and verification on incoming requests.
pub const AUTHENTICATION: &str = "worktrack_server::authentication";

/// Error recovery including middleware errors and request failures.
pub const RECOVERY_ERROR: &str = "worktrack_server::recovery::error";

/// Panic recovery including handler panics.
pub const RECOVERY_PANIC: &str = "worktrack_server::recovery::panic";

/// Password hashing and verification operations.
pub const PASSWORD_HASHER: &str = "worktrack_server::password_hasher";

/// Signing secret loading.
pub const SESSION_KEYS: &str = "worktrack_server::session_keys";

/// Token issuing and verification.
pub const SESSION_TOKENS: &str = "worktrack_server::session_tokens";

/// Credential store lookups and inserts.
pub const CREDENTIAL_STORE: &str = "worktrack_server::credential_store";

/// Application state construction.
pub const SERVICE_STATE: &str = "worktrack_server::service_state";
