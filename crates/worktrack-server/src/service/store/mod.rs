//! Credential store abstraction.
//!
//! Authentication only needs two operations from persistence: look a
//! credential up by normalized email, and insert a new one. Backends are
//! swappable behind [`CredentialStore`].

mod memory_store;
mod pg_store;

use std::sync::Arc;

use async_trait::async_trait;

pub use self::memory_store::MemoryCredentialStore;
pub use self::pg_store::PgCredentialStore;
use crate::BoxedError;

/// Stored login credential for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub user_id: i64,
    /// Normalized email, unique across credentials.
    pub email: String,
    pub name: Option<String>,
    /// PHC-formatted Argon2id hash.
    pub password_hash: String,
}

/// Errors returned by a [`CredentialStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A credential with the same normalized email already exists.
    #[error("a credential with this email already exists")]
    Duplicate,
    /// The backing storage failed.
    #[error("credential store backend error: {0}")]
    Backend(#[source] BoxedError),
}

impl StoreError {
    pub fn backend(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(error))
    }
}

/// Result type for credential store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence collaborator for authentication.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Finds the credential for an already normalized email.
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Credential>>;

    /// Inserts a new credential, failing with [`StoreError::Duplicate`] if
    /// the normalized email is taken.
    async fn insert(
        &self,
        email: &str,
        password_hash: &str,
        name: Option<&str>,
    ) -> StoreResult<Credential>;
}

/// Shared handle to a credential store.
pub type SharedCredentialStore = Arc<dyn CredentialStore>;

/// Trims and ASCII-lowercases an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// Trims a display name, treating blank names as absent.
pub(crate) fn normalize_name(name: Option<&str>) -> Option<String> {
    name.map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
}
