use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Credential, CredentialStore, StoreError, StoreResult, normalize_email, normalize_name};
use crate::utility::tracing_targets::CREDENTIAL_STORE as TRACING_TARGET;

/// In-process credential store keyed by normalized email.
///
/// Clones share the same underlying map. Contents are lost on restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    inner: Arc<RwLock<MemoryStoreInner>>,
}

#[derive(Debug, Default)]
struct MemoryStoreInner {
    last_id: i64,
    credentials: HashMap<String, Credential>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored credentials.
    pub async fn len(&self) -> usize {
        self.inner.read().await.credentials.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Credential>> {
        let inner = self.inner.read().await;
        Ok(inner.credentials.get(&normalize_email(email)).cloned())
    }

    async fn insert(
        &self,
        email: &str,
        password_hash: &str,
        name: Option<&str>,
    ) -> StoreResult<Credential> {
        let email = normalize_email(email);
        let mut inner = self.inner.write().await;

        if inner.credentials.contains_key(&email) {
            return Err(StoreError::Duplicate);
        }

        inner.last_id += 1;
        let credential = Credential {
            user_id: inner.last_id,
            email: email.clone(),
            name: normalize_name(name),
            password_hash: password_hash.to_owned(),
        };
        inner.credentials.insert(email, credential.clone());

        tracing::debug!(
            target: TRACING_TARGET,
            user_id = credential.user_id,
            "credential stored in memory"
        );

        Ok(credential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_then_find() -> anyhow::Result<()> {
        let store = MemoryCredentialStore::new();
        let created = store.insert("Ada@Example.com ", "$hash", Some(" Ada ")).await?;

        assert_eq!(created.user_id, 1);
        assert_eq!(created.email, "ada@example.com");
        assert_eq!(created.name.as_deref(), Some("Ada"));

        let found = store.find_by_email("ada@example.com").await?;
        assert_eq!(found, Some(created));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_normalized_email_is_rejected() -> anyhow::Result<()> {
        let store = MemoryCredentialStore::new();
        store.insert("ada@example.com", "$hash", None).await?;

        let result = store.insert("  ADA@example.com", "$other", None).await;
        assert!(matches!(result, Err(StoreError::Duplicate)));
        assert_eq!(store.len().await, 1);
        Ok(())
    }

    #[tokio::test]
    async fn ids_are_sequential_and_clones_share_state() -> anyhow::Result<()> {
        let store = MemoryCredentialStore::new();
        let clone = store.clone();

        let first = store.insert("a@example.com", "$hash", None).await?;
        let second = clone.insert("b@example.com", "$hash", None).await?;

        assert_eq!((first.user_id, second.user_id), (1, 2));
        assert!(store.find_by_email("b@example.com").await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_email_is_none() -> anyhow::Result<()> {
        let store = MemoryCredentialStore::new();
        assert!(store.is_empty().await);
        assert_eq!(store.find_by_email("nobody@example.com").await?, None);
        Ok(())
    }
}
