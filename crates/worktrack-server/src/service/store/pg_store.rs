use async_trait::async_trait;
use worktrack_postgres::model::{NewUser, User};
use worktrack_postgres::query::UserRepository;
use worktrack_postgres::types::ConstraintViolation;
use worktrack_postgres::{PgClient, PgError};

use super::{Credential, CredentialStore, StoreError, StoreResult, normalize_email, normalize_name};
use crate::utility::tracing_targets::CREDENTIAL_STORE as TRACING_TARGET;

/// Credential store backed by the `users` table.
#[derive(Debug, Clone)]
pub struct PgCredentialStore {
    pg_client: PgClient,
}

impl PgCredentialStore {
    pub fn new(pg_client: PgClient) -> Self {
        Self { pg_client }
    }
}

impl From<User> for Credential {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            email: user.email,
            name: user.name,
            password_hash: user.password_hash,
        }
    }
}

impl From<PgError> for StoreError {
    fn from(error: PgError) -> Self {
        match error.constraint_violation() {
            Some(ConstraintViolation::UserEmailUnique) => StoreError::Duplicate,
            _ => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %error,
                    "credential query failed"
                );
                StoreError::backend(error)
            }
        }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Credential>> {
        let mut conn = self.pg_client.get_connection().await?;
        let user = conn.find_user_by_email(&normalize_email(email)).await?;
        Ok(user.map(Credential::from))
    }

    async fn insert(
        &self,
        email: &str,
        password_hash: &str,
        name: Option<&str>,
    ) -> StoreResult<Credential> {
        let mut conn = self.pg_client.get_connection().await?;
        let new_user = NewUser {
            email: normalize_email(email),
            password_hash: password_hash.to_owned(),
            name: normalize_name(name),
        };

        let user = conn.create_user(new_user).await?;
        tracing::debug!(
            target: TRACING_TARGET,
            user_id = user.id,
            "credential stored"
        );

        Ok(user.into())
    }
}

#[cfg(test)]
mod tests {
    use worktrack_postgres::PgConfig;

    use super::*;

    #[test]
    fn user_maps_to_credential() {
        let user = User {
            id: 9,
            email: "ada@example.com".into(),
            password_hash: "$argon2id$...".into(),
            name: None,
            created_at: jiff::Timestamp::UNIX_EPOCH.into(),
        };

        let credential = Credential::from(user);
        assert_eq!(credential.user_id, 9);
        assert_eq!(credential.email, "ada@example.com");
    }

    #[test]
    fn non_constraint_errors_are_backend() {
        let error = StoreError::from(PgError::Unexpected("boom".into()));
        assert!(matches!(error, StoreError::Backend(_)));
    }

    #[tokio::test]
    async fn unreachable_database_is_backend_error() -> anyhow::Result<()> {
        let config = PgConfig::new("postgresql://worktrack@127.0.0.1:1/worktrack")
            .with_connection_timeout_secs(1);
        let store = PgCredentialStore::new(PgClient::new(config)?);

        let result = store.find_by_email("ada@example.com").await;
        assert!(matches!(result, Err(StoreError::Backend(_))));
        Ok(())
    }
}
