//! Application state and dependency injection.

mod config;
mod security;
mod store;

use std::sync::Arc;

use worktrack_postgres::PgClient;

pub use crate::service::config::{ServiceConfig, ServiceConfigBuilder};
#[cfg(test)]
pub(crate) use crate::service::security::fast_hasher;
pub use crate::service::security::{
    AuthClaims, CookiePolicy, PasswordHasher, PasswordHasherConfig, SessionKeys,
    SessionKeysConfig, TOKEN_LIFETIME_SECS, TokenIssuer, TokenSubject, TokenVerifier,
};
pub use crate::service::store::{
    Credential, CredentialStore, MemoryCredentialStore, PgCredentialStore,
    SharedCredentialStore, StoreError, StoreResult, normalize_email,
};
use crate::utility::tracing_targets::SERVICE_STATE as TRACING_TARGET;
pub use crate::{Error, Result};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    // External services:
    pub pg_client: PgClient,
    pub credential_store: SharedCredentialStore,

    // Internal services:
    pub password_hasher: PasswordHasher,
    pub session_keys: SessionKeys,
    pub token_issuer: TokenIssuer,
    pub token_verifier: TokenVerifier,
    pub cookie_policy: CookiePolicy,
}

impl ServiceState {
    /// Initializes application state from configuration.
    ///
    /// Connects to Postgres, applies migrations and stores credentials in
    /// the `users` table.
    pub async fn from_config(service_config: &ServiceConfig) -> Result<Self> {
        let pg_client = service_config.connect_postgres().await?;
        let credential_store = Arc::new(PgCredentialStore::new(pg_client.clone()));

        Self::with_credential_store(service_config, pg_client, credential_store)
    }

    /// Assembles state around an existing client and credential store.
    pub fn with_credential_store(
        service_config: &ServiceConfig,
        pg_client: PgClient,
        credential_store: SharedCredentialStore,
    ) -> Result<Self> {
        let session_keys = service_config.load_session_keys()?;

        let service_state = Self {
            pg_client,
            credential_store,

            password_hasher: service_config.create_password_hasher()?,
            token_issuer: TokenIssuer::new(session_keys.clone()),
            token_verifier: TokenVerifier::new(session_keys.clone()),
            session_keys,
            cookie_policy: CookiePolicy::new(service_config.production),
        };

        tracing::debug!(
            target: TRACING_TARGET,
            production = service_config.production,
            development_secret = service_state.session_keys.is_development(),
            "service state initialized"
        );

        Ok(service_state)
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

// External services:
impl_di!(pg_client: PgClient);
impl_di!(credential_store: SharedCredentialStore);

// Internal services:
impl_di!(password_hasher: PasswordHasher);
impl_di!(session_keys: SessionKeys);
impl_di!(token_issuer: TokenIssuer);
impl_di!(token_verifier: TokenVerifier);
impl_di!(cookie_policy: CookiePolicy);
