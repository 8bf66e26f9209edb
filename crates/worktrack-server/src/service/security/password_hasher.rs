//! Password hashing and verification using Argon2id.
//!
//! Stored values are PHC strings (`$argon2id$v=19$m=..,t=..,p=..$<salt>$<digest>`)
//! so the salt and work factor travel with the digest.

use std::sync::Arc;

use argon2::password_hash::{Error as ArgonError, SaltString};
use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher as _, PasswordVerifier, Version,
};
#[cfg(any(test, feature = "config"))]
use clap::Args;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::utility::tracing_targets::PASSWORD_HASHER as TRACING_TARGET;
use crate::{Error, Result};

/// Accepted plaintext length in bytes.
const PASSWORD_LEN_RANGE: std::ops::RangeInclusive<usize> = 1..=128;

/// Salt length in bytes.
const SALT_LEN: usize = 16;

/// Argon2id work factor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "config"), derive(Args))]
pub struct PasswordHasherConfig {
    /// Argon2 memory cost in KiB
    #[cfg_attr(
        any(test, feature = "config"),
        arg(long = "argon2-memory-kib", env = "ARGON2_MEMORY_KIB", default_value_t = Params::DEFAULT_M_COST)
    )]
    #[serde(default = "PasswordHasherConfig::default_memory_cost")]
    pub memory_cost_kib: u32,

    /// Argon2 iteration count
    #[cfg_attr(
        any(test, feature = "config"),
        arg(long = "argon2-iterations", env = "ARGON2_ITERATIONS", default_value_t = Params::DEFAULT_T_COST)
    )]
    #[serde(default = "PasswordHasherConfig::default_iterations")]
    pub iterations: u32,

    /// Argon2 degree of parallelism
    #[cfg_attr(
        any(test, feature = "config"),
        arg(long = "argon2-parallelism", env = "ARGON2_PARALLELISM", default_value_t = Params::DEFAULT_P_COST)
    )]
    #[serde(default = "PasswordHasherConfig::default_parallelism")]
    pub parallelism: u32,
}

impl PasswordHasherConfig {
    fn default_memory_cost() -> u32 {
        Params::DEFAULT_M_COST
    }

    fn default_iterations() -> u32 {
        Params::DEFAULT_T_COST
    }

    fn default_parallelism() -> u32 {
        Params::DEFAULT_P_COST
    }
}

impl Default for PasswordHasherConfig {
    fn default() -> Self {
        Self {
            memory_cost_kib: Self::default_memory_cost(),
            iterations: Self::default_iterations(),
            parallelism: Self::default_parallelism(),
        }
    }
}

/// Argon2id password hasher, cheap to clone and safe to share across requests.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
    /// PHC hash of a random password, verified against for unknown accounts.
    dummy_hash: Arc<str>,
    #[cfg(test)]
    kdf_passes: Arc<std::sync::atomic::AtomicUsize>,
}

impl PasswordHasher {
    /// Creates a hasher with the configured work factor.
    ///
    /// Hashes one random password up front so that [`verify_dummy_password`]
    /// costs exactly one verification.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if Argon2 rejects the parameters.
    ///
    /// [`verify_dummy_password`]: PasswordHasher::verify_dummy_password
    pub fn from_config(config: &PasswordHasherConfig) -> Result<Self> {
        let params = Params::new(
            config.memory_cost_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| Error::config(format!("invalid argon2 parameters: {e}")))?;

        let mut hasher = Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
            dummy_hash: Arc::from(""),
            #[cfg(test)]
            kdf_passes: Arc::default(),
        };
        hasher.dummy_hash = hasher.hash_password(&random_password())?.into();

        tracing::debug!(
            target: TRACING_TARGET,
            memory_cost_kib = config.memory_cost_kib,
            iterations = config.iterations,
            parallelism = config.parallelism,
            "password hasher configured"
        );

        Ok(hasher)
    }

    #[cfg(test)]
    fn record_kdf_pass(&self) {
        self.kdf_passes
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
    }

    #[cfg(not(test))]
    #[inline]
    fn record_kdf_pass(&self) {}

    /// Hashes a password with a fresh random salt, returning a PHC string.
    ///
    /// # Errors
    ///
    /// Fails for plaintext outside 1..=128 bytes (callers validate first)
    /// and on internal Argon2 failures.
    pub fn hash_password(&self, password: &str) -> Result<String> {
        if !PASSWORD_LEN_RANGE.contains(&password.len()) {
            return Err(Error::internal(
                "password_hasher",
                format!("password length {} is out of range", password.len()),
            ));
        }

        let mut salt_bytes = [0u8; SALT_LEN];
        rand::rng().fill_bytes(&mut salt_bytes);

        let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| {
            tracing::error!(
                target: TRACING_TARGET,
                error = %e,
                "failed to encode password salt"
            );
            Error::internal("password_hasher", "salt encoding failed")
        })?;

        self.record_kdf_pass();
        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %e,
                    "password hashing operation failed"
                );
                Error::internal("password_hasher", "hash generation failed")
            })?;

        Ok(password_hash.to_string())
    }

    /// Verifies a password against a stored PHC string.
    ///
    /// Returns `false` on mismatch and on malformed stored values; never fails.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        if !PASSWORD_LEN_RANGE.contains(&password.len()) {
            return false;
        }

        let parsed_hash = match PasswordHash::new(stored_hash) {
            Ok(parsed_hash) => parsed_hash,
            Err(e) => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    error = %e,
                    "stored password hash is malformed"
                );
                return false;
            }
        };

        self.record_kdf_pass();
        match self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(()) => true,
            Err(ArgonError::Password) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    "password verification failed"
                );
                false
            }
            Err(e) => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    error = %e,
                    "password verification error"
                );
                false
            }
        }
    }

    /// Verifies against a precomputed hash so that logins against unknown
    /// emails cost the same as wrong passwords. Always returns `false`.
    pub fn verify_dummy_password(&self, password: &str) -> bool {
        let _ = self.verify_password(password, &self.dummy_hash);
        false
    }
}

/// Random alphanumeric password of 16 to 31 characters.
fn random_password() -> String {
    let mut rng = rand::rng();
    let password_len = rng.random_range(16..32);
    (0..password_len)
        .map(|_| rng.sample(rand::distr::Alphanumeric) as char)
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Cheap parameters so tests stay fast.
    pub(crate) fn fast_hasher() -> PasswordHasher {
        let config = PasswordHasherConfig {
            memory_cost_kib: 256,
            iterations: 1,
            parallelism: 1,
        };

        PasswordHasher::from_config(&config).expect("valid test parameters")
    }

    #[test]
    fn hash_and_verify_password() -> anyhow::Result<()> {
        let hasher = fast_hasher();
        let hash = hasher.hash_password("secure_password_123")?;

        assert!(hash.starts_with("$argon2id$v=19$m=256,t=1,p=1$"));
        assert!(hasher.verify_password("secure_password_123", &hash));
        assert!(!hasher.verify_password("wrong_password", &hash));
        Ok(())
    }

    #[test]
    fn same_password_gets_distinct_salts() -> anyhow::Result<()> {
        let hasher = fast_hasher();

        let hash1 = hasher.hash_password("test_password")?;
        let hash2 = hasher.hash_password("test_password")?;

        assert_ne!(hash1, hash2);
        assert!(hasher.verify_password("test_password", &hash1));
        assert!(hasher.verify_password("test_password", &hash2));
        Ok(())
    }

    #[test]
    fn malformed_hash_is_false() {
        let hasher = fast_hasher();

        assert!(!hasher.verify_password("test_password", "invalid_hash_format"));
        assert!(!hasher.verify_password("test_password", ""));
        assert!(!hasher.verify_password("test_password", "$argon2id$v=19$garbage"));
    }

    #[test]
    fn rejects_out_of_range_lengths() -> anyhow::Result<()> {
        let hasher = fast_hasher();

        assert!(hasher.hash_password("").is_err());
        assert!(hasher.hash_password(&"x".repeat(129)).is_err());

        let longest = "x".repeat(128);
        let hash = hasher.hash_password(&longest)?;
        assert!(hasher.verify_password(&longest, &hash));
        assert!(!hasher.verify_password("", &hash));
        Ok(())
    }

    #[test]
    fn verifies_hash_made_with_other_parameters() -> anyhow::Result<()> {
        let hash = fast_hasher().hash_password("portable")?;
        let other = PasswordHasher::from_config(&PasswordHasherConfig {
            memory_cost_kib: 512,
            iterations: 2,
            parallelism: 1,
        })?;

        assert!(other.verify_password("portable", &hash));
        Ok(())
    }

    fn kdf_passes(hasher: &PasswordHasher) -> usize {
        hasher.kdf_passes.load(std::sync::atomic::Ordering::Relaxed)
    }

    #[test]
    fn dummy_verification_is_false() {
        assert!(!fast_hasher().verify_dummy_password("anything"));
    }

    #[test]
    fn dummy_verification_costs_one_kdf_pass() -> anyhow::Result<()> {
        let hasher = fast_hasher();
        let stored = hasher.hash_password("correct-horse")?;

        let before = kdf_passes(&hasher);
        assert!(!hasher.verify_password("wrong-horse", &stored));
        let known_cost = kdf_passes(&hasher) - before;

        let before = kdf_passes(&hasher);
        assert!(!hasher.verify_dummy_password("wrong-horse"));
        let unknown_cost = kdf_passes(&hasher) - before;

        assert_eq!(known_cost, 1);
        assert_eq!(unknown_cost, known_cost);
        Ok(())
    }

    #[test]
    fn dummy_hash_uses_configured_work_factor() {
        let hasher = fast_hasher();
        assert!(hasher.dummy_hash.starts_with("$argon2id$v=19$m=256,t=1,p=1$"));
        assert_eq!(hasher.clone().dummy_hash, hasher.dummy_hash);
    }

    #[test]
    fn oversized_password_costs_nothing_on_either_path() -> anyhow::Result<()> {
        let hasher = fast_hasher();
        let stored = hasher.hash_password("correct-horse")?;
        let long = "x".repeat(200);

        let before = kdf_passes(&hasher);
        assert!(!hasher.verify_password(&long, &stored));
        assert!(!hasher.verify_dummy_password(&long));
        assert_eq!(kdf_passes(&hasher), before);
        Ok(())
    }

    #[test]
    fn invalid_parameters_are_config_errors() {
        let config = PasswordHasherConfig {
            memory_cost_kib: 0,
            iterations: 0,
            parallelism: 0,
        };

        let error = PasswordHasher::from_config(&config).unwrap_err();
        assert_eq!(error.kind(), crate::ErrorKind::Config);
    }
}
