//! Health check response types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Liveness probe response.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always `ok` while the process serves requests.
    pub status: String,
    pub checked_at: Timestamp,
    pub version: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "ok".to_owned(),
            checked_at: Timestamp::now(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}
