//! Path parameter types for HTTP handlers.

use serde::{Deserialize, Serialize};

/// Path parameters for operations on a single owned row.
///
/// A non-numeric id fails to deserialize and is reported as `400`.
#[must_use]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IdPathParams {
    /// Row identifier.
    pub id: i64,
}
