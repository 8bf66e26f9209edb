//! Liveness probe.

use axum::Router;
use axum::routing::get;

use crate::extract::Json;
use crate::handler::response::HealthStatus;
use crate::service::ServiceState;

/// Reports that the process is serving requests. Does not touch the database.
#[tracing::instrument(skip_all)]
async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::default())
}

pub fn routes() -> Router<ServiceState> {
    Router::new().route("/health", get(health))
}
