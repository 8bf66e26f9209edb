//! Request deadline and panic recovery.
//!
//! A handler that outlives [`RecoveryConfig::request_timeout`] is answered
//! with `503 request_timeout`. A panicking handler is answered with a generic
//! `500` and the panic payload stays in the logs.

use std::any::Any;
use std::future::ready;
use std::time::Duration;

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::response::{IntoResponse, Response};
#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower::timeout::error::Elapsed;
use tower_http::catch_panic::CatchPanicLayer;

use crate::handler::{Error, ErrorKind};
use crate::utility::tracing_targets::{RECOVERY_ERROR, RECOVERY_PANIC};

/// Seconds a request may run when no timeout is configured.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Request deadline settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct RecoveryConfig {
    /// Seconds a handler may run before the request is abandoned.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "REQUEST_TIMEOUT", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)
    )]
    pub request_timeout: u64,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self::with_timeout_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
    }
}

impl RecoveryConfig {
    pub fn with_timeout_secs(secs: u64) -> Self {
        Self {
            request_timeout: secs,
        }
    }

    /// Returns the request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

/// Extension trait for `axum::`[`Router`] to apply recovery middleware.
pub trait RouterRecoveryExt<S> {
    /// Bounds every request by the configured deadline and turns panics into
    /// JSON errors.
    fn with_recovery(self, config: &RecoveryConfig) -> Self;

    /// Same as [`with_recovery`](Self::with_recovery) with
    /// [`DEFAULT_REQUEST_TIMEOUT_SECS`].
    fn with_default_recovery(self) -> Self;
}

impl<S> RouterRecoveryExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_recovery(self, config: &RecoveryConfig) -> Self {
        let timeout = config.request_timeout();
        let middlewares = ServiceBuilder::new()
            .layer(HandleErrorLayer::new(move |err: tower::BoxError| {
                ready(middleware_failure(err, timeout).into_response())
            }))
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(TimeoutLayer::new(timeout));

        self.layer(middlewares)
    }

    fn with_default_recovery(self) -> Self {
        self.with_recovery(&RecoveryConfig::default())
    }
}

/// Maps an error raised by the layers below [`HandleErrorLayer`].
fn middleware_failure(err: tower::BoxError, timeout: Duration) -> Error<'static> {
    if err.is::<Elapsed>() {
        tracing::warn!(
            target: RECOVERY_ERROR,
            timeout_secs = timeout.as_secs(),
            "request abandoned after deadline"
        );

        return ErrorKind::RequestTimeout
            .with_resource("request")
            .with_context(format!("Deadline is {} seconds", timeout.as_secs()));
    }

    tracing::error!(target: RECOVERY_ERROR, error = %err, "middleware failure");
    ErrorKind::InternalServerError.into_error()
}

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    // Handlers may panic with an `Error` to short-circuit with a typed response.
    if let Some(error) = payload.downcast_ref::<Error>() {
        tracing::error!(target: RECOVERY_PANIC, error = %error, "handler panicked");
        return error.clone().into_response();
    }

    let message = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    tracing::error!(target: RECOVERY_PANIC, panic = message, "handler panicked");

    ErrorKind::InternalServerError.into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum_test::TestServer;

    use super::*;

    async fn boom() -> &'static str {
        panic!("handler exploded")
    }

    async fn rejected() -> &'static str {
        std::panic::panic_any(ErrorKind::NotFound.with_resource("task").into_static())
    }

    async fn slow() -> &'static str {
        tokio::time::sleep(Duration::from_secs(5)).await;
        "done"
    }

    #[test]
    fn default_timeout() {
        assert_eq!(
            RecoveryConfig::default().request_timeout(),
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
        assert_eq!(
            RecoveryConfig::with_timeout_secs(7).request_timeout(),
            Duration::from_secs(7)
        );
    }

    #[tokio::test]
    async fn panic_hides_payload() -> anyhow::Result<()> {
        let router = Router::new().route("/boom", get(boom)).with_default_recovery();
        let server = TestServer::new(router)?;

        let response = server.get("/boom").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = response.json();
        assert_eq!(body["name"], "internal_server_error");
        assert!(!response.text().contains("exploded"));
        Ok(())
    }

    #[tokio::test]
    async fn panic_with_error_keeps_its_kind() -> anyhow::Result<()> {
        let router = Router::new()
            .route("/rejected", get(rejected))
            .with_default_recovery();
        let server = TestServer::new(router)?;

        let response = server.get("/rejected").await;
        response.assert_status_not_found();

        let body: serde_json::Value = response.json();
        assert_eq!(body["resource"], "task");
        Ok(())
    }

    #[tokio::test]
    async fn deadline_is_request_timeout() -> anyhow::Result<()> {
        let router = Router::new()
            .route("/slow", get(slow))
            .with_recovery(&RecoveryConfig::with_timeout_secs(0));
        let server = TestServer::new(router)?;

        let response = server.get("/slow").await;
        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

        let body: serde_json::Value = response.json();
        assert_eq!(body["name"], "request_timeout");
        assert_eq!(body["resource"], "request");
        assert_eq!(body["context"], "Deadline is 0 seconds");
        Ok(())
    }
}
