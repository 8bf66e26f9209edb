//! Request tracing with request IDs and redacted credentials.

use axum::Router;
use axum::http::HeaderName;
use axum::http::header;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::sensitive_headers::{
    SetSensitiveRequestHeadersLayer, SetSensitiveResponseHeadersLayer,
};
use tower_http::trace::TraceLayer;

/// Header carrying the per-request identifier.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Extension trait for `axum::`[`Router`] to apply observability middleware.
pub trait RouterObservabilityExt<S> {
    /// Layers request ID generation and propagation, sensitive header
    /// redaction and a [`TraceLayer`] span per request.
    fn with_observability(self) -> Self;
}

impl<S> RouterObservabilityExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_observability(self) -> Self {
        let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

        // Layers wrap in reverse order: the request ID is set before tracing starts.
        self.layer(PropagateRequestIdLayer::new(request_id.clone()))
            .layer(SetSensitiveResponseHeadersLayer::new([header::SET_COOKIE]))
            .layer(SetSensitiveRequestHeadersLayer::new([
                header::AUTHORIZATION,
                header::COOKIE,
            ]))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
    }
}

#[cfg(test)]
mod tests {
    use axum::routing::get;
    use axum_test::TestServer;

    use super::*;

    #[tokio::test]
    async fn generates_and_propagates_request_id() -> anyhow::Result<()> {
        let router = Router::new()
            .route("/", get(|| async { "ok" }))
            .with_observability();
        let server = TestServer::new(router)?;

        let response = server.get("/").await;
        response.assert_status_ok();
        assert!(!response.header(REQUEST_ID_HEADER).is_empty());

        let response = server
            .get("/")
            .add_header(REQUEST_ID_HEADER, "req-123")
            .await;
        assert_eq!(response.header(REQUEST_ID_HEADER), "req-123");
        Ok(())
    }
}
