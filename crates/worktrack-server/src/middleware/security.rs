//! Security middleware: CORS, request body limits and response hardening headers.

use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::Method;
use axum::http::header::{self, HeaderValue};
#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;

/// Origins allowed when none are configured.
const DEVELOPMENT_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:5173",
    "http://127.0.0.1:5173",
];

/// Extension trait for `axum::`[`Router`] to apply security middleware.
pub trait RouterSecurityExt<S> {
    /// Layers CORS, the body size limit and hardening headers.
    fn with_security(self, config: &SecurityConfig) -> Self;

    /// Layers security middleware with development-friendly defaults.
    fn with_default_security(self) -> Self;
}

impl<S> RouterSecurityExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_security(self, config: &SecurityConfig) -> Self {
        let cors_layer = CorsLayer::new()
            .allow_origin(config.cors.to_header_values())
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
            .allow_credentials(config.cors.allow_credentials)
            .max_age(config.cors.max_age());

        self.layer(DefaultBodyLimit::max(config.max_body_size))
            .layer(RequestBodyLimitLayer::new(config.max_body_size))
            .layer(cors_layer)
            .layer(SetResponseHeaderLayer::overriding(
                header::X_FRAME_OPTIONS,
                HeaderValue::from_static("DENY"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::REFERRER_POLICY,
                HeaderValue::from_static("strict-origin-when-cross-origin"),
            ))
    }

    fn with_default_security(self) -> Self {
        self.with_security(&SecurityConfig::default())
    }
}

/// Security middleware configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct SecurityConfig {
    /// Cross-origin resource sharing rules.
    #[cfg_attr(feature = "config", command(flatten))]
    pub cors: CorsConfig,

    /// Maximum request body size in bytes.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "MAX_BODY_SIZE", default_value = "1048576")
    )]
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            cors: CorsConfig::default(),
            max_body_size: 1024 * 1024,
        }
    }
}

/// CORS (Cross-Origin Resource Sharing) configuration.
///
/// The browser client sends the session cookie, so credentials are allowed by
/// default and origins must be listed explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct CorsConfig {
    /// List of allowed CORS origins. Empty means local development origins.
    #[cfg_attr(
        feature = "config",
        arg(long = "cors-origins", env = "CORS_ORIGINS", value_delimiter = ',')
    )]
    pub allowed_origins: Vec<String>,

    /// Maximum age for CORS preflight requests in seconds.
    #[cfg_attr(
        feature = "config",
        arg(long = "cors-max-age", env = "CORS_MAX_AGE", default_value = "3600")
    )]
    pub max_age_seconds: u64,

    /// Whether to allow credentials in CORS requests.
    #[cfg_attr(
        feature = "config",
        arg(long = "cors-allow-credentials", env = "CORS_ALLOW_CREDENTIALS", default_value = "true")
    )]
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_age_seconds: 3600,
            allow_credentials: true,
        }
    }
}

impl CorsConfig {
    /// Returns the preflight max age as a [`Duration`].
    pub fn max_age(&self) -> Duration {
        Duration::from_secs(self.max_age_seconds)
    }

    /// Converts configured origins to header values, skipping unparsable ones.
    pub fn to_header_values(&self) -> Vec<HeaderValue> {
        if self.allowed_origins.is_empty() {
            return DEVELOPMENT_ORIGINS
                .into_iter()
                .map(HeaderValue::from_static)
                .collect();
        }

        self.allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum_test::TestServer;

    use super::*;

    #[test]
    fn development_origins_when_unset() {
        let values = CorsConfig::default().to_header_values();
        assert_eq!(values.len(), DEVELOPMENT_ORIGINS.len());
        assert_eq!(values[0], "http://localhost:3000");
    }

    #[test]
    fn configured_origins_skip_invalid() {
        let config = CorsConfig {
            allowed_origins: vec!["https://app.example.com".into(), "bad\norigin".into()],
            ..CorsConfig::default()
        };

        assert_eq!(config.to_header_values(), vec![HeaderValue::from_static(
            "https://app.example.com"
        )]);
    }

    #[tokio::test]
    async fn oversized_bodies_are_rejected() -> anyhow::Result<()> {
        let config = SecurityConfig {
            max_body_size: 16,
            ..SecurityConfig::default()
        };
        let router = Router::new()
            .route("/echo", post(|body: String| async move { body }))
            .with_security(&config);
        let server = TestServer::new(router)?;

        let response = server.post("/echo").text("x".repeat(64)).await;
        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);

        let response = server.post("/echo").text("small").await;
        response.assert_status_ok();
        assert_eq!(response.header(header::X_CONTENT_TYPE_OPTIONS), "nosniff");
        Ok(())
    }
}
