#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use anyhow::Context;
use axum::Router;
use worktrack_server::handler::routes;
use worktrack_server::middleware::{RouterObservabilityExt, RouterRecoveryExt, RouterSecurityExt};
use worktrack_server::service::ServiceState;

use crate::config::{Cli, MiddlewareConfig};

// Tracing target constants
pub const TRACING_TARGET_SERVER_STARTUP: &str = "worktrack_cli::server::startup";
pub const TRACING_TARGET_SERVER_SHUTDOWN: &str = "worktrack_cli::server::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "worktrack_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            error = format!("{error:#}"),
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();
    cli.init_tracing();

    tracing::info!(
        target: TRACING_TARGET_SERVER_STARTUP,
        version = env!("CARGO_PKG_VERSION"),
        "starting worktrack server"
    );

    cli.log();
    cli.validate()?;

    let state = ServiceState::from_config(&cli.service)
        .await
        .context("failed to create service state")?;
    let router = create_router(state, &cli.middleware);

    server::serve(router, cli.server).await?;

    Ok(())
}

/// Creates the router with all middleware layers applied.
///
/// Layers added last run first:
/// 1. Recovery (outermost) - catches panics and enforces timeouts
/// 2. Observability - request IDs and tracing spans
/// 3. Security - CORS, security headers and body limits
/// 4. Routes (innermost) - authentication and resource handlers
fn create_router(state: ServiceState, middleware: &MiddlewareConfig) -> Router {
    routes(state.clone())
        .with_state(state)
        .with_security(&middleware.security)
        .with_observability()
        .with_recovery(&middleware.recovery)
}
