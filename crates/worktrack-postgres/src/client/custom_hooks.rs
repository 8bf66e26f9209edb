//! Connection setup and pool lifecycle hooks for [`diesel_async`] and [`deadpool`].

use std::time::Instant;

use deadpool::managed::{HookResult, Metrics};
use diesel::ConnectionResult;
use diesel_async::pooled_connection::{PoolError, PoolableConnection};
use diesel_async::{AsyncConnection, AsyncPgConnection};
use futures::FutureExt;
use futures::future::BoxFuture;

use super::PgConfig;
use crate::TRACING_TARGET_CONNECTION;

/// Establishes a new connection, logging how long it took.
///
/// See [`ManagerConfig`] for more details.
///
/// [`ManagerConfig`]: diesel_async::pooled_connection::ManagerConfig
pub fn setup_callback<C>(addr: &str) -> BoxFuture<'_, ConnectionResult<C>>
where
    C: AsyncConnection + 'static,
{
    let start = Instant::now();
    let masked_addr = PgConfig::mask_url(addr);

    async move {
        let result = C::establish(addr).await;
        let elapsed_ms = start.elapsed().as_millis();

        match &result {
            Ok(_) => tracing::debug!(
                target: TRACING_TARGET_CONNECTION,
                addr = %masked_addr,
                elapsed_ms,
                "database connection established"
            ),
            Err(err) => tracing::error!(
                target: TRACING_TARGET_CONNECTION,
                addr = %masked_addr,
                elapsed_ms,
                error = %err,
                "failed to establish database connection"
            ),
        }

        result
    }
    .boxed()
}

/// Runs after a connection is added to the pool.
pub fn post_create(conn: &mut AsyncPgConnection, metrics: &Metrics) -> HookResult<PoolError> {
    log_connection_state("post_create", conn, metrics);
    Ok(())
}

/// Runs after a connection is handed back out of the pool.
pub fn post_recycle(conn: &mut AsyncPgConnection, metrics: &Metrics) -> HookResult<PoolError> {
    log_connection_state("post_recycle", conn, metrics);
    Ok(())
}

fn log_connection_state(hook: &'static str, conn: &mut AsyncPgConnection, metrics: &Metrics) {
    if conn.is_broken() {
        tracing::warn!(
            target: TRACING_TARGET_CONNECTION,
            hook,
            recycle_count = metrics.recycle_count,
            "pooled connection is broken"
        );
        return;
    }

    tracing::trace!(
        target: TRACING_TARGET_CONNECTION,
        hook,
        created_at = ?metrics.created,
        recycle_count = metrics.recycle_count,
        "pooled connection healthy"
    );
}
