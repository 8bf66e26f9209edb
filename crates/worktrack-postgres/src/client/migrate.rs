//! Applies the embedded migrations on a pooled connection.

use std::time::Instant;

use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::MigrationHarness;
use tokio::task::spawn_blocking;

use crate::{MIGRATIONS, PgClient, PgError, PgResult, TRACING_TARGET_MIGRATION};

/// Runs all pending migrations, returning the versions that were applied.
///
/// Safe to call on every startup; an up-to-date schema applies nothing.
#[tracing::instrument(skip(pg), target = TRACING_TARGET_MIGRATION)]
pub async fn run_pending_migrations(pg: &PgClient) -> PgResult<Vec<String>> {
    tracing::info!(
        target: TRACING_TARGET_MIGRATION,
        "Starting database migration process",
    );

    let start_time = Instant::now();
    let conn = pg.get_pooled_connection().await?;

    // The harness is synchronous, so it runs on the blocking pool.
    let mut conn: AsyncConnectionWrapper<_> = conn.into();
    let results = spawn_blocking(move || {
        conn.run_pending_migrations(MIGRATIONS).map(|versions| {
            versions
                .into_iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
        })
    })
    .await;

    let duration = start_time.elapsed();
    let results = results.map_err(|err| {
        tracing::error!(
            target: TRACING_TARGET_MIGRATION,
            duration = ?duration,
            error = %err,
            "Migration task panicked, join error occurred"
        );

        PgError::Migration(err.into())
    })?;

    let versions = results.map_err(|err| {
        tracing::error!(
            target: TRACING_TARGET_MIGRATION,
            duration = ?duration,
            error = %err,
            "Database migration process failed"
        );

        PgError::Migration(err)
    })?;

    if versions.is_empty() {
        tracing::info!(
            target: TRACING_TARGET_MIGRATION,
            "Database schema is already up to date"
        );
    } else {
        tracing::info!(
            target: TRACING_TARGET_MIGRATION,
            duration = ?duration,
            migrations_count = versions.len(),
            versions = ?versions,
            "Database migration process completed"
        );
    }

    Ok(versions)
}
