//! Bulk removal of the caller's tasks, timers and reminders.
//!
//! Notes and the account itself are kept.

use axum::Router;
use axum::extract::State;
use axum::routing::delete;
use worktrack_postgres::query::{ReminderRepository, TaskRepository, TimerRepository};
use worktrack_postgres::{PgClient, PgError};

use crate::extract::{AuthState, Json};
use crate::handler::Result;
use crate::handler::response::ClearAllResponse;
use crate::service::ServiceState;

/// Tracing target for clear-all operations.
const TRACING_TARGET: &str = "worktrack_server::handler::clear_all";

/// Deletes all of the caller's tasks, timers and reminders in one transaction.
#[tracing::instrument(skip_all, fields(user_id = auth_state.user_id))]
async fn clear_all(
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
) -> Result<Json<ClearAllResponse>> {
    let user_id = auth_state.user_id;
    let mut conn = pg_client.get_connection().await?;

    let (tasks_deleted, timers_deleted, reminders_deleted) = conn
        .transaction(|conn| {
            Box::pin(async move {
                let tasks = conn.delete_all_tasks(user_id).await?;
                let timers = conn.delete_all_timers(user_id).await?;
                let reminders = conn.delete_all_reminders(user_id).await?;
                Ok::<(usize, usize, usize), PgError>((tasks, timers, reminders))
            })
        })
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        tasks_deleted,
        timers_deleted,
        reminders_deleted,
        "user data cleared"
    );

    Ok(Json(ClearAllResponse {
        message: "All data cleared successfully".to_owned(),
        tasks_deleted,
        timers_deleted,
        reminders_deleted,
    }))
}

pub fn routes() -> Router<ServiceState> {
    Router::new().route("/api/clear-all", delete(clear_all))
}
