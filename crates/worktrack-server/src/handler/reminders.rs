//! Reminder handlers.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, put};
use worktrack_postgres::PgClient;
use worktrack_postgres::query::ReminderRepository;

use crate::extract::{AuthState, Json, Path, ValidateJson};
use crate::handler::request::{CreateReminder, IdPathParams, UpdateReminderRequest};
use crate::handler::response::{DeletedResponse, MessageResponse, Reminder, Reminders};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for reminder operations.
const TRACING_TARGET: &str = "worktrack_server::handler::reminders";

#[tracing::instrument(skip_all, fields(user_id = auth_state.user_id))]
async fn list_reminders(
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
) -> Result<Json<Reminders>> {
    let mut conn = pg_client.get_connection().await?;
    let reminders = conn.list_reminders(auth_state.user_id).await?;
    Ok(Json(reminders.into_iter().map(Reminder::from).collect()))
}

#[tracing::instrument(skip_all, fields(user_id = auth_state.user_id))]
async fn create_reminder(
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
    ValidateJson(request): ValidateJson<CreateReminder>,
) -> Result<(StatusCode, Json<Reminder>)> {
    let mut conn = pg_client.get_connection().await?;
    let reminder = conn
        .create_reminder(request.into_model(auth_state.user_id))
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        reminder_id = reminder.id,
        "reminder created"
    );
    Ok((StatusCode::CREATED, Json(reminder.into())))
}

/// Reschedules or (de)activates a reminder.
#[tracing::instrument(skip_all, fields(user_id = auth_state.user_id, reminder_id = params.id))]
async fn update_reminder(
    Path(params): Path<IdPathParams>,
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
    ValidateJson(request): ValidateJson<UpdateReminderRequest>,
) -> Result<Json<Reminder>> {
    let mut conn = pg_client.get_connection().await?;
    let reminder = conn
        .update_reminder(params.id, auth_state.user_id, request.into_model())
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("reminder"))?;

    Ok(Json(reminder.into()))
}

#[tracing::instrument(skip_all, fields(user_id = auth_state.user_id, reminder_id = params.id))]
async fn delete_reminder(
    Path(params): Path<IdPathParams>,
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
) -> Result<Json<MessageResponse>> {
    let mut conn = pg_client.get_connection().await?;
    if !conn.delete_reminder(params.id, auth_state.user_id).await? {
        return Err(ErrorKind::NotFound.with_resource("reminder"));
    }

    Ok(Json(MessageResponse::new("Reminder deleted")))
}

#[tracing::instrument(skip_all, fields(user_id = auth_state.user_id))]
async fn delete_all_reminders(
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
) -> Result<Json<DeletedResponse>> {
    let mut conn = pg_client.get_connection().await?;
    let deleted = conn.delete_all_reminders(auth_state.user_id).await?;

    tracing::info!(target: TRACING_TARGET, deleted, "reminders cleared");
    Ok(Json(DeletedResponse::new("All reminders deleted", deleted)))
}

pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route(
            "/api/reminders",
            get(list_reminders)
                .post(create_reminder)
                .delete(delete_all_reminders),
        )
        .route(
            "/api/reminders/{id}",
            put(update_reminder).delete(delete_reminder),
        )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::handler::test::{create_test_server, register};

    #[tokio::test]
    async fn malformed_trigger_is_bad_request() -> anyhow::Result<()> {
        let server = create_test_server()?;
        let token = register(&server, "reminders@example.com").await?;

        server
            .post("/api/reminders")
            .authorization_bearer(&token)
            .json(&json!({
                "name": "Stretch",
                "type": "once",
                "next_trigger": "tomorrow-ish",
            }))
            .await
            .assert_status_bad_request();
        Ok(())
    }

    #[tokio::test]
    async fn requires_authentication() -> anyhow::Result<()> {
        let server = create_test_server()?;

        server.get("/api/reminders").await.assert_status_unauthorized();
        server
            .put("/api/reminders/1")
            .json(&json!({ "next_trigger": "2025-06-01T09:00:00Z", "is_active": false }))
            .await
            .assert_status_unauthorized();
        Ok(())
    }
}
