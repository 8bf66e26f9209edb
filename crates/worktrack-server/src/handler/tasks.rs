//! Task handlers.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, put};
use worktrack_postgres::PgClient;
use worktrack_postgres::query::TaskRepository;

use crate::extract::{AuthState, Json, Path, ValidateJson};
use crate::handler::request::{CreateTask, IdPathParams, UpdateTaskRequest};
use crate::handler::response::{DeletedResponse, MessageResponse, Task, Tasks};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for task operations.
const TRACING_TARGET: &str = "worktrack_server::handler::tasks";

#[tracing::instrument(skip_all, fields(user_id = auth_state.user_id))]
async fn list_tasks(
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
) -> Result<Json<Tasks>> {
    let mut conn = pg_client.get_connection().await?;
    let tasks = conn.list_tasks(auth_state.user_id).await?;
    Ok(Json(tasks.into_iter().map(Task::from).collect()))
}

#[tracing::instrument(skip_all, fields(user_id = auth_state.user_id))]
async fn create_task(
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
    ValidateJson(request): ValidateJson<CreateTask>,
) -> Result<(StatusCode, Json<Task>)> {
    let mut conn = pg_client.get_connection().await?;
    let task = conn
        .create_task(request.into_model(auth_state.user_id))
        .await?;

    tracing::info!(target: TRACING_TARGET, task_id = task.id, "task created");
    Ok((StatusCode::CREATED, Json(task.into())))
}

/// Updates a task's text or completion flag.
#[tracing::instrument(skip_all, fields(user_id = auth_state.user_id, task_id = params.id))]
async fn update_task(
    Path(params): Path<IdPathParams>,
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
    ValidateJson(request): ValidateJson<UpdateTaskRequest>,
) -> Result<Json<Task>> {
    let mut conn = pg_client.get_connection().await?;
    let task = conn
        .update_task(params.id, auth_state.user_id, request.into_model())
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("task"))?;

    tracing::debug!(target: TRACING_TARGET, completed = task.completed, "task updated");
    Ok(Json(task.into()))
}

#[tracing::instrument(skip_all, fields(user_id = auth_state.user_id, task_id = params.id))]
async fn delete_task(
    Path(params): Path<IdPathParams>,
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
) -> Result<Json<MessageResponse>> {
    let mut conn = pg_client.get_connection().await?;
    if !conn.delete_task(params.id, auth_state.user_id).await? {
        return Err(ErrorKind::NotFound.with_resource("task"));
    }

    Ok(Json(MessageResponse::new("Task deleted")))
}

/// Deletes every task owned by the caller.
#[tracing::instrument(skip_all, fields(user_id = auth_state.user_id))]
async fn delete_all_tasks(
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
) -> Result<Json<DeletedResponse>> {
    let mut conn = pg_client.get_connection().await?;
    let deleted = conn.delete_all_tasks(auth_state.user_id).await?;

    tracing::info!(target: TRACING_TARGET, deleted, "tasks cleared");
    Ok(Json(DeletedResponse::new("All tasks deleted", deleted)))
}

pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route(
            "/api/tasks",
            get(list_tasks).post(create_task).delete(delete_all_tasks),
        )
        .route("/api/tasks/{id}", put(update_task).delete(delete_task))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::handler::test::{
        create_database_test_server, create_test_server, register, unique_email,
    };

    #[tokio::test]
    async fn requires_authentication() -> anyhow::Result<()> {
        let server = create_test_server()?;

        server.get("/api/tasks").await.assert_status_unauthorized();
        server.delete("/api/tasks").await.assert_status_unauthorized();
        server.delete("/api/tasks/1").await.assert_status_unauthorized();
        Ok(())
    }

    #[tokio::test]
    async fn blank_text_is_bad_request() -> anyhow::Result<()> {
        let server = create_test_server()?;
        let token = register(&server, "tasks@example.com").await?;

        server
            .post("/api/tasks")
            .authorization_bearer(&token)
            .json(&json!({ "text": "   " }))
            .await
            .assert_status_bad_request();
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running Postgres at DATABASE_URL"]
    async fn other_users_get_not_found_for_a_task() -> anyhow::Result<()> {
        let server = create_database_test_server().await?;
        let owner = register(&server, &unique_email("task-owner")).await?;
        let intruder = register(&server, &unique_email("task-intruder")).await?;

        let response = server
            .post("/api/tasks")
            .authorization_bearer(&owner)
            .json(&json!({ "text": "ship it" }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let task: serde_json::Value = response.json();
        let path = format!("/api/tasks/{}", task["id"]);

        for response in [
            server
                .put(&path)
                .authorization_bearer(&intruder)
                .json(&json!({ "completed": true }))
                .await,
            server.delete(&path).authorization_bearer(&intruder).await,
        ] {
            response.assert_status_not_found();
            let body: serde_json::Value = response.json();
            assert_eq!(body["name"], "not_found");
        }

        let listed: serde_json::Value = server
            .get("/api/tasks")
            .authorization_bearer(&owner)
            .await
            .json();
        assert_eq!(listed[0]["completed"], false);
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running Postgres at DATABASE_URL"]
    async fn toggles_completed_and_deletes_only_own_tasks() -> anyhow::Result<()> {
        let server = create_database_test_server().await?;
        let owner = register(&server, &unique_email("task-toggle")).await?;
        let neighbour = register(&server, &unique_email("task-neighbour")).await?;

        let task: serde_json::Value = server
            .post("/api/tasks")
            .authorization_bearer(&owner)
            .json(&json!({ "text": "  water plants  " }))
            .await
            .json();
        assert_eq!(task["text"], "water plants");
        assert_eq!(task["completed"], false);
        let path = format!("/api/tasks/{}", task["id"]);

        for expected in [true, false] {
            let response = server
                .put(&path)
                .authorization_bearer(&owner)
                .json(&json!({ "completed": expected }))
                .await;
            response.assert_status_ok();
            let body: serde_json::Value = response.json();
            assert_eq!(body["completed"], expected);
            assert_eq!(body["text"], "water plants");
        }

        server
            .post("/api/tasks")
            .authorization_bearer(&neighbour)
            .json(&json!({ "text": "keep me" }))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server.delete("/api/tasks").authorization_bearer(&owner).await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["deleted"], 1);

        let remaining: serde_json::Value = server
            .get("/api/tasks")
            .authorization_bearer(&owner)
            .await
            .json();
        assert_eq!(remaining, json!([]));

        let kept: serde_json::Value = server
            .get("/api/tasks")
            .authorization_bearer(&neighbour)
            .await
            .json();
        assert_eq!(kept[0]["text"], "keep me");
        Ok(())
    }
}
