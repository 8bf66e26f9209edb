//! Countdown timer handlers.
//!
//! The client drives the countdown and reports progress with `PUT`.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, put};
use worktrack_postgres::PgClient;
use worktrack_postgres::query::TimerRepository;

use crate::extract::{AuthState, Json, Path, ValidateJson};
use crate::handler::request::{CreateTimer, IdPathParams, UpdateTimerRequest};
use crate::handler::response::{DeletedResponse, MessageResponse, Timer, Timers};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for timer operations.
const TRACING_TARGET: &str = "worktrack_server::handler::timers";

#[tracing::instrument(skip_all, fields(user_id = auth_state.user_id))]
async fn list_timers(
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
) -> Result<Json<Timers>> {
    let mut conn = pg_client.get_connection().await?;
    let timers = conn.list_timers(auth_state.user_id).await?;
    Ok(Json(timers.into_iter().map(Timer::from).collect()))
}

#[tracing::instrument(skip_all, fields(user_id = auth_state.user_id))]
async fn create_timer(
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
    ValidateJson(request): ValidateJson<CreateTimer>,
) -> Result<(StatusCode, Json<Timer>)> {
    let mut conn = pg_client.get_connection().await?;
    let timer = conn
        .create_timer(request.into_model(auth_state.user_id))
        .await?;

    tracing::info!(target: TRACING_TARGET, timer_id = timer.id, "timer created");
    Ok((StatusCode::CREATED, Json(timer.into())))
}

#[tracing::instrument(skip_all, fields(user_id = auth_state.user_id, timer_id = params.id))]
async fn update_timer(
    Path(params): Path<IdPathParams>,
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
    ValidateJson(request): ValidateJson<UpdateTimerRequest>,
) -> Result<Json<Timer>> {
    let mut conn = pg_client.get_connection().await?;
    let timer = conn
        .update_timer(params.id, auth_state.user_id, request.into_model())
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("timer"))?;

    Ok(Json(timer.into()))
}

#[tracing::instrument(skip_all, fields(user_id = auth_state.user_id, timer_id = params.id))]
async fn delete_timer(
    Path(params): Path<IdPathParams>,
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
) -> Result<Json<MessageResponse>> {
    let mut conn = pg_client.get_connection().await?;
    if !conn.delete_timer(params.id, auth_state.user_id).await? {
        return Err(ErrorKind::NotFound.with_resource("timer"));
    }

    Ok(Json(MessageResponse::new("Timer deleted")))
}

#[tracing::instrument(skip_all, fields(user_id = auth_state.user_id))]
async fn delete_all_timers(
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
) -> Result<Json<DeletedResponse>> {
    let mut conn = pg_client.get_connection().await?;
    let deleted = conn.delete_all_timers(auth_state.user_id).await?;

    tracing::info!(target: TRACING_TARGET, deleted, "timers cleared");
    Ok(Json(DeletedResponse::new("All timers deleted", deleted)))
}

pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route(
            "/api/timers",
            get(list_timers).post(create_timer).delete(delete_all_timers),
        )
        .route("/api/timers/{id}", put(update_timer).delete(delete_timer))
}
