//! Note handlers.
//!
//! Notes are wrapped as `{"note": ...}` and `{"notes": [...]}`. A note owned
//! by another user is reported as missing.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use worktrack_postgres::PgClient;
use worktrack_postgres::query::NoteRepository;

use crate::extract::{AuthState, Json, Path, ValidateJson};
use crate::handler::request::{CreateNote, IdPathParams, UpdateNoteRequest};
use crate::handler::response::{MessageResponse, NoteEnvelope, Notes};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for note operations.
const TRACING_TARGET: &str = "worktrack_server::handler::notes";

/// Lists the caller's notes, most recently updated first.
#[tracing::instrument(skip_all, fields(user_id = auth_state.user_id))]
async fn list_notes(
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
) -> Result<Json<Notes>> {
    let mut conn = pg_client.get_connection().await?;
    let notes = conn.list_notes(auth_state.user_id).await?;

    tracing::debug!(target: TRACING_TARGET, count = notes.len(), "notes listed");
    Ok(Json(notes.into()))
}

/// Creates a note with a trimmed title.
#[tracing::instrument(skip_all, fields(user_id = auth_state.user_id))]
async fn create_note(
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
    ValidateJson(request): ValidateJson<CreateNote>,
) -> Result<(StatusCode, Json<NoteEnvelope>)> {
    let mut conn = pg_client.get_connection().await?;
    let note = conn
        .create_note(request.into_model(auth_state.user_id))
        .await?;

    tracing::info!(target: TRACING_TARGET, note_id = note.id, "note created");
    Ok((StatusCode::CREATED, Json(note.into())))
}

#[tracing::instrument(skip_all, fields(user_id = auth_state.user_id, note_id = params.id))]
async fn read_note(
    Path(params): Path<IdPathParams>,
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
) -> Result<Json<NoteEnvelope>> {
    let mut conn = pg_client.get_connection().await?;
    let note = conn
        .find_note(params.id, auth_state.user_id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("note"))?;

    Ok(Json(note.into()))
}

/// Replaces a note's title and content and bumps `updated_at`.
#[tracing::instrument(skip_all, fields(user_id = auth_state.user_id, note_id = params.id))]
async fn update_note(
    Path(params): Path<IdPathParams>,
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
    ValidateJson(request): ValidateJson<UpdateNoteRequest>,
) -> Result<Json<NoteEnvelope>> {
    let mut conn = pg_client.get_connection().await?;
    let note = conn
        .update_note(params.id, auth_state.user_id, request.into_model())
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("note"))?;

    tracing::info!(target: TRACING_TARGET, "note updated");
    Ok(Json(note.into()))
}

#[tracing::instrument(skip_all, fields(user_id = auth_state.user_id, note_id = params.id))]
async fn delete_note(
    Path(params): Path<IdPathParams>,
    State(pg_client): State<PgClient>,
    auth_state: AuthState,
) -> Result<Json<MessageResponse>> {
    let mut conn = pg_client.get_connection().await?;
    if !conn.delete_note(params.id, auth_state.user_id).await? {
        return Err(ErrorKind::NotFound.with_resource("note"));
    }

    tracing::info!(target: TRACING_TARGET, "note deleted");
    Ok(Json(MessageResponse::new("Note deleted successfully")))
}

pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route(
            "/api/notes/{id}",
            get(read_note).put(update_note).delete(delete_note),
        )
}
