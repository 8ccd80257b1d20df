//! Note HTTP handlers.

use super::params::{parse_note_id, parse_query_number};
use crate::{envelope::ApiResponse, error::HttpError, AppState};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use notesafe_core::constants::LIST_ENDPOINT_DEFAULT_LIMIT;
use notesafe_core::models::{note::*, page::PageRequest};
use notesafe_core::AppError;
use serde::Deserialize;

/// Query parameters for listing notes. All values arrive as raw strings.
#[derive(Debug, Default, Deserialize)]
pub struct ListNotesQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, HttpError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::Validation(rejection.body_text()).into())
}

/// Create a new note.
///
/// # Returns
/// `201 Created` with the stored note.
///
/// # Errors
/// Returns `400` when the body is malformed or a field is missing/blank.
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<NoteView>>), HttpError> {
    let req = json_body(payload)?;
    let note = state.service.create(req)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(note, "Note created successfully")),
    ))
}

/// List notes with pagination and optional search.
///
/// # Returns
/// One page of notes plus pagination metadata.
///
/// # Errors
/// Returns an error if listing or decoding fails.
pub async fn list_notes(
    State(state): State<AppState>,
    Query(query): Query<ListNotesQuery>,
) -> Result<Json<ApiResponse<Vec<NoteView>>>, HttpError> {
    let request = PageRequest::new(
        parse_query_number(query.page.as_deref(), 1),
        parse_query_number(query.limit.as_deref(), LIST_ENDPOINT_DEFAULT_LIMIT as i64),
    );
    let page = state.service.list(request, query.search.as_deref())?;
    Ok(Json(ApiResponse::paginated(
        page.data,
        page.meta,
        "Notes retrieved successfully",
    )))
}

/// Fetch a note by id.
///
/// # Errors
/// Returns `404` when the note does not exist.
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<NoteView>>, HttpError> {
    let note = state.service.get(parse_note_id(&id)?)?;
    Ok(Json(ApiResponse::success(note, "Note retrieved successfully")))
}

/// Update an existing note. Omitted fields keep their value.
///
/// # Errors
/// Returns `404` when the note does not exist, `400` on invalid input.
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<NoteView>>, HttpError> {
    let id = parse_note_id(&id)?;
    let req = json_body(payload)?;
    let note = state.service.update(id, req)?;
    Ok(Json(ApiResponse::success(note, "Note updated successfully")))
}

/// Delete a note by id.
///
/// # Errors
/// Returns `404` when the note does not exist.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>, HttpError> {
    state.service.delete(parse_note_id(&id)?)?;
    Ok(Json(ApiResponse::success(
        serde_json::Value::Null,
        "Note deleted successfully",
    )))
}
