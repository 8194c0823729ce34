//! Board editing routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use board::intent::Intent;
use board::model::Board;
use board::select::Selection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::session::{self, BoardError, BoardView};
use crate::state::AppState;

/// Body returned by every board endpoint: the full board snapshot plus the
/// session's selected coordinate (or null).
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub board: Board,
    pub selection: Selection,
}

impl From<BoardView> for BoardResponse {
    fn from(view: BoardView) -> Self {
        Self { board: view.board, selection: view.selection }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct OpenParams {
    /// Fallback URL serving the board's JSON, used when the store misses.
    pub src: Option<String>,
}

/// `GET /api/board/:id` — open a board. The returned board's id is
/// authoritative: a board fetched from `?src=` without an id gets a fresh one
/// and is stored under it.
pub async fn get_board(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<OpenParams>,
) -> Result<Json<BoardResponse>, (StatusCode, Json<ErrorBody>)> {
    let view = session::open_board(&state, id, params.src.as_deref())
        .await
        .map_err(error_response)?;
    Ok(Json(view.into()))
}

/// `POST /api/board/:id/intents` — apply one user intent.
pub async fn post_intent(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(intent): Json<Intent>,
) -> Result<Json<BoardResponse>, (StatusCode, Json<ErrorBody>)> {
    let view = session::apply_intent(&state, id, &intent)
        .await
        .map_err(error_response)?;
    Ok(Json(view.into()))
}

/// `PUT /api/board/:id/selection` — record the view layer's focus change.
pub async fn put_selection(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(selection): Json<Selection>,
) -> Result<Json<BoardResponse>, (StatusCode, Json<ErrorBody>)> {
    let view = session::set_selection(&state, id, selection)
        .await
        .map_err(error_response)?;
    Ok(Json(view.into()))
}

pub(crate) fn board_error_to_status(err: &BoardError) -> StatusCode {
    match err {
        BoardError::NotFound(_) => StatusCode::NOT_FOUND,
        BoardError::Fetch(_) => StatusCode::BAD_GATEWAY,
        BoardError::Parse(_) | BoardError::Edit(_) => StatusCode::UNPROCESSABLE_ENTITY,
        BoardError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn board_error_code(err: &BoardError) -> &'static str {
    match err {
        BoardError::NotFound(_) => "E_BOARD_NOT_FOUND",
        BoardError::Fetch(_) => "E_FETCH",
        BoardError::Parse(_) => "E_BAD_PAYLOAD",
        BoardError::Store(_) => "E_STORE",
        BoardError::Edit(_) => "E_REJECTED_EDIT",
    }
}

fn error_response(err: BoardError) -> (StatusCode, Json<ErrorBody>) {
    (
        board_error_to_status(&err),
        Json(ErrorBody { code: board_error_code(&err), message: err.to_string() }),
    )
}

#[cfg(test)]
#[path = "boards_test.rs"]
mod tests;
