//! Session service — board hydration, fallback fetch, intent application.
//!
//! DESIGN
//! ======
//! Opening a board tries the live session map, then the store, then (when the
//! caller supplied one) a fallback URL serving the board's JSON. A fetched
//! board has its missing ids and preferences repaired during deserialization
//! and is saved immediately so the next open hits the store; this mirrors
//! first-time loads of boards shared as plain JSON files.
//!
//! ERROR HANDLING
//! ==============
//! A board that cannot be loaded or parsed is reported whole — no partial
//! board is ever handed to the view layer. Rejected edits (out-of-range
//! coordinates) pass through as their own error so callers can tell them from
//! load failures.

use board::engine::Editor;
use board::intent::Intent;
use board::model::Board;
use board::ops::EditError;
use board::select::Selection;
use tracing::info;
use uuid::Uuid;

use crate::state::{AppState, Session};
use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("board not found: {0}")]
    NotFound(Uuid),
    #[error("fallback fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("fallback payload is not a board: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Edit(#[from] EditError),
}

/// Snapshot of a session handed back to the view layer after every call.
#[derive(Debug, Clone)]
pub struct BoardView {
    pub board: Board,
    pub selection: Selection,
}

fn view(session: &Session) -> BoardView {
    BoardView { board: session.editor.board().clone(), selection: session.editor.selection() }
}

/// Open a board: reuse the live session, else hydrate from the store, else
/// fetch `src`. A fetched board is keyed and saved under its own id, which
/// may differ from `id` when the payload had none; the returned board tells
/// the caller which id to use from then on.
///
/// # Errors
///
/// Returns [`BoardError::NotFound`] when neither the store nor a fallback URL
/// can produce the board, and load/parse errors otherwise.
pub async fn open_board(
    state: &AppState,
    id: Uuid,
    src: Option<&str>,
) -> Result<BoardView, BoardError> {
    {
        let sessions = state.sessions.read().await;
        if let Some(session) = sessions.get(&id) {
            return Ok(view(session));
        }
    }

    // Fetch outside the lock; apply below only if still absent.
    let board = match state.store.load(id).await? {
        Some(board) => board,
        None => match src {
            Some(src) => fetch_board(state, src).await?,
            None => return Err(BoardError::NotFound(id)),
        },
    };

    let board_id = board.id;
    let mut sessions = state.sessions.write().await;
    let session = sessions
        .entry(board_id)
        .or_insert_with(|| Session::new(Editor::new(board)));
    Ok(view(session))
}

/// Apply one user intent to a board's session and mark it dirty. The session
/// is hydrated from the store first if no client opened the board yet.
///
/// # Errors
///
/// Returns [`BoardError::Edit`] for rejected coordinates; the session is
/// untouched in that case.
pub async fn apply_intent(
    state: &AppState,
    id: Uuid,
    intent: &Intent,
) -> Result<BoardView, BoardError> {
    let mut sessions = hydrated(state, id).await?;
    let Some(session) = sessions.get_mut(&id) else {
        return Err(BoardError::NotFound(id));
    };
    session.editor.apply(intent)?;
    session.dirty = true;
    info!(board_id = %id, ?intent, "intent applied");
    Ok(view(session))
}

/// Record the view layer's focus change on a board's session.
///
/// # Errors
///
/// Returns [`BoardError::NotFound`] when the board exists nowhere.
pub async fn set_selection(
    state: &AppState,
    id: Uuid,
    selection: Selection,
) -> Result<BoardView, BoardError> {
    let mut sessions = hydrated(state, id).await?;
    let Some(session) = sessions.get_mut(&id) else {
        return Err(BoardError::NotFound(id));
    };
    session.editor.select(selection);
    Ok(view(session))
}

/// Lock the session map for writing, hydrating `id` from the store first when
/// it has no live session.
async fn hydrated(
    state: &AppState,
    id: Uuid,
) -> Result<tokio::sync::RwLockWriteGuard<'_, std::collections::HashMap<Uuid, Session>>, BoardError>
{
    let live = state.sessions.read().await.contains_key(&id);

    // Fetch outside the locks; insert below only if still absent.
    let hydration = if live {
        None
    } else {
        match state.store.load(id).await? {
            Some(board) => Some(board),
            None => return Err(BoardError::NotFound(id)),
        }
    };

    let mut sessions = state.sessions.write().await;
    if let Some(board) = hydration {
        sessions
            .entry(id)
            .or_insert_with(|| Session::new(Editor::new(board)));
        info!(board_id = %id, "hydrated board from store");
    }
    Ok(sessions)
}

async fn fetch_board(state: &AppState, src: &str) -> Result<Board, BoardError> {
    let payload = reqwest::get(src).await?.error_for_status()?.text().await?;
    let board: Board = serde_json::from_str(&payload)?;
    // Save the repaired board right away so the next open hits the store.
    state.store.save(&board).await?;
    info!(board_id = %board.id, %src, "fetched board from fallback url");
    Ok(board)
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
