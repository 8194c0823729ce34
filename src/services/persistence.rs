//! Persistence service — background flush for dirty sessions.
//!
//! DESIGN
//! ======
//! Request handlers only mark sessions dirty; a background task snapshots
//! dirty boards, writes them through the store, and sleeps before the next
//! cycle. From the editor's point of view saving is fire-and-forget.
//!
//! ERROR HANDLING
//! ==============
//! Dirty flags are cleared only after a successful write, and only when the
//! session still holds the exact board that was flushed. Repeated upserts are
//! acceptable; silent data loss is not.

use std::time::Duration;

use board::model::Board;
use tokio::task::JoinHandle;
use tracing::{error, info};
use uuid::Uuid;

use crate::state::AppState;

const DEFAULT_BOARD_FLUSH_INTERVAL_MS: u64 = 250;

fn flush_interval_ms() -> u64 {
    std::env::var("BOARD_FLUSH_INTERVAL_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_BOARD_FLUSH_INTERVAL_MS)
}

/// Spawn the background persistence task. Returns a handle for shutdown.
pub fn spawn_persistence_task(state: AppState) -> JoinHandle<()> {
    let interval_ms = flush_interval_ms();
    info!(interval_ms, "board persistence flush configured");
    tokio::spawn(async move {
        loop {
            flush_all_dirty(&state).await;
            tokio::time::sleep(Duration::from_millis(interval_ms)).await;
        }
    })
}

async fn flush_all_dirty(state: &AppState) {
    // PHASE: SNAPSHOT DIRTY BOARDS
    // WHY: collect immutable clones under lock, then perform I/O lock-free.
    let batch: Vec<(Uuid, Board)> = {
        let sessions = state.sessions.read().await;
        sessions
            .iter()
            .filter(|(_, session)| session.dirty)
            .map(|(id, session)| (*id, session.editor.board().clone()))
            .collect()
    };

    // PHASE: FLUSH + ACK DIRTY FLAGS
    // WHY: if a flush fails we intentionally keep the dirty flag for retry.
    for (id, board) in batch {
        match state.store.save(&board).await {
            Ok(()) => clear_dirty_if_unchanged(state, id, &board).await,
            Err(e) => {
                error!(error = %e, board_id = %id, "persistence flush failed");
            }
        }
    }
}

async fn clear_dirty_if_unchanged(state: &AppState, id: Uuid, flushed: &Board) {
    let mut sessions = state.sessions.write().await;
    let Some(session) = sessions.get_mut(&id) else {
        return;
    };
    // EDGE: keep the dirty flag if the board was edited again after snapshot.
    if session.editor.board() == flushed {
        session.dirty = false;
    }
}

#[cfg(test)]
pub(crate) async fn flush_all_dirty_for_tests(state: &AppState) {
    flush_all_dirty(state).await;
}

#[cfg(test)]
#[path = "persistence_test.rs"]
mod tests;
