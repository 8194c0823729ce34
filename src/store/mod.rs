//! Board persistence backends.
//!
//! DESIGN
//! ======
//! The host only ever needs a load/save pair, so storage hides behind the
//! [`BoardStore`] trait object. The Postgres store is the production backend;
//! the in-memory store backs tests and ad-hoc hosting without a database.
//! Both move whole boards: every save replaces the stored payload, matching
//! the editor's persist-after-every-mutation model.

pub mod memory;
pub mod postgres;

use board::model::Board;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("stored payload is not a board: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Load/save collaborator pair the host persists boards through.
#[async_trait::async_trait]
pub trait BoardStore: Send + Sync {
    /// Fetch a board by id. `Ok(None)` when the store has never seen it.
    async fn load(&self, id: Uuid) -> Result<Option<Board>, StoreError>;

    /// Insert or replace the stored board, keyed by `board.id`.
    async fn save(&self, board: &Board) -> Result<(), StoreError>;
}
