//! In-memory board store.
//!
//! Stores serialized payloads rather than `Board` values so loads exercise
//! the same deserialize-and-backfill path the Postgres store does.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::HashMap;

use board::model::Board;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{BoardStore, StoreError};

#[derive(Default)]
pub struct MemStore {
    boards: RwLock<HashMap<Uuid, serde_json::Value>>,
}

impl MemStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw payload, bypassing serialization. Lets tests store shapes a
    /// well-behaved writer would never produce.
    #[cfg(test)]
    pub async fn seed_payload(&self, id: Uuid, payload: serde_json::Value) {
        self.boards.write().await.insert(id, payload);
    }
}

#[async_trait::async_trait]
impl BoardStore for MemStore {
    async fn load(&self, id: Uuid) -> Result<Option<Board>, StoreError> {
        let boards = self.boards.read().await;
        match boards.get(&id) {
            Some(payload) => Ok(Some(serde_json::from_value(payload.clone())?)),
            None => Ok(None),
        }
    }

    async fn save(&self, board: &Board) -> Result<(), StoreError> {
        let payload = serde_json::to_value(board)?;
        self.boards.write().await.insert(board.id, payload);
        Ok(())
    }
}
