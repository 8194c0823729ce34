//! Postgres board store.
//!
//! One row per board in the `boards` table; the whole wire-format payload
//! lives in a `jsonb` column and every save is an upsert. Payloads written
//! by older producers may lack ids or preferences — deserialization repairs
//! them, so a load never fails on that account.

use board::model::Board;
use sqlx::PgPool;
use uuid::Uuid;

use super::{BoardStore, StoreError};

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl BoardStore for PgStore {
    async fn load(&self, id: Uuid) -> Result<Option<Board>, StoreError> {
        let row: Option<(serde_json::Value,)> =
            sqlx::query_as("SELECT payload FROM boards WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        match row {
            Some((payload,)) => Ok(Some(serde_json::from_value(payload)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, board: &Board) -> Result<(), StoreError> {
        let payload = serde_json::to_value(board)?;
        sqlx::query(
            "INSERT INTO boards (id, payload, updated_at) VALUES ($1, $2, now()) \
             ON CONFLICT (id) DO UPDATE SET payload = EXCLUDED.payload, updated_at = now()",
        )
        .bind(board.id)
        .bind(payload)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
