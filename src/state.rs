//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into axum handlers via the `State` extractor. It
//! holds the board store and a map of live editor sessions keyed by board id.
//! A session is hydrated from the store on first access and marked dirty
//! after every applied intent; the persistence task flushes dirty sessions
//! back to the store so request handling never waits on a write.

use std::collections::HashMap;
use std::sync::Arc;

use board::engine::Editor;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::BoardStore;

/// Per-board live session: the editor plus its persistence bookkeeping.
pub struct Session {
    pub editor: Editor,
    /// Set when the board has edits the store has not seen yet.
    pub dirty: bool,
}

impl Session {
    #[must_use]
    pub fn new(editor: Editor) -> Self {
        Self { editor, dirty: false }
    }
}

/// Shared application state, injected into axum handlers via State extractor.
/// Clone is required by axum — all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BoardStore>,
    pub sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn BoardStore>) -> Self {
        Self { store, sessions: Arc::new(RwLock::new(HashMap::new())) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;
