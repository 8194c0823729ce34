//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host is a small REST surface over the editor core: open a board,
//! apply an intent, move the selection. Any view layer that can speak JSON
//! is a client; CORS is wide open for that reason.

pub mod boards;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/board/{id}", get(boards::get_board))
        .route("/api/board/{id}/intents", post(boards::post_intent))
        .route("/api/board/{id}/selection", put(boards::put_selection))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
