mod db;
mod routes;
mod services;
mod state;
mod store;

use std::sync::Arc;

use crate::store::BoardStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Postgres when configured, else an in-memory store for ad-hoc hosting.
    let store: Arc<dyn BoardStore> = match std::env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool = db::init_pool(&database_url)
                .await
                .expect("database init failed");
            Arc::new(store::postgres::PgStore::new(pool))
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set — boards are held in memory only");
            Arc::new(store::memory::MemStore::new())
        }
    };

    let state = state::AppState::new(store);

    // Spawn the background flush task; edits only mark sessions dirty.
    let _persistence = services::persistence::spawn_persistence_task(state.clone());

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "panelboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
