// src/state.rs
use sqlx::SqlitePool;

/// Estado partilhado pelos handlers: o pool criado uma única vez no arranque.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
}
