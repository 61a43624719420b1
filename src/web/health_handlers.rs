// src/web/health_handlers.rs
use crate::{db, models::Mensagem, state::AppState};
use axum::{
    extract::{Json, State},
    http::StatusCode,
};

// GET /
pub async fn raiz() -> Json<Mensagem> {
    Json(Mensagem::new("Olá, Mundo!"))
}

/// GET /health: mesma sonda usada no arranque.
pub async fn health(State(state): State<AppState>) -> (StatusCode, &'static str) {
    if db::verificar_conexao(&state.db_pool).await {
        (StatusCode::OK, "OK")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Base de dados indisponível")
    }
}
