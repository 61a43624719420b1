// src/web/matricula_handlers.rs
use crate::{
    error::AppResult,
    models::{
        matricula::{Matricula, MatriculaPayload},
        Mensagem,
    },
    services::matricula_service,
    state::AppState,
};
use axum::extract::{
    rejection::{JsonRejection, PathRejection},
    Json, Path, State,
};

// GET /listar/matricula
pub async fn listar_matriculas(State(state): State<AppState>) -> AppResult<Json<Vec<Matricula>>> {
    let matriculas = matricula_service::listar_matriculas(&state.db_pool).await?;
    Ok(Json(matriculas))
}

// POST /cadastro/matricula
pub async fn cadastrar_matricula(
    State(state): State<AppState>,
    payload: Result<Json<MatriculaPayload>, JsonRejection>,
) -> AppResult<Json<Mensagem>> {
    let Json(matricula) = payload?;
    let id = matricula_service::cadastrar_matricula(&state.db_pool, &matricula).await?;
    Ok(Json(Mensagem::com_id("Matrícula cadastrada com sucesso!", id)))
}

// PUT /remover/matricula/{id_matricula}
pub async fn remover_matricula(
    State(state): State<AppState>,
    id_matricula: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Mensagem>> {
    let Path(id_matricula) = id_matricula?;
    matricula_service::remover_matricula(&state.db_pool, id_matricula).await?;
    Ok(Json(Mensagem::new("Matrícula removida com sucesso!")))
}

// PUT /atualizar/matricula/{id_matricula}
pub async fn atualizar_matricula(
    State(state): State<AppState>,
    id_matricula: Result<Path<i64>, PathRejection>,
    payload: Result<Json<MatriculaPayload>, JsonRejection>,
) -> AppResult<Json<Mensagem>> {
    let Path(id_matricula) = id_matricula?;
    let Json(matricula) = payload?;
    matricula_service::atualizar_matricula(&state.db_pool, id_matricula, &matricula).await?;
    Ok(Json(Mensagem::new("Matrícula atualizada com sucesso!")))
}
