// src/web/aluno_handlers.rs
use crate::{
    error::AppResult,
    models::{
        aluno::{Aluno, AlunoPayload},
        Mensagem,
    },
    services::aluno_service,
    state::AppState,
};
use axum::extract::{
    rejection::{JsonRejection, PathRejection},
    Json, Path, State,
};

// GET /listar/alunos
pub async fn listar_alunos(State(state): State<AppState>) -> AppResult<Json<Vec<Aluno>>> {
    let alunos = aluno_service::listar_alunos(&state.db_pool).await?;
    Ok(Json(alunos))
}

// POST /cadastro/aluno
pub async fn cadastrar_aluno(
    State(state): State<AppState>,
    payload: Result<Json<AlunoPayload>, JsonRejection>,
) -> AppResult<Json<Mensagem>> {
    let Json(aluno) = payload?;
    let id = aluno_service::cadastrar_aluno(&state.db_pool, &aluno).await?;
    Ok(Json(Mensagem::com_id("Aluno cadastrado com sucesso!", id)))
}

// PUT /remover/aluno/{id_aluno}
pub async fn remover_aluno(
    State(state): State<AppState>,
    id_aluno: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Mensagem>> {
    let Path(id_aluno) = id_aluno?;
    aluno_service::remover_aluno(&state.db_pool, id_aluno).await?;
    Ok(Json(Mensagem::new("Aluno removido com sucesso!")))
}

// PUT /atualizar/aluno/{id_aluno}
pub async fn atualizar_aluno(
    State(state): State<AppState>,
    id_aluno: Result<Path<i64>, PathRejection>,
    payload: Result<Json<AlunoPayload>, JsonRejection>,
) -> AppResult<Json<Mensagem>> {
    let Path(id_aluno) = id_aluno?;
    let Json(aluno) = payload?;
    aluno_service::atualizar_aluno(&state.db_pool, id_aluno, &aluno).await?;
    Ok(Json(Mensagem::new("Aluno atualizado com sucesso!")))
}
