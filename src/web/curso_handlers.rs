// src/web/curso_handlers.rs
use crate::{
    error::AppResult,
    models::{
        curso::{Curso, CursoPayload},
        Mensagem,
    },
    services::curso_service,
    state::AppState,
};
use axum::extract::{
    rejection::{JsonRejection, PathRejection},
    Json, Path, State,
};

// GET /listar/cursos
pub async fn listar_cursos(State(state): State<AppState>) -> AppResult<Json<Vec<Curso>>> {
    let cursos = curso_service::listar_cursos(&state.db_pool).await?;
    Ok(Json(cursos))
}

// POST /cadastro/curso
pub async fn cadastrar_curso(
    State(state): State<AppState>,
    payload: Result<Json<CursoPayload>, JsonRejection>,
) -> AppResult<Json<Mensagem>> {
    let Json(curso) = payload?;
    let id = curso_service::cadastrar_curso(&state.db_pool, &curso).await?;
    Ok(Json(Mensagem::com_id("Curso cadastrado com sucesso!", id)))
}

// PUT /remover/curso/{id_curso}
pub async fn remover_curso(
    State(state): State<AppState>,
    id_curso: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Mensagem>> {
    let Path(id_curso) = id_curso?;
    curso_service::remover_curso(&state.db_pool, id_curso).await?;
    Ok(Json(Mensagem::new("Curso removido com sucesso!")))
}

// PUT /atualizar/curso/{id_curso}
pub async fn atualizar_curso(
    State(state): State<AppState>,
    id_curso: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CursoPayload>, JsonRejection>,
) -> AppResult<Json<Mensagem>> {
    let Path(id_curso) = id_curso?;
    let Json(curso) = payload?;
    curso_service::atualizar_curso(&state.db_pool, id_curso, &curso).await?;
    Ok(Json(Mensagem::new("Curso atualizado com sucesso!")))
}

#[cfg(test)]
mod tests {
    use crate::testutils::*;
    use crate::web::testutils::*;
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_cadastrar_e_listar() {
        let context = TestContext::setup().await;

        let (status, body) = context
            .send(
                Method::POST,
                "/cadastro/curso",
                Some(json!({
                    "curso": "Math",
                    "cargaHoraria": "40",
                    "modalidade": "Online",
                    "local": "Room1",
                })),
            )
            .await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!("Curso cadastrado com sucesso!", body["mensagem"]);
        let id = body["id"].as_i64().unwrap();

        let (status, body) = context.send(Method::GET, "/listar/cursos", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(
            json!([{
                "idCurso": id,
                "curso": "Math",
                "cargaHoraria": "40",
                "modalidade": "Online",
                "local": "Room1",
                "statusCurso": "ativo",
            }]),
            body
        );
    }

    #[tokio::test]
    async fn test_listar_vazio_e_ok() {
        let context = TestContext::setup().await;

        let (status, body) = context.send(Method::GET, "/listar/cursos", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!([]), body);
    }

    #[tokio::test]
    async fn test_remover_com_cascata() {
        let context = TestContext::setup().await;
        let curso = criar_curso(context.pool(), "Math").await;
        let aluno = criar_aluno(context.pool(), "111").await;
        criar_matricula(context.pool(), aluno, curso).await;

        let (status, _) = context
            .send(Method::PUT, &format!("/remover/curso/{}", curso), None)
            .await;
        assert_eq!(StatusCode::OK, status);

        assert_eq!(json!([]), context.send(Method::GET, "/listar/cursos", None).await.1);
        assert_eq!(json!([]), context.send(Method::GET, "/listar/matricula", None).await.1);
        // O aluno não é afetado
        let (_, alunos) = context.send(Method::GET, "/listar/alunos", None).await;
        assert_eq!(1, alunos.as_array().unwrap().len());
    }

    #[tokio::test]
    async fn test_atualizar_com_payload_de_aluno_falha_sem_escrita() {
        let context = TestContext::setup().await;
        let curso = criar_curso(context.pool(), "Math").await;

        let (status, _) = context
            .send(
                Method::PUT,
                &format!("/atualizar/curso/{}", curso),
                Some(json!({
                    "nome": "Ana",
                    "cpf": "111",
                    "telefone": "11999990000",
                    "email": "ana@example.com",
                    "dataNascimento": "2001-05-20",
                    "endereco": "Rua das Flores, 10",
                })),
            )
            .await;
        assert_eq!(StatusCode::BAD_REQUEST, status);

        let (_, body) = context.send(Method::GET, "/listar/cursos", None).await;
        assert_eq!("Math", body[0]["curso"]);
        assert_eq!("40", body[0]["cargaHoraria"]);
    }

    #[tokio::test]
    async fn test_atualizar() {
        let context = TestContext::setup().await;
        let curso = criar_curso(context.pool(), "Math").await;

        let (status, _) = context
            .send(
                Method::PUT,
                &format!("/atualizar/curso/{}", curso),
                Some(json!({
                    "curso": "Cálculo",
                    "cargaHoraria": "80",
                    "modalidade": "Presencial",
                    "local": "Sala 2",
                })),
            )
            .await;
        assert_eq!(StatusCode::OK, status);

        let (_, body) = context.send(Method::GET, "/listar/cursos", None).await;
        assert_eq!(curso, body[0]["idCurso"].as_i64().unwrap());
        assert_eq!("Cálculo", body[0]["curso"]);
        assert_eq!("Presencial", body[0]["modalidade"]);
    }

    #[tokio::test]
    async fn test_remover_inexistente() {
        let context = TestContext::setup().await;

        let (status, body) = context.send(Method::PUT, "/remover/curso/31", None).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        assert_eq!("Registo não encontrado.", body["mensagem"]);
    }
}
