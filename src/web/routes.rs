// src/web/routes.rs
use crate::{
    state::AppState,
    web::{aluno_handlers, curso_handlers, health_handlers, matricula_handlers},
};
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn create_router(app_state: AppState) -> Router {
    // --- Rotas Gerais ---
    let general_routes = Router::new()
        .route("/", get(health_handlers::raiz))
        .route("/health", get(health_handlers::health));

    // --- Rotas de Cursos ---
    // Remoção e atualização usam PUT (contrato existente dos clientes)
    let curso_routes = Router::new()
        .route("/listar/cursos", get(curso_handlers::listar_cursos))
        .route("/cadastro/curso", post(curso_handlers::cadastrar_curso))
        .route("/remover/curso/{id_curso}", put(curso_handlers::remover_curso))
        .route("/atualizar/curso/{id_curso}", put(curso_handlers::atualizar_curso));

    // --- Rotas de Alunos ---
    let aluno_routes = Router::new()
        .route("/listar/alunos", get(aluno_handlers::listar_alunos))
        .route("/cadastro/aluno", post(aluno_handlers::cadastrar_aluno))
        .route("/remover/aluno/{id_aluno}", put(aluno_handlers::remover_aluno))
        .route("/atualizar/aluno/{id_aluno}", put(aluno_handlers::atualizar_aluno));

    // --- Rotas de Matrículas ---
    let matricula_routes = Router::new()
        .route("/listar/matricula", get(matricula_handlers::listar_matriculas))
        .route("/cadastro/matricula", post(matricula_handlers::cadastrar_matricula))
        .route("/remover/matricula/{id_matricula}", put(matricula_handlers::remover_matricula))
        .route(
            "/atualizar/matricula/{id_matricula}",
            put(matricula_handlers::atualizar_matricula),
        );

    // --- Router Final ---
    Router::new()
        .merge(general_routes)
        .merge(curso_routes)
        .merge(aluno_routes)
        .merge(matricula_routes)
        .with_state(app_state)
}
