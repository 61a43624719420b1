// src/error.rs
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // Linha inexistente ou já removida logicamente
    #[error("Registo não encontrado: {0}")]
    NaoEncontrado(String),

    // Violação de chave estrangeira/única, ou referência a um registo inativo
    #[error("Conflito de dados: {0}")]
    Conflito(String),

    // Corpo JSON ou parâmetro de caminho inválido
    #[error("Pedido inválido: {0}")]
    Validacao(String),

    #[error("Erro na base de dados: {0}")]
    SqlxError(sqlx::Error),

    #[error("Erro de migração da base de dados: {0}")]
    SqlxMigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Erro de configuração: {0}")]
    Configuracao(String),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => AppError::NaoEncontrado("linha não encontrada".into()),
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::ForeignKeyViolation | ErrorKind::UniqueViolation => {
                    AppError::Conflito(db_err.message().to_string())
                }
                _ => AppError::SqlxError(sqlx::Error::Database(db_err)),
            },
            e => AppError::SqlxError(e),
        }
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::Configuracao(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validacao(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validacao(rejection.body_text())
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NaoEncontrado(_) => StatusCode::NOT_FOUND,
            AppError::Conflito(_) => StatusCode::CONFLICT,
            AppError::Validacao(_) => StatusCode::BAD_REQUEST,
            AppError::SqlxError(_) | AppError::SqlxMigrateError(_) | AppError::Configuracao(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// Como converter AppError numa resposta HTTP
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();

        // O detalhe fica no log; o cliente recebe só uma mensagem genérica
        if status.is_server_error() {
            tracing::error!("Erro processado: {:?}", self);
        } else {
            tracing::warn!("Pedido rejeitado: {}", self);
        }

        let user_message = match self {
            AppError::NaoEncontrado(_) => "Registo não encontrado.",
            AppError::Conflito(_) => {
                "Operação recusada: os dados entram em conflito com registos existentes."
            }
            AppError::Validacao(_) => "Dados do pedido inválidos ou incompletos.",
            AppError::SqlxError(_) | AppError::SqlxMigrateError(_) => "Erro ao aceder aos dados.",
            AppError::Configuracao(_) => "Erro de configuração.",
        };

        (status, Json(json!({ "mensagem": user_message }))).into_response()
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;
