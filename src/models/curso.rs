// src/models/curso.rs
use super::status::StatusRegistro;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Linha da tabela `curso`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Curso {
    pub id_curso: i64,
    pub curso: String,
    pub carga_horaria: String, // Texto livre, ex: "40" ou "40h"
    pub modalidade: String,
    pub local: String,
    #[sqlx(try_from = "bool")]
    pub status_curso: StatusRegistro,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CursoPayload {
    pub curso: String,
    pub carga_horaria: String,
    pub modalidade: String,
    pub local: String,
}
