// src/models/aluno.rs
use super::status::StatusRegistro;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Linha da tabela `aluno`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aluno {
    pub id_aluno: i64, // Atribuído pela DB, imutável
    pub nome: String,
    pub cpf: String,
    pub telefone: String,
    pub email: String,
    pub data_nascimento: NaiveDate,
    pub endereco: String,
    #[sqlx(try_from = "bool")]
    pub status_aluno: StatusRegistro,
}

/// Corpo de `POST /cadastro/aluno` e `PUT /atualizar/aluno/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AlunoPayload {
    pub nome: String,
    pub cpf: String,
    pub telefone: String,
    pub email: String,
    pub data_nascimento: NaiveDate,
    pub endereco: String,
}
