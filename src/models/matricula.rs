// src/models/matricula.rs
use super::status::StatusRegistro;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// Liga um aluno a um curso. As referências são chaves estrangeiras simples;
/// a existência e o estado ativo dos pais são verificados no service.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matricula {
    pub id_matricula: i64,
    pub id_aluno: i64,
    pub id_curso: i64,
    pub data_matricula: NaiveDate,
    #[sqlx(try_from = "bool")]
    pub status_matricula: StatusRegistro,
}

/// Corpo de cadastro/atualização. Os ids aceitam número ou texto numérico (`"1"`),
/// como os clientes de formulário enviam.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MatriculaPayload {
    #[serde(deserialize_with = "id_numero_ou_texto")]
    pub id_aluno: i64,
    #[serde(deserialize_with = "id_numero_ou_texto")]
    pub id_curso: i64,
    pub data_matricula: NaiveDate,
    // Aceite e ignorado: o estado só muda pela rota de remoção
    #[serde(default)]
    pub status: Option<bool>,
}

fn id_numero_ou_texto<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Numero(i64),
        Texto(String),
    }

    match Id::deserialize(deserializer)? {
        Id::Numero(n) => Ok(n),
        Id::Texto(texto) => texto
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("id inválido: {:?}", texto))),
    }
}
