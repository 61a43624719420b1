// src/models/status.rs
use serde::{Deserialize, Serialize};

/// Estado de ciclo de vida de qualquer registo. A remoção é sempre lógica:
/// a coluna booleana `status_*` passa a `false` e o registo fica `Removido`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusRegistro {
    Ativo,
    Removido,
}

// Conversão usada pelo `#[sqlx(try_from = "bool")]` dos models
impl From<bool> for StatusRegistro {
    fn from(ativo: bool) -> Self {
        if ativo {
            StatusRegistro::Ativo
        } else {
            StatusRegistro::Removido
        }
    }
}
