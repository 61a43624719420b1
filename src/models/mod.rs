// src/models/mod.rs
pub mod aluno;
pub mod curso;
pub mod matricula;
pub mod status;

use serde::Serialize;

/// Corpo de resposta das operações de escrita: `{"mensagem": ...}` e, no cadastro, o id novo.
#[derive(Debug, Serialize)]
pub struct Mensagem {
    pub mensagem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl Mensagem {
    pub fn new(mensagem: impl Into<String>) -> Self {
        Mensagem {
            mensagem: mensagem.into(),
            id: None,
        }
    }

    pub fn com_id(mensagem: impl Into<String>, id: i64) -> Self {
        Mensagem {
            mensagem: mensagem.into(),
            id: Some(id),
        }
    }
}
