// src/testutils.rs
//! Utilitários de teste partilhados pelos services e pelos handlers.

use crate::models::{aluno::AlunoPayload, curso::CursoPayload, matricula::MatriculaPayload};
use crate::services::{aluno_service, curso_service, matricula_service};
use chrono::NaiveDate;
use sqlx::SqlitePool;

pub fn aluno_payload(nome: &str, cpf: &str) -> AlunoPayload {
    AlunoPayload {
        nome: nome.into(),
        cpf: cpf.into(),
        telefone: "11999990000".into(),
        email: format!("{}@example.com", cpf),
        data_nascimento: NaiveDate::from_ymd_opt(2001, 5, 20).unwrap(),
        endereco: "Rua das Flores, 10".into(),
    }
}

pub fn curso_payload(nome: &str) -> CursoPayload {
    CursoPayload {
        curso: nome.into(),
        carga_horaria: "40".into(),
        modalidade: "Online".into(),
        local: "Room1".into(),
    }
}

pub fn matricula_payload(id_aluno: i64, id_curso: i64) -> MatriculaPayload {
    MatriculaPayload {
        id_aluno,
        id_curso,
        data_matricula: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        status: None,
    }
}

pub async fn criar_aluno(pool: &SqlitePool, cpf: &str) -> i64 {
    aluno_service::cadastrar_aluno(pool, &aluno_payload(&format!("Aluno {}", cpf), cpf))
        .await
        .unwrap()
}

pub async fn criar_curso(pool: &SqlitePool, nome: &str) -> i64 {
    curso_service::cadastrar_curso(pool, &curso_payload(nome)).await.unwrap()
}

pub async fn criar_matricula(pool: &SqlitePool, id_aluno: i64, id_curso: i64) -> i64 {
    matricula_service::cadastrar_matricula(pool, &matricula_payload(id_aluno, id_curso))
        .await
        .unwrap()
}
