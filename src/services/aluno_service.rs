// src/services/aluno_service.rs
use crate::{
    db,
    error::{AppError, AppResult},
    models::aluno::{Aluno, AlunoPayload},
    services::matricula_service,
};
use sqlx::SqlitePool;

/// Lista apenas os alunos ativos, por ordem de id.
pub async fn listar_alunos(db_pool: &SqlitePool) -> AppResult<Vec<Aluno>> {
    tracing::debug!("Buscando lista de alunos ativos...");
    let alunos = sqlx::query_as::<_, Aluno>(
        r#"
        SELECT id_aluno, nome, cpf, telefone, email, data_nascimento, endereco, status_aluno
        FROM aluno
        WHERE status_aluno = 1
        ORDER BY id_aluno ASC
        "#,
    )
    .fetch_all(db_pool)
    .await
    .inspect_err(|e| tracing::error!("Erro ao buscar lista de alunos: {}", e))?;

    tracing::debug!("Encontrados {} alunos.", alunos.len());
    Ok(alunos)
}

/// Insere um aluno e devolve o id atribuído pela DB.
pub async fn cadastrar_aluno(db_pool: &SqlitePool, aluno: &AlunoPayload) -> AppResult<i64> {
    tracing::info!("Tentando cadastrar aluno: {}", aluno.nome);
    let id_aluno = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO aluno (nome, cpf, telefone, email, data_nascimento, endereco)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        RETURNING id_aluno
        "#,
    )
    .bind(&aluno.nome)
    .bind(&aluno.cpf)
    .bind(&aluno.telefone)
    .bind(&aluno.email)
    .bind(aluno.data_nascimento)
    .bind(&aluno.endereco)
    .fetch_one(db_pool)
    .await
    .inspect_err(|e| tracing::error!("Erro ao cadastrar o aluno: {}", e))?;

    tracing::info!("✅ Aluno cadastrado com sucesso! ID do aluno: {}", id_aluno);
    Ok(id_aluno)
}

/// Remove logicamente o aluno e todas as suas matrículas ativas, numa única transação.
pub async fn remover_aluno(db_pool: &SqlitePool, id_aluno: i64) -> AppResult<()> {
    tracing::info!("Tentando remover aluno: {}", id_aluno);
    let mut tx = db::begin_escrita(db_pool).await?;

    let matriculas = matricula_service::desativar_matriculas_do_aluno(&mut tx, id_aluno).await?;

    let rows_affected = sqlx::query(
        r#"
        UPDATE aluno SET status_aluno = 0
        WHERE id_aluno = ?1 AND status_aluno = 1
        "#,
    )
    .bind(id_aluno)
    .execute(&mut *tx)
    .await
    .inspect_err(|e| tracing::error!("Erro ao remover aluno {}: {}", id_aluno, e))?
    .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao remover: aluno {} não encontrado ou já removido.", id_aluno);
        tx.rollback().await?; // Desfaz também a cascata
        return Err(AppError::NaoEncontrado(format!("aluno {}", id_aluno)));
    }

    tx.commit().await?;
    tracing::info!(
        "✅ Aluno {} removido ({} matrículas desativadas).",
        id_aluno,
        matriculas
    );
    Ok(())
}

/// Reescreve todos os campos editáveis de um aluno ativo.
pub async fn atualizar_aluno(
    db_pool: &SqlitePool,
    id_aluno: i64,
    aluno: &AlunoPayload,
) -> AppResult<()> {
    tracing::info!("Tentando atualizar aluno: {}", id_aluno);
    let rows_affected = sqlx::query(
        r#"
        UPDATE aluno
        SET nome = ?1, cpf = ?2, telefone = ?3, email = ?4, data_nascimento = ?5, endereco = ?6
        WHERE id_aluno = ?7 AND status_aluno = 1
        "#,
    )
    .bind(&aluno.nome)
    .bind(&aluno.cpf)
    .bind(&aluno.telefone)
    .bind(&aluno.email)
    .bind(aluno.data_nascimento)
    .bind(&aluno.endereco)
    .bind(id_aluno)
    .execute(db_pool)
    .await
    .inspect_err(|e| tracing::error!("Erro ao atualizar aluno {}: {}", id_aluno, e))?
    .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao atualizar: aluno {} não encontrado.", id_aluno);
        return Err(AppError::NaoEncontrado(format!("aluno {}", id_aluno)));
    }

    tracing::info!("✅ Aluno {} atualizado.", id_aluno);
    Ok(())
}
