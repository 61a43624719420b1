// src/services/matricula_service.rs
use crate::{
    db,
    error::{AppError, AppResult},
    models::matricula::{Matricula, MatriculaPayload},
};
use sqlx::{SqliteConnection, SqlitePool};

/// Lista as matrículas ativas.
pub async fn listar_matriculas(db_pool: &SqlitePool) -> AppResult<Vec<Matricula>> {
    tracing::debug!("Buscando lista de matrículas ativas...");
    let matriculas = sqlx::query_as::<_, Matricula>(
        r#"
        SELECT id_matricula, id_aluno, id_curso, data_matricula, status_matricula
        FROM matricula
        WHERE status_matricula = 1
        ORDER BY id_matricula ASC
        "#,
    )
    .fetch_all(db_pool)
    .await
    .inspect_err(|e| tracing::error!("Erro ao buscar lista de matrículas: {}", e))?;

    tracing::debug!("Encontradas {} matrículas.", matriculas.len());
    Ok(matriculas)
}

/// Cria uma matrícula. Aluno e curso têm de existir e estar ativos no momento da escrita.
pub async fn cadastrar_matricula(
    db_pool: &SqlitePool,
    matricula: &MatriculaPayload,
) -> AppResult<i64> {
    tracing::info!(
        "Tentando matricular aluno {} no curso {}",
        matricula.id_aluno,
        matricula.id_curso
    );
    if let Some(status) = matricula.status {
        tracing::debug!("Campo status={} no corpo ignorado no cadastro.", status);
    }
    let mut tx = db::begin_escrita(db_pool).await?;

    verificar_referencias(&mut tx, matricula).await?;

    let id_matricula = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO matricula (id_aluno, id_curso, data_matricula)
        VALUES (?1, ?2, ?3)
        RETURNING id_matricula
        "#,
    )
    .bind(matricula.id_aluno)
    .bind(matricula.id_curso)
    .bind(matricula.data_matricula)
    .fetch_one(&mut *tx)
    .await
    .inspect_err(|e| tracing::error!("Erro ao cadastrar a matrícula: {}", e))?;

    tx.commit().await?;
    tracing::info!("✅ Matrícula cadastrada com sucesso! ID da matrícula: {}", id_matricula);
    Ok(id_matricula)
}

pub async fn remover_matricula(db_pool: &SqlitePool, id_matricula: i64) -> AppResult<()> {
    tracing::info!("Tentando remover matrícula: {}", id_matricula);
    let rows_affected = sqlx::query(
        r#"
        UPDATE matricula SET status_matricula = 0
        WHERE id_matricula = ?1 AND status_matricula = 1
        "#,
    )
    .bind(id_matricula)
    .execute(db_pool)
    .await
    .inspect_err(|e| tracing::error!("Erro ao remover matrícula {}: {}", id_matricula, e))?
    .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao remover: matrícula {} não encontrada.", id_matricula);
        return Err(AppError::NaoEncontrado(format!("matrícula {}", id_matricula)));
    }

    tracing::info!("✅ Matrícula {} removida.", id_matricula);
    Ok(())
}

pub async fn atualizar_matricula(
    db_pool: &SqlitePool,
    id_matricula: i64,
    matricula: &MatriculaPayload,
) -> AppResult<()> {
    tracing::info!("Tentando atualizar matrícula: {}", id_matricula);
    let mut tx = db::begin_escrita(db_pool).await?;

    verificar_referencias(&mut tx, matricula).await?;

    let rows_affected = sqlx::query(
        r#"
        UPDATE matricula
        SET id_aluno = ?1, id_curso = ?2, data_matricula = ?3
        WHERE id_matricula = ?4 AND status_matricula = 1
        "#,
    )
    .bind(matricula.id_aluno)
    .bind(matricula.id_curso)
    .bind(matricula.data_matricula)
    .bind(id_matricula)
    .execute(&mut *tx)
    .await
    .inspect_err(|e| tracing::error!("Erro ao atualizar matrícula {}: {}", id_matricula, e))?
    .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao atualizar: matrícula {} não encontrada.", id_matricula);
        tx.rollback().await?;
        return Err(AppError::NaoEncontrado(format!("matrícula {}", id_matricula)));
    }

    tx.commit().await?;
    tracing::info!("✅ Matrícula {} atualizada.", id_matricula);
    Ok(())
}

// --- Cascatas (chamadas dentro da transação do pai) ---

pub async fn desativar_matriculas_do_aluno(
    conn: &mut SqliteConnection,
    id_aluno: i64,
) -> AppResult<u64> {
    let rows_affected = sqlx::query(
        "UPDATE matricula SET status_matricula = 0 WHERE id_aluno = ?1 AND status_matricula = 1",
    )
    .bind(id_aluno)
    .execute(&mut *conn)
    .await
    .inspect_err(|e| tracing::error!("Erro ao desativar matrículas do aluno {}: {}", id_aluno, e))?
    .rows_affected();

    tracing::debug!("{} matrículas do aluno {} desativadas.", rows_affected, id_aluno);
    Ok(rows_affected)
}

pub async fn desativar_matriculas_do_curso(
    conn: &mut SqliteConnection,
    id_curso: i64,
) -> AppResult<u64> {
    let rows_affected = sqlx::query(
        "UPDATE matricula SET status_matricula = 0 WHERE id_curso = ?1 AND status_matricula = 1",
    )
    .bind(id_curso)
    .execute(&mut *conn)
    .await
    .inspect_err(|e| tracing::error!("Erro ao desativar matrículas do curso {}: {}", id_curso, e))?
    .rows_affected();

    tracing::debug!("{} matrículas do curso {} desativadas.", rows_affected, id_curso);
    Ok(rows_affected)
}

// Aluno e curso têm de existir e estar ativos. A FK do schema só cobre a existência.
async fn verificar_referencias(
    conn: &mut SqliteConnection,
    matricula: &MatriculaPayload,
) -> AppResult<()> {
    let aluno_ativo: Option<bool> =
        sqlx::query_scalar("SELECT status_aluno FROM aluno WHERE id_aluno = ?1")
            .bind(matricula.id_aluno)
            .fetch_optional(&mut *conn)
            .await?;
    match aluno_ativo {
        Some(true) => {}
        Some(false) => {
            return Err(AppError::Conflito(format!("aluno {} removido", matricula.id_aluno)))
        }
        None => {
            return Err(AppError::Conflito(format!("aluno {} inexistente", matricula.id_aluno)))
        }
    }

    let curso_ativo: Option<bool> =
        sqlx::query_scalar("SELECT status_curso FROM curso WHERE id_curso = ?1")
            .bind(matricula.id_curso)
            .fetch_optional(&mut *conn)
            .await?;
    match curso_ativo {
        Some(true) => Ok(()),
        Some(false) => Err(AppError::Conflito(format!("curso {} removido", matricula.id_curso))),
        None => Err(AppError::Conflito(format!("curso {} inexistente", matricula.id_curso))),
    }
}
