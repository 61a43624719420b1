// src/services/curso_service.rs
use crate::{
    db,
    error::{AppError, AppResult},
    models::curso::{Curso, CursoPayload},
    services::matricula_service,
};
use sqlx::SqlitePool;

/// Lista apenas os cursos ativos.
pub async fn listar_cursos(db_pool: &SqlitePool) -> AppResult<Vec<Curso>> {
    tracing::debug!("Buscando lista de cursos ativos...");
    let cursos = sqlx::query_as::<_, Curso>(
        r#"
        SELECT id_curso, curso, carga_horaria, modalidade, local, status_curso
        FROM curso
        WHERE status_curso = 1
        ORDER BY id_curso ASC
        "#,
    )
    .fetch_all(db_pool)
    .await
    .inspect_err(|e| tracing::error!("Erro ao buscar lista de cursos: {}", e))?;

    tracing::debug!("Encontrados {} cursos.", cursos.len());
    Ok(cursos)
}

pub async fn cadastrar_curso(db_pool: &SqlitePool, curso: &CursoPayload) -> AppResult<i64> {
    tracing::info!("Tentando cadastrar curso: {}", curso.curso);
    let id_curso = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO curso (curso, carga_horaria, modalidade, local)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING id_curso
        "#,
    )
    .bind(&curso.curso)
    .bind(&curso.carga_horaria)
    .bind(&curso.modalidade)
    .bind(&curso.local)
    .fetch_one(db_pool)
    .await
    .inspect_err(|e| tracing::error!("Erro ao cadastrar o curso: {}", e))?;

    tracing::info!("✅ Curso cadastrado com sucesso! ID do curso: {}", id_curso);
    Ok(id_curso)
}

/// Desativa o curso e as matrículas que o referenciam. Tudo ou nada.
pub async fn remover_curso(db_pool: &SqlitePool, id_curso: i64) -> AppResult<()> {
    tracing::info!("Tentando remover curso: {}", id_curso);
    let mut tx = db::begin_escrita(db_pool).await?;

    let matriculas = matricula_service::desativar_matriculas_do_curso(&mut tx, id_curso).await?;

    let rows_affected = sqlx::query(
        r#"
        UPDATE curso SET status_curso = 0
        WHERE id_curso = ?1 AND status_curso = 1
        "#,
    )
    .bind(id_curso)
    .execute(&mut *tx)
    .await
    .inspect_err(|e| tracing::error!("Erro ao remover curso {}: {}", id_curso, e))?
    .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao remover: curso {} não encontrado ou já removido.", id_curso);
        tx.rollback().await?;
        return Err(AppError::NaoEncontrado(format!("curso {}", id_curso)));
    }

    tx.commit().await?;
    tracing::info!(
        "✅ Curso {} removido ({} matrículas desativadas).",
        id_curso,
        matriculas
    );
    Ok(())
}

pub async fn atualizar_curso(
    db_pool: &SqlitePool,
    id_curso: i64,
    curso: &CursoPayload,
) -> AppResult<()> {
    tracing::info!("Tentando atualizar curso: {}", id_curso);
    let rows_affected = sqlx::query(
        r#"
        UPDATE curso
        SET curso = ?1, carga_horaria = ?2, modalidade = ?3, local = ?4
        WHERE id_curso = ?5 AND status_curso = 1
        "#,
    )
    .bind(&curso.curso)
    .bind(&curso.carga_horaria)
    .bind(&curso.modalidade)
    .bind(&curso.local)
    .bind(id_curso)
    .execute(db_pool)
    .await
    .inspect_err(|e| tracing::error!("Erro ao atualizar curso {}: {}", id_curso, e))?
    .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Falha ao atualizar: curso {} não encontrado.", id_curso);
        return Err(AppError::NaoEncontrado(format!("curso {}", id_curso)));
    }

    tracing::info!("✅ Curso {} atualizado.", id_curso);
    Ok(())
}
