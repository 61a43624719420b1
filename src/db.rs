// src/db.rs
use crate::{config::Config, error::AppResult};
use sqlx::sqlite::{
    Sqlite, SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions,
};
use sqlx::Transaction;
use std::str::FromStr;
use std::time::Duration;

/// Cria o pool partilhado por todo o processo. Os services recebem-no sempre por parâmetro.
pub async fn create_db_pool(config: &Config) -> AppResult<SqlitePool> {
    tracing::info!("Ligando à base de dados: {}", config.database_url);

    // Opções de conexão (criar se não existir, WAL, timeout, chaves estrangeiras ativas)
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_conexoes)
        .connect_with(options)
        .await?;

    executar_migracoes(&pool).await?;
    Ok(pool)
}

pub async fn executar_migracoes(pool: &SqlitePool) -> AppResult<()> {
    tracing::info!("Executando migrações da base de dados...");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Migrações concluídas.");
    Ok(())
}

/// Abre uma transação de escrita com `BEGIN IMMEDIATE`.
///
/// Uma transação DEFERRED que lê antes de escrever falha com SQLITE_BUSY na promoção
/// se outra conexão já tiver feito commit, e o `busy_timeout` não cobre esse caso.
/// Com IMMEDIATE o lock de escrita é pedido logo no início e a espera respeita o timeout.
pub async fn begin_escrita(pool: &SqlitePool) -> AppResult<Transaction<'static, Sqlite>> {
    let tx = pool.begin_with("BEGIN IMMEDIATE").await?;
    Ok(tx)
}

/// Sonda de conectividade: usada no arranque (decide se o servidor escuta) e em `/health`.
pub async fn verificar_conexao(pool: &SqlitePool) -> bool {
    match sqlx::query_scalar::<_, i64>("SELECT 1").fetch_one(pool).await {
        Ok(_) => true,
        Err(e) => {
            tracing::error!("Falha na verificação de conexão com a base de dados: {}", e);
            false
        }
    }
}

/// Pool em memória para testes: uma única conexão que nunca expira, senão a base desaparece.
#[cfg(test)]
pub async fn pool_de_teste() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();
    executar_migracoes(&pool).await.unwrap();
    pool
}

/// Base SQLite num ficheiro temporário, com várias conexões reais (WAL).
/// Os ficheiros são apagados quando o valor sai de escopo.
#[cfg(test)]
pub struct BaseTemporaria {
    pub pool: SqlitePool,
    caminho: std::path::PathBuf,
}

#[cfg(test)]
impl BaseTemporaria {
    pub async fn new(max_conexoes: u32) -> Self {
        use std::sync::atomic::{AtomicUsize, Ordering};
        static CONTADOR: AtomicUsize = AtomicUsize::new(0);

        let caminho = std::env::temp_dir().join(format!(
            "sistema_matriculas_teste_{}_{}.db",
            std::process::id(),
            CONTADOR.fetch_add(1, Ordering::SeqCst)
        ));
        let config = Config {
            database_url: format!("sqlite://{}", caminho.display()),
            host: "127.0.0.1".into(),
            porta: 0,
            max_conexoes,
        };
        let pool = create_db_pool(&config).await.unwrap();
        Self { pool, caminho }
    }
}

#[cfg(test)]
impl Drop for BaseTemporaria {
    fn drop(&mut self) {
        for sufixo in ["", "-wal", "-shm"] {
            let mut nome = self.caminho.clone().into_os_string();
            nome.push(sufixo);
            let _ = std::fs::remove_file(nome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_verificar_conexao_ok() {
        let pool = pool_de_teste().await;
        assert!(verificar_conexao(&pool).await);
    }

    #[tokio::test]
    async fn test_verificar_conexao_pool_fechado() {
        let pool = pool_de_teste().await;
        pool.close().await;
        assert!(!verificar_conexao(&pool).await);
    }

    #[tokio::test]
    async fn test_create_db_pool_aplica_migracoes() {
        let config = Config {
            database_url: "sqlite::memory:".into(),
            host: "127.0.0.1".into(),
            porta: 0,
            max_conexoes: 1,
        };
        let pool = create_db_pool(&config).await.unwrap();

        let tabelas: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('aluno', 'curso', 'matricula') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        assert_eq!(vec!["aluno", "curso", "matricula"], tabelas);
    }

    #[tokio::test]
    async fn test_base_temporaria_tem_varias_conexoes() {
        let base = BaseTemporaria::new(3).await;

        // Três conexões em simultâneo: só é possível se o pool não estiver limitado a uma
        let c1 = base.pool.acquire().await.unwrap();
        let c2 = base.pool.acquire().await.unwrap();
        let c3 = base.pool.acquire().await.unwrap();
        assert_eq!(3, base.pool.size());
        drop((c1, c2, c3));

        assert!(verificar_conexao(&base.pool).await);
    }

    #[tokio::test]
    async fn test_begin_escrita_espera_pelo_outro_escritor() {
        let base = BaseTemporaria::new(2).await;

        let mut tx1 = begin_escrita(&base.pool).await.unwrap();
        sqlx::query("INSERT INTO curso (curso, carga_horaria, modalidade, local) VALUES ('A', '1', 'x', 'y')")
            .execute(&mut *tx1)
            .await
            .unwrap();

        let pool = base.pool.clone();
        let segundo = tokio::spawn(async move {
            let mut tx2 = begin_escrita(&pool).await.unwrap();
            sqlx::query("INSERT INTO curso (curso, carga_horaria, modalidade, local) VALUES ('B', '1', 'x', 'y')")
                .execute(&mut *tx2)
                .await
                .unwrap();
            tx2.commit().await.unwrap();
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        tx1.commit().await.unwrap();
        segundo.await.unwrap();

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM curso")
            .fetch_one(&base.pool)
            .await
            .unwrap();
        assert_eq!(2, total);
    }
}
