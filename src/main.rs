// src/main.rs

// --- Declaração dos Módulos ---
mod config;
mod db;
mod error;
mod models;
mod services;
mod shutdown;
mod state;
mod web;

#[cfg(test)]
mod testutils;

// --- Imports ---
use crate::{config::Config, state::AppState};
use axum::serve;
use sqlx::SqlitePool;
use std::{future::Future, net::SocketAddr};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Configuração do Logging (Tracing) ---
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "sistema_matriculas=debug,tower_http=info,sqlx=warn".into()
        }))
        .with(fmt::layer())
        .init();

    tracing::info!("🚀 Iniciando servidor de matrículas...");

    let config = Config::from_env()
        .map_err(|e| anyhow::anyhow!("Falha ao ler a configuração: {}", e))?;
    let addr = config.endereco()?;

    // --- Configuração da Base de Dados ---
    let db_pool = match db::create_db_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("❌ Falha crítica ao inicializar a base de dados: {}", e);
            return Err(anyhow::anyhow!("Falha ao conectar/migrar DB: {}", e));
        }
    };

    servir(db_pool.clone(), addr, shutdown::shutdown_signal()).await?;

    tracing::info!("👋 Servidor encerrado, fechando o pool de conexões.");
    db_pool.close().await;
    Ok(())
}

/// Verifica a conexão e, se estiver ok, escuta em `addr` até `encerrar` resolver.
///
/// Se a verificação falhar o listener nunca é aberto: o processo continua vivo,
/// sem servir, até ao sinal de encerramento. Devolve `true` se chegou a servir.
async fn servir<F>(db_pool: SqlitePool, addr: SocketAddr, encerrar: F) -> anyhow::Result<bool>
where
    F: Future<Output = ()> + Send + 'static,
{
    if !db::verificar_conexao(&db_pool).await {
        tracing::error!("❌ Erro ao conectar ao banco de dados. O servidor não será iniciado.");
        encerrar.await;
        return Ok(false);
    }
    tracing::info!("✅ Conexão com banco de dados realizada com sucesso.");

    // --- Configuração do Endereço e Listener ---
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("❌ Falha ao iniciar listener em {}: {}", addr, e);
            return Err(e.into());
        }
    };
    tracing::info!("📡 Servidor escutando em http://{}", addr);

    // --- Criação do Router e Aplicação das Camadas (Middlewares) ---
    let app = web::routes::create_router(AppState { db_pool })
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    // --- Início do Servidor ---
    if let Err(e) = serve(listener, app.into_make_service())
        .with_graceful_shutdown(encerrar)
        .await
    {
        tracing::error!("❌ Erro fatal no servidor: {}", e);
        return Err(e.into());
    }

    Ok(true)
}
