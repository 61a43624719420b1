// src/config.rs
use crate::error::{AppError, AppResult};
use std::{env, net::SocketAddr, str::FromStr};

const PORTA_PADRAO: u16 = 3333;
const MAX_CONEXOES_PADRAO: u32 = 5;

/// Configuração do processo, lida das variáveis de ambiente (e do `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub porta: u16,
    pub max_conexoes: u32,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok(); // Carrega .env se existir

        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let porta = ler_numero("SERVER_PORT", PORTA_PADRAO)?;
        let max_conexoes = ler_numero("DB_MAX_CONNECTIONS", MAX_CONEXOES_PADRAO)?;

        Ok(Config {
            database_url,
            host,
            porta,
            max_conexoes,
        })
    }

    pub fn endereco(&self) -> AppResult<SocketAddr> {
        format!("{}:{}", self.host, self.porta)
            .parse()
            .map_err(|e| AppError::Configuracao(format!("endereço inválido: {}", e)))
    }
}

// Variável ausente usa o valor padrão; presente mas inválida é erro.
fn ler_numero<T: FromStr>(nome: &str, padrao: T) -> AppResult<T> {
    match env::var(nome) {
        Ok(valor) => valor
            .trim()
            .parse()
            .map_err(|_| AppError::Configuracao(format!("{} inválido: {}", nome, valor))),
        Err(_) => Ok(padrao),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(host: &str, porta: u16) -> Config {
        Config {
            database_url: "sqlite::memory:".into(),
            host: host.into(),
            porta,
            max_conexoes: 1,
        }
    }

    #[test]
    fn test_endereco_valido() {
        let addr = config("127.0.0.1", 3333).endereco().unwrap();
        assert_eq!(3333, addr.port());
        assert!(addr.ip().is_loopback());
    }

    #[test]
    fn test_endereco_invalido() {
        assert!(matches!(
            config("não é um host", 80).endereco(),
            Err(AppError::Configuracao(_))
        ));
    }

    #[test]
    fn test_ler_numero_ausente_usa_padrao() {
        let valor: u16 = ler_numero("SISTEMA_MATRICULAS_VARIAVEL_INEXISTENTE", 42).unwrap();
        assert_eq!(42, valor);
    }
}
