//! Carga y gestión de configuración de la aplicación.

use std::env;
use anyhow::{anyhow, Result};

/// Configuración completa de la aplicación.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_addr: String,
    /// Latencia simulada (ms) al analizar un negocio.
    pub submit_delay_ms: u64,
    /// Latencia simulada (ms) al regenerar el titular.
    pub regenerate_delay_ms: u64,
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno (usando .env si existe).
    pub fn from_env() -> Result<Self> {
        let server_addr =
            env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:3322".to_string());

        let submit_delay_ms = parse_delay("SUBMIT_DELAY_MS", 1500)?;
        let regenerate_delay_ms = parse_delay("REGENERATE_DELAY_MS", 800)?;

        Ok(Self {
            server_addr,
            submit_delay_ms,
            regenerate_delay_ms,
        })
    }
}

fn parse_delay(var: &str, default: u64) -> Result<u64> {
    match env::var(var) {
        Ok(value) => value
            .parse::<u64>()
            .map_err(|_| anyhow!("{var} debe ser un número de milisegundos, no '{value}'")),
        Err(_) => Ok(default),
    }
}
