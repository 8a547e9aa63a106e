//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración del servidor con soporte para argumentos CLI y variables
//! de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./http_chain_server --directory /tmp/files --port 4221
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_DIRECTORY=/tmp/files LOG_LEVEL=debug ./http_chain_server
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Configuración del servidor HTTP/1.1
#[derive(Debug, Clone, Parser)]
#[command(name = "http_chain_server")]
#[command(about = "Servidor HTTP/1.1 mínimo con cadena de handlers")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Directorio raíz para /files/
    #[arg(short, long, default_value = ".", env = "HTTP_DIRECTORY")]
    pub directory: PathBuf,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "4221", env = "HTTP_PORT")]
    pub port: u16,

    /// Tamaño del buffer de la única lectura por conexión, en bytes
    #[arg(long = "buffer-size", default_value = "1024", env = "HTTP_BUFFER_SIZE")]
    pub buffer_size: usize,

    /// Nivel de logging (RUST_LOG tiene prioridad)
    #[arg(long = "log-level", default_value = "info", env = "LOG_LEVEL")]
    pub log_level: String,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use http_chain_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:4221");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }
        if self.buffer_size == 0 {
            return Err("Buffer size must be >= 1".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    /// Mismos valores que los defaults del CLI
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            host: "0.0.0.0".to_string(),
            port: 4221,
            buffer_size: 1024,
            log_level: "info".to_string(),
        }
    }
}
