//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Servidor TCP que:
//! 1. Escucha en un puerto
//! 2. Acepta conexiones entrantes, un thread por conexión
//! 3. Lee y parsea un único request por conexión
//! 4. Despacha por la cadena de handlers y envía la respuesta
//! 5. Cierra la conexión

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::{ConnectionError, Server, ServerError};
