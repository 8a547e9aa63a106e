//! # HTTP Chain Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo: acepta conexiones TCP, parsea un request por
//! conexión, lo despacha por una cadena ordenada de handlers y serializa la
//! respuesta de vuelta al socket.
//!
//! ## Arquitectura
//!
//! ```text
//! bytes → http::Request::parse → Router::route → http::encoding::negotiate → Response::to_bytes → bytes
//! ```
//!
//! - `http`: Wire codec (request, response, status, compresión)
//! - `router`: Cadena de handlers con fallback obligatorio
//! - `handlers`: Rutas concretas (root, echo, user-agent, archivos, 404)
//! - `server`: Lógica del servidor TCP y manejo de conexiones
//! - `config`: Argumentos CLI y variables de entorno
//! - `logging`: Inicialización de `tracing`
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use http_chain_server::config::Config;
//! use http_chain_server::server::Server;
//!
//! let config = Config::default();
//! let server = Server::bind(&config).expect("Error al abrir el puerto");
//! server.run().expect("Error al aceptar conexiones");
//! ```

pub mod config;
pub mod handlers;
pub mod http;
pub mod logging;
pub mod router;
pub mod server;
