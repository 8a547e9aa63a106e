//! # Handlers de Rutas
//!
//! Cada handler es una función pura de `&Request` a `Option<Response>`,
//! salvo los de archivos, que dependen del directorio raíz que reciben al
//! construirse.
//!
//! ## Categorías
//!
//! - **basic**: root, echo, user-agent y el catch-all 404
//! - **files**: lectura y escritura de archivos bajo el directorio raíz

pub mod basic;
pub mod files;

// Re-exportar funciones útiles
pub use basic::*;
pub use files::*;

use crate::router::Router;
use std::path::Path;

/// Arma la cadena de handlers del servidor
///
/// Orden: rutas exactas y de prefijo primero, el 404 como fallback.
///
/// # Ejemplo
/// ```
/// use http_chain_server::handlers::default_router;
/// use http_chain_server::http::{Request, StatusCode};
///
/// let router = default_router(".");
/// let request = Request::parse(b"GET /missing HTTP/1.1\r\n\r\n").unwrap();
/// assert_eq!(router.route(&request).status(), StatusCode::NotFound);
/// ```
pub fn default_router(directory: impl AsRef<Path>) -> Router {
    let directory = directory.as_ref();

    Router::new(not_found_handler)
        .with_route(root_handler)
        .with_route(echo_handler)
        .with_route(user_agent_handler)
        .with_route(get_file_handler(directory))
        .with_route(post_file_handler(directory))
}
