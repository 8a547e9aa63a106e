//! # Handlers Básicos
//!
//! Rutas que no tocan el sistema de archivos:
//! - `/`: health-check
//! - `/echo/{texto}`: devuelve el texto
//! - `/user-agent`: devuelve el header `User-Agent`
//! - catch-all: 404

use crate::http::{Request, Response, StatusCode};

/// Prefijo de la ruta echo
pub const ECHO_PREFIX: &str = "/echo/";

/// Handler para `/` (solo coincidencia exacta)
///
/// Responde 200 sin headers ni body.
pub fn root_handler(req: &Request) -> Option<Response> {
    if req.path() != "/" {
        return None;
    }
    Some(Response::new(StatusCode::Ok))
}

/// Handler para `/echo/{texto}`
///
/// El body es el resto del path después del prefijo; puede ser vacío.
///
/// # Ejemplo
/// ```
/// use http_chain_server::handlers::echo_handler;
/// use http_chain_server::http::Request;
///
/// let request = Request::parse(b"GET /echo/abc HTTP/1.1\r\n\r\n").unwrap();
/// let response = echo_handler(&request).unwrap();
/// assert_eq!(response.body(), Some(&b"abc"[..]));
/// ```
pub fn echo_handler(req: &Request) -> Option<Response> {
    let text = req.path().strip_prefix(ECHO_PREFIX)?;
    Some(Response::text(text))
}

/// Handler para `/user-agent`
///
/// Refleja el header `User-Agent`; si no viene, el body queda vacío.
pub fn user_agent_handler(req: &Request) -> Option<Response> {
    if req.path() != "/user-agent" {
        return None;
    }
    let agent = req.header("User-Agent").unwrap_or("");
    Some(Response::text(agent))
}

/// Handler terminal: 404 sin body
///
/// Debe ir al final de la cadena; se usa como fallback del router.
pub fn not_found_handler(_req: &Request) -> Response {
    Response::new(StatusCode::NotFound)
}
