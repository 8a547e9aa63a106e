//! # Handlers de Archivos
//!
//! `GET /files/{nombre}` lee y `POST /files/{nombre}` crea (o sobrescribe)
//! un archivo dentro del directorio raíz configurado. El directorio se
//! recibe al construir el handler, nunca desde estado global.
//!
//! Cualquier fallo (archivo inexistente, sin permisos, nombre que escapa
//! del directorio raíz) hace que el handler ceda el turno; la cadena
//! termina respondiendo 404.

use crate::http::{Method, Request, Response, StatusCode};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Prefijo de las rutas de archivos
pub const FILES_PREFIX: &str = "/files/";

/// Resuelve el nombre pedido dentro del directorio raíz
///
/// Solo se aceptan componentes normales: `..`, rutas absolutas y nombres
/// vacíos retornan `None`.
pub fn resolve(root: &Path, name: &str) -> Option<PathBuf> {
    let mut resolved = root.to_path_buf();
    let mut pushed = false;

    for component in Path::new(name).components() {
        match component {
            Component::Normal(segment) => {
                resolved.push(segment);
                pushed = true;
            }
            Component::CurDir => {}
            _ => return None,
        }
    }

    pushed.then_some(resolved)
}

/// Extrae la ruta del archivo si el request es `verb /files/...`
fn target(req: &Request, verb: Method, root: &Path) -> Option<PathBuf> {
    if *req.method() != verb {
        return None;
    }
    let name = req.path().strip_prefix(FILES_PREFIX)?;
    resolve(root, name)
}

/// Construye el handler `GET /files/{nombre}`
///
/// Responde 200 con el contenido como `application/octet-stream`.
pub fn get_file_handler(
    root: &Path,
) -> impl Fn(&Request) -> Option<Response> + Send + Sync + 'static {
    let root = root.to_path_buf();

    move |req: &Request| {
        let path = target(req, Method::GET, &root)?;

        match fs::read(&path) {
            Ok(contents) => Some(
                Response::new(StatusCode::Ok)
                    .with_header("Content-Type", "application/octet-stream")
                    .with_body_bytes(contents),
            ),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "file not readable");
                None
            }
        }
    }
}

/// Construye el handler `POST /files/{nombre}`
///
/// Escribe el body del request (vacío si no hay) y responde 201 sin body.
pub fn post_file_handler(
    root: &Path,
) -> impl Fn(&Request) -> Option<Response> + Send + Sync + 'static {
    let root = root.to_path_buf();

    move |req: &Request| {
        let path = target(req, Method::POST, &root)?;
        let contents = req.body().unwrap_or_default();

        match fs::write(&path, contents) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), bytes = contents.len(), "file written");
                Some(Response::new(StatusCode::Created))
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to write file");
                None
            }
        }
    }
}
