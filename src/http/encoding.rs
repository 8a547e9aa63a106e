//! # Compresión de Respuestas
//! src/http/encoding.rs
//!
//! Si el cliente anuncia `Accept-Encoding: gzip` y la respuesta trae body,
//! el body se comprime con gzip antes de serializar. Los handlers no saben
//! nada de esto: se aplica entre el dispatch y el encode.

use super::{Request, Response};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

/// Único encoding soportado
const GZIP: &str = "gzip";

/// Verifica si el header `Accept-Encoding` incluye gzip
///
/// El header es una lista separada por comas (ej: `deflate, gzip`).
pub fn accepts_gzip(request: &Request) -> bool {
    request
        .header("Accept-Encoding")
        .map(|value| {
            value
                .split(',')
                .any(|token| token.trim().eq_ignore_ascii_case(GZIP))
        })
        .unwrap_or(false)
}

/// Aplica la compresión negociada a una respuesta
///
/// Respuestas sin body se retornan intactas. Si la compresión falla se
/// envía el body original.
pub fn negotiate(request: &Request, mut response: Response) -> Response {
    if !accepts_gzip(request) {
        return response;
    }

    let compressed = match response.body() {
        Some(body) => gzip(body),
        None => return response,
    };

    match compressed {
        Ok(bytes) => {
            response.add_header("Content-Encoding", GZIP);
            response.set_body(bytes);
        }
        Err(e) => tracing::warn!(error = %e, "gzip compression failed, sending identity body"),
    }

    response
}

/// Comprime bytes en formato gzip
fn gzip(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}
