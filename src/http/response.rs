//! # Construcción de Respuestas HTTP
//! src/http/response.rs
//!
//! API para construir respuestas HTTP/1.1 y convertirlas a bytes para
//! enviarlas al cliente.
//!
//! ## Formato de una respuesta
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 3\r\n
//! \r\n
//! abc
//! ```
//!
//! Un body ausente es distinto de un body vacío: sin body no se agrega
//! `Content-Length` salvo que un handler lo establezca explícitamente.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use http_chain_server::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_header("Content-Type", "text/plain")
//!     .with_body("abc");
//!
//! let bytes = response.to_bytes();
//! assert!(bytes.ends_with(b"\r\n\r\nabc"));
//! ```

use super::StatusCode;
use std::collections::BTreeMap;

/// Versión de protocolo de todas las respuestas
pub const HTTP_VERSION: &str = "HTTP/1.1";

/// Representa una respuesta HTTP completa
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Código de estado HTTP (200, 201, 404)
    status: StatusCode,

    /// Headers HTTP ordenados por nombre; un nombre repetido sobrescribe al anterior
    headers: BTreeMap<String, String>,

    /// Cuerpo de la respuesta; `None` no emite nada después de la línea vacía
    body: Option<Vec<u8>>,
}

impl Response {
    /// Crea una respuesta sin headers ni body
    ///
    /// # Ejemplo
    /// ```
    /// use http_chain_server::http::{Response, StatusCode};
    ///
    /// let response = Response::new(StatusCode::Ok);
    /// assert_eq!(response.to_bytes(), b"HTTP/1.1 200 OK\r\n\r\n");
    /// ```
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: BTreeMap::new(),
            body: None,
        }
    }

    /// Agrega un header a la respuesta
    ///
    /// Si el header ya existe, se sobrescribe.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.add_header(name, value);
        self
    }

    /// Agrega un header a una respuesta existente (versión mutable)
    pub fn add_header(&mut self, name: &str, value: &str) {
        self.headers.insert(name.to_string(), value.to_string());
    }

    /// Establece el cuerpo desde un string y su `Content-Length`
    pub fn with_body(self, body: &str) -> Self {
        self.with_body_bytes(body.as_bytes().to_vec())
    }

    /// Establece el cuerpo desde bytes y su `Content-Length`
    ///
    /// Útil para archivos con contenido binario.
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.set_body(body);
        self
    }

    /// Reemplaza el body y recalcula `Content-Length`
    pub fn set_body(&mut self, body: Vec<u8>) {
        self.add_header("Content-Length", &body.len().to_string());
        self.body = Some(body);
    }

    /// Crea una respuesta 200 de texto plano
    ///
    /// # Ejemplo
    /// ```
    /// use http_chain_server::http::Response;
    ///
    /// let response = Response::text("abc");
    /// assert_eq!(response.header("Content-Type"), Some("text/plain"));
    /// assert_eq!(response.header("Content-Length"), Some("3"));
    /// ```
    pub fn text(body: &str) -> Self {
        Self::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_body(body)
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// - Status line: `HTTP/1.1 200 OK\r\n`
    /// - Headers: `Header-Name: Value\r\n` en orden alfabético, así dos
    ///   respuestas iguales producen los mismos bytes
    /// - Línea vacía: `\r\n`
    /// - Body: tal cual, sin terminador final
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::new();

        // 1. Status line
        let status_line = format!("{} {}\r\n", self.version(), self.status);
        result.extend_from_slice(status_line.as_bytes());

        // 2. Headers
        for (name, value) in &self.headers {
            let header_line = format!("{}: {}\r\n", name, value);
            result.extend_from_slice(header_line.as_bytes());
        }

        // 3. Línea vacía que separa headers del body
        result.extend_from_slice(b"\r\n");

        // 4. Body (si existe)
        if let Some(body) = &self.body {
            result.extend_from_slice(body);
        }

        result
    }

    /// Obtiene la versión de protocolo de la respuesta
    pub fn version(&self) -> &'static str {
        HTTP_VERSION
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene una referencia a los headers
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene el body, si existe
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}
