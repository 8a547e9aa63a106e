//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Decodifica los bytes leídos de una conexión en un [`Request`].
//!
//! ## Formato de un Request
//!
//! ```text
//! POST /files/report.txt HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! User-Agent: curl/8.4.0\r\n
//! \r\n
//! hello
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `VERB /path VERSION`, exactamente tres tokens separados por un espacio
//! 2. **Headers**: Pares `Name: Value` (uno por línea) hasta la primera línea vacía
//! 3. **Empty Line**: `\r\n` que separa headers del body
//! 4. **Body**: La línea siguiente a la línea vacía, tomada tal cual
//!
//! El body no se delimita con `Content-Length`: solo se toma una línea.
//! Las líneas se cortan sobre bytes; solo la request line y los headers
//! deben ser UTF-8, el body puede traer cualquier byte.

use std::collections::HashMap;

/// Separador de líneas del protocolo
const CRLF: &[u8] = b"\r\n";

/// Separador entre nombre y valor de un header
const HEADER_SEPARATOR: &str = ": ";

/// Verbo HTTP del request
///
/// Cualquier token es válido; los que el servidor no conoce quedan en
/// `Other` y simplemente no coinciden con ninguna ruta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    Other(String),
}

impl Method {
    /// Convierte el método a string
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::Other(token) => token.as_str(),
        }
    }
}

impl From<&str> for Method {
    fn from(token: &str) -> Self {
        match token {
            "GET" => Method::GET,
            "POST" => Method::POST,
            other => Method::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Representa un request HTTP parseado
#[derive(Debug, Clone)]
pub struct Request {
    /// Verbo HTTP (GET, POST, ...)
    method: Method,

    /// Path de la petición, siempre empieza con "/"
    path: String,

    /// Versión del protocolo tal como llegó (ej: "HTTP/1.1")
    version: String,

    /// Headers HTTP; ante duplicados gana la última ocurrencia
    headers: HashMap<String, String>,

    /// Body en bytes crudos, presente solo si hay datos después de la línea vacía
    body: Option<Vec<u8>>,
}

/// Errores que pueden ocurrir durante el parsing
///
/// Cualquiera de ellos aborta la conexión sin enviar respuesta.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No llegó ningún byte
    #[error("Empty request")]
    EmptyRequest,

    /// La request line o un header no son UTF-8 válido
    #[error("Request head is not valid UTF-8")]
    InvalidEncoding,

    /// La primera línea no tiene exactamente tres tokens
    #[error("Invalid request line: {0:?}")]
    InvalidRequestLine(String),

    /// El path no empieza con "/"
    #[error("Invalid request path: {0:?}")]
    InvalidPath(String),

    /// Header sin el separador ": "
    #[error("Invalid header: {0:?}")]
    InvalidHeader(String),
}

impl Request {
    /// Parsea un request desde los bytes de una única lectura
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use http_chain_server::http::{Method, Request};
    ///
    /// let raw = b"GET /echo/abc HTTP/1.1\r\nUser-Agent: foo/1.0\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.method(), &Method::GET);
    /// assert_eq!(request.path(), "/echo/abc");
    /// assert_eq!(request.header("User-Agent"), Some("foo/1.0"));
    /// assert_eq!(request.body(), None);
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        if buffer.is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        let lines = split_lines(buffer);

        // 1. Request line
        let (method, path, version) = Self::parse_request_line(as_text(lines[0])?)?;

        // 2. Headers hasta la primera línea vacía
        let (headers, blank_line) = Self::parse_headers(&lines[1..])?;

        // 3. Body: la línea que sigue a la línea vacía, si trae datos
        let body = blank_line
            .and_then(|index| lines[1..].get(index + 1))
            .filter(|line| !line.is_empty())
            .map(|line| line.to_vec());

        Ok(Request {
            method,
            path,
            version,
            headers,
            body,
        })
    }

    /// Parsea la request line: `VERB /path VERSION`
    fn parse_request_line(line: &str) -> Result<(Method, String, String), ParseError> {
        let parts: Vec<&str> = line.split(' ').collect();

        if parts.len() != 3 || parts.iter().any(|part| part.is_empty()) {
            return Err(ParseError::InvalidRequestLine(line.to_string()));
        }

        let path = parts[1];
        if !path.starts_with('/') {
            return Err(ParseError::InvalidPath(path.to_string()));
        }

        Ok((Method::from(parts[0]), path.to_string(), parts[2].to_string()))
    }

    /// Parsea los headers y retorna el índice de la línea vacía, si existe
    fn parse_headers(
        lines: &[&[u8]],
    ) -> Result<(HashMap<String, String>, Option<usize>), ParseError> {
        let mut headers = HashMap::new();

        for (index, raw) in lines.iter().enumerate() {
            if raw.is_empty() {
                return Ok((headers, Some(index)));
            }
            let line = as_text(raw)?;

            // El valor conserva cualquier ": " adicional
            match line.split_once(HEADER_SEPARATOR) {
                Some((name, value)) => {
                    headers.insert(name.to_string(), value.to_string());
                }
                None => return Err(ParseError::InvalidHeader(line.to_string())),
            }
        }

        Ok((headers, None))
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el verbo HTTP del request
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Obtiene el path del request
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene la versión del protocolo
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico (el nombre distingue mayúsculas)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene el body del request, si existe
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

/// Corta el buffer en cada `\r\n`; la última línea puede no tener terminador
fn split_lines(buffer: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut rest = buffer;

    while let Some(end) = rest.windows(CRLF.len()).position(|window| window == CRLF) {
        lines.push(&rest[..end]);
        rest = &rest[end + CRLF.len()..];
    }
    lines.push(rest);

    lines
}

fn as_text(line: &[u8]) -> Result<&str, ParseError> {
    std::str::from_utf8(line).map_err(|_| ParseError::InvalidEncoding)
}
