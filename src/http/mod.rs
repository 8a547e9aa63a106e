//! # Módulo HTTP
//!
//! Wire codec del servidor: traduce bytes crudos a un [`Request`] y un
//! [`Response`] de vuelta a bytes. No sabe nada de rutas.
//!
//! - Parsing de requests HTTP/1.1 (una sola lectura por conexión)
//! - Construcción y serialización de responses
//! - Status codes como par (código, reason phrase)
//! - Compresión gzip negociada con `Accept-Encoding`
//!
//! ### Formato de Request
//!
//! ```text
//! GET /echo/abc HTTP/1.1\r\n
//! User-Agent: foo/1.0\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 3\r\n
//! \r\n
//! abc
//! ```

pub mod encoding;  // Compresión gzip de respuestas
pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use request::{Method, ParseError, Request};
pub use response::Response;
pub use status::StatusCode;
