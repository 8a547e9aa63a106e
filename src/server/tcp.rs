//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP que maneja múltiples conexiones
//! simultáneas usando threads. Cada conexión se procesa en su propio
//! thread: lee una vez, decodifica, despacha, codifica, escribe y cierra.
//!
//! No hay keep-alive, timeouts ni límite de threads: un cliente que nunca
//! envía datos ocupa su thread indefinidamente.

use crate::config::Config;
use crate::handlers;
use crate::http::encoding;
use crate::http::{ParseError, Request};
use crate::router::Router;
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use tracing::{debug, error, info, info_span, warn};

/// Errores fatales del servidor
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No se pudo abrir el puerto
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    /// `accept` falló; el servidor se detiene
    #[error("failed to accept connection: {0}")]
    Accept(#[source] io::Error),
}

/// Errores que abortan una sola conexión
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    /// Falló la lectura o la escritura del socket
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// El request no se pudo decodificar; no se envía respuesta
    #[error("malformed request: {0}")]
    Parse(#[from] ParseError),
}

/// Servidor HTTP/1.1 concurrente
pub struct Server {
    listener: TcpListener,
    router: Arc<Router>,
    buffer_size: usize,
}

impl Server {
    /// Abre el puerto configurado con la cadena de handlers por defecto
    pub fn bind(config: &Config) -> Result<Self, ServerError> {
        let router = handlers::default_router(&config.directory);
        Self::with_router(&config.address(), router, config.buffer_size)
    }

    /// Abre `address` con una cadena de handlers arbitraria
    pub fn with_router(
        address: &str,
        router: Router,
        buffer_size: usize,
    ) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(address).map_err(|source| ServerError::Bind {
            address: address.to_string(),
            source,
        })?;

        Ok(Self {
            listener,
            router: Arc::new(router),
            buffer_size,
        })
    }

    /// Dirección real en la que escucha (útil con el puerto 0)
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Acepta conexiones indefinidamente, un thread por conexión
    ///
    /// Solo retorna si `accept` falla.
    pub fn run(&self) -> Result<(), ServerError> {
        if let Ok(address) = self.local_addr() {
            info!(%address, "listening, one thread per connection");
        }

        for stream in self.listener.incoming() {
            let stream = stream.map_err(|e| {
                error!(error = %e, "accept failed");
                ServerError::Accept(e)
            })?;

            let router = Arc::clone(&self.router);
            let buffer_size = self.buffer_size;

            let peer = stream
                .peer_addr()
                .map(|addr| addr.to_string())
                .unwrap_or_else(|_| "unknown".to_string());

            info!(%peer, "accepted connection");

            thread::spawn(move || {
                let span = info_span!("connection", %peer);
                let _guard = span.enter();

                if let Err(e) = Self::handle_connection(stream, &router, buffer_size) {
                    warn!(error = %e, "connection aborted");
                }
            });
        }

        Ok(())
    }

    /// Procesa una conexión completa; el socket se cierra al retornar
    fn handle_connection(
        mut stream: TcpStream,
        router: &Router,
        buffer_size: usize,
    ) -> Result<(), ConnectionError> {
        let mut buffer = vec![0u8; buffer_size];
        let bytes_read = stream.read(&mut buffer)?;

        if bytes_read == 0 {
            debug!("peer closed before sending data");
            return Ok(());
        }

        let request = Request::parse(&buffer[..bytes_read])?;
        debug!(method = %request.method(), path = request.path(), version = request.version(), "request decoded");

        let response = encoding::negotiate(&request, router.route(&request));

        stream.write_all(&response.to_bytes())?;
        stream.flush()?;

        info!(
            method = %request.method(),
            path = request.path(),
            status = response.status().as_u16(),
            "response sent"
        );

        Ok(())
    }
}

impl std::fmt::Debug for Server {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Server")
            .field("listener", &self.listener)
            .field("router", &self.router)
            .field("buffer_size", &self.buffer_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{Response, StatusCode};
    use std::net::Shutdown;

    fn ephemeral_listener() -> TcpListener {
        TcpListener::bind("127.0.0.1:0").expect("bind")
    }

    fn echo_router() -> Router {
        Router::new(handlers::not_found_handler).with_route(handlers::echo_handler)
    }

    /// Acepta una conexión, la procesa y retorna lo que recibió el cliente
    fn exchange(raw: &[u8], buffer_size: usize) -> (Result<(), ConnectionError>, Vec<u8>) {
        let listener = ephemeral_listener();
        let addr = listener.local_addr().unwrap();

        let server = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            Server::handle_connection(stream, &echo_router(), buffer_size)
        });

        let mut client = TcpStream::connect(addr).unwrap();
        client.write_all(raw).unwrap();
        client.shutdown(Shutdown::Write).unwrap();

        // Si el servidor cierra con datos sin leer, el peer puede ver un reset
        let mut buf = Vec::new();
        client.read_to_end(&mut buf).ok();

        (server.join().unwrap(), buf)
    }

    #[test]
    fn test_handle_connection_echo() {
        let (result, buf) = exchange(b"GET /echo/abc HTTP/1.1\r\n\r\n", 1024);
        let text = String::from_utf8(buf).unwrap();

        assert!(result.is_ok());
        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("Content-Length: 3\r\n"));
        assert!(text.ends_with("\r\n\r\nabc"));
    }

    #[test]
    fn test_handle_connection_not_found() {
        let (result, buf) = exchange(b"GET /nope HTTP/1.1\r\n\r\n", 1024);

        assert!(result.is_ok());
        assert_eq!(buf, b"HTTP/1.1 404 Not Found\r\n\r\n".to_vec());
    }

    #[test]
    fn test_handle_connection_parse_error_sends_nothing() {
        let (result, buf) = exchange(b"garbage\r\n\r\n", 1024);

        assert!(matches!(result, Err(ConnectionError::Parse(ParseError::InvalidRequestLine(_)))));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_handle_connection_gzip() {
        let (result, buf) = exchange(
            b"GET /echo/abc HTTP/1.1\r\nAccept-Encoding: gzip\r\n\r\n",
            1024,
        );
        let head = String::from_utf8_lossy(&buf);

        assert!(result.is_ok());
        assert!(head.contains("Content-Encoding: gzip\r\n"));
    }

    #[test]
    fn test_handle_connection_small_buffer_truncates() {
        // Solo entra la primera parte del request en una lectura
        let (result, buf) = exchange(b"GET /echo/abcdef HTTP/1.1\r\n\r\n", 4);

        assert!(result.is_err());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_handle_connection_peer_closed_immediately() {
        let listener = ephemeral_listener();
        let addr = listener.local_addr().unwrap();

        let t = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            Server::handle_connection(stream, &echo_router(), 1024)
        });

        drop(TcpStream::connect(addr).unwrap());

        assert!(t.join().unwrap().is_ok());
    }

    #[test]
    fn test_bind_failure() {
        let taken = ephemeral_listener();
        let address = taken.local_addr().unwrap().to_string();

        let result = Server::with_router(&address, echo_router(), 1024);
        assert!(matches!(result, Err(ServerError::Bind { .. })));
    }

    #[test]
    fn test_run_serves_concurrent_connections() {
        let router = echo_router().with_route(|_req: &Request| Some(Response::new(StatusCode::Ok)));
        let server = Server::with_router("127.0.0.1:0", router, 1024).unwrap();
        let addr = server.local_addr().unwrap();

        thread::spawn(move || server.run());

        // Un cliente que no envía nada no bloquea a los demás
        let _idle = TcpStream::connect(addr).unwrap();

        let mut client = TcpStream::connect(addr).unwrap();
        client.write_all(b"GET /echo/hi HTTP/1.1\r\n\r\n").unwrap();

        let mut buf = Vec::new();
        client.read_to_end(&mut buf).unwrap();
        assert!(buf.ends_with(b"\r\n\r\nhi"));
    }
}
