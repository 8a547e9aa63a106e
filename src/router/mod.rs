//! # Cadena de Handlers
//! src/router/mod.rs
//!
//! El router prueba cada handler en orden de registro y se detiene en el
//! primero que produce una respuesta.
//!
//! ```text
//! Request → handler₁ → handler₂ → ... → fallback → Response
//! ```
//!
//! Un handler que retorna `None` dice "no es mi ruta" (o "no pude"): para
//! la cadena ambas cosas son la misma señal. El fallback es obligatorio al
//! construir el router, así que `route` siempre produce una respuesta.

use crate::http::{Request, Response};

/// Tipo de función handler
///
/// Recibe un Request y retorna una Response, o `None` para ceder el turno
/// al siguiente handler. Los handlers con configuración (ej: el directorio
/// raíz) son closures que la capturan al construirse.
pub type Handler = Box<dyn Fn(&Request) -> Option<Response> + Send + Sync>;

/// Handler terminal: responde siempre
pub type Fallback = Box<dyn Fn(&Request) -> Response + Send + Sync>;

/// Cadena ordenada de handlers con un fallback al final
pub struct Router {
    /// Handlers en orden de prioridad
    routes: Vec<Handler>,

    /// Se ejecuta cuando ningún handler respondió
    fallback: Fallback,
}

impl Router {
    /// Crea un router vacío con su handler terminal
    ///
    /// # Ejemplo
    /// ```
    /// use http_chain_server::router::Router;
    /// use http_chain_server::http::{Request, Response, StatusCode};
    ///
    /// let mut router = Router::new(|_req: &Request| Response::new(StatusCode::NotFound));
    /// router.register(|req: &Request| {
    ///     (req.path() == "/hello").then(|| Response::text("hi"))
    /// });
    ///
    /// let request = Request::parse(b"GET /hello HTTP/1.1\r\n\r\n").unwrap();
    /// assert_eq!(router.route(&request).status(), StatusCode::Ok);
    /// ```
    pub fn new<F>(fallback: F) -> Self
    where
        F: Fn(&Request) -> Response + Send + Sync + 'static,
    {
        Self {
            routes: Vec::new(),
            fallback: Box::new(fallback),
        }
    }

    /// Registra un handler al final de la cadena (antes del fallback)
    pub fn register<H>(&mut self, handler: H)
    where
        H: Fn(&Request) -> Option<Response> + Send + Sync + 'static,
    {
        self.routes.push(Box::new(handler));
    }

    /// Variante encadenable de [`Router::register`]
    pub fn with_route<H>(mut self, handler: H) -> Self
    where
        H: Fn(&Request) -> Option<Response> + Send + Sync + 'static,
    {
        self.register(handler);
        self
    }

    /// Despacha el request al primer handler que responda
    pub fn route(&self, request: &Request) -> Response {
        self.routes
            .iter()
            .find_map(|handler| handler(request))
            .unwrap_or_else(|| (self.fallback)(request))
    }

    /// Cantidad de handlers registrados (sin contar el fallback)
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Verifica si solo queda el fallback
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn not_found(_req: &Request) -> Response {
        Response::new(StatusCode::NotFound)
    }

    fn parse(raw: &str) -> Request {
        Request::parse(raw.as_bytes()).unwrap()
    }

    #[test]
    fn test_router_creation() {
        let router = Router::new(not_found);
        assert!(router.is_empty());
        assert_eq!(router.len(), 0);
    }

    #[test]
    fn test_empty_router_uses_fallback() {
        let router = Router::new(not_found);
        let response = router.route(&parse("GET /anything HTTP/1.1\r\n\r\n"));

        assert_eq!(response.status(), StatusCode::NotFound);
    }

    #[test]
    fn test_first_match_wins() {
        let router = Router::new(not_found)
            .with_route(|_req: &Request| Some(Response::text("first")))
            .with_route(|_req: &Request| Some(Response::text("second")));

        let response = router.route(&parse("GET / HTTP/1.1\r\n\r\n"));
        assert_eq!(response.body(), Some(&b"first"[..]));
    }

    #[test]
    fn test_declining_handler_falls_through() {
        let router = Router::new(not_found)
            .with_route(|_req: &Request| None)
            .with_route(|_req: &Request| Some(Response::text("second")));

        let response = router.route(&parse("GET / HTTP/1.1\r\n\r\n"));
        assert_eq!(response.body(), Some(&b"second"[..]));
    }

    #[test]
    fn test_short_circuit_skips_later_handlers() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let router = Router::new(not_found)
            .with_route(|_req: &Request| Some(Response::new(StatusCode::Ok)))
            .with_route(move |_req: &Request| {
                counter.fetch_add(1, Ordering::SeqCst);
                None
            });

        router.route(&parse("GET / HTTP/1.1\r\n\r\n"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_registration_order_matters() {
        let greedy = |_req: &Request| Some(Response::new(StatusCode::Created));
        let exact = |req: &Request| (req.path() == "/").then(|| Response::new(StatusCode::Ok));

        let greedy_first = Router::new(not_found).with_route(greedy).with_route(exact);
        let exact_first = Router::new(not_found).with_route(exact).with_route(greedy);

        let request = parse("GET / HTTP/1.1\r\n\r\n");
        assert_eq!(greedy_first.route(&request).status(), StatusCode::Created);
        assert_eq!(exact_first.route(&request).status(), StatusCode::Ok);
    }
}
