use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use hyper::Method;
use matchit::Router as MatchitRouter;

use crate::http::{Request, Response};

/// Type alias for route handlers
pub type BoxedHandler =
    Box<dyn Fn(Request) -> Pin<Box<dyn Future<Output = Response> + Send>> + Send + Sync>;

/// HTTP router with one matchit table per method
///
/// Paths use matchit syntax, e.g. `/api/todo/lists/{list_id}`.
pub struct Router {
    tables: HashMap<Method, MatchitRouter<Arc<BoxedHandler>>>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    pub fn get<H, Fut>(self, path: &str, handler: H) -> Self
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.route(Method::GET, path, handler)
    }

    pub fn post<H, Fut>(self, path: &str, handler: H) -> Self
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.route(Method::POST, path, handler)
    }

    pub fn patch<H, Fut>(self, path: &str, handler: H) -> Self
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.route(Method::PATCH, path, handler)
    }

    pub fn delete<H, Fut>(self, path: &str, handler: H) -> Self
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.route(Method::DELETE, path, handler)
    }

    fn route<H, Fut>(mut self, method: Method, path: &str, handler: H) -> Self
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        let handler: BoxedHandler = Box::new(move |req| Box::pin(handler(req)));
        self.tables
            .entry(method)
            .or_insert_with(MatchitRouter::new)
            .insert(path, Arc::new(handler))
            .expect("route path must be a valid matchit pattern");
        self
    }

    /// Match a request, returning the handler and extracted path parameters
    pub fn match_route(
        &self,
        method: &Method,
        path: &str,
    ) -> Option<(Arc<BoxedHandler>, HashMap<String, String>)> {
        let matched = self.tables.get(method)?.at(path).ok()?;
        let params = matched
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Some((matched.value.clone(), params))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
