//! Request router and the request/error counters.
//!
//! Two kinds of route:
//!
//! - **Exact** — one radix tree per method, matched against the full request
//!   target. `/ping` matches `/ping` and nothing else, not even `/ping?x=1`.
//! - **Prefix** — checked in registration order after the exact trees miss.
//!   `/anagram` matches `/anagram`, `/anagram?p=abc` and `/anagrams`.
//!
//! Every dispatched request bumps the request total before routing; every
//! request that ends in a 4xx bumps the error total once.

use std::collections::HashMap;
use std::sync::Arc;

use http::Method;
use matchit::Router as MatchitRouter;
use tracing::debug;

use crate::counters::Counters;
use crate::error::ApiError;
use crate::handler::{BoxedHandler, Handler};
use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// The application router.
///
/// Build it once at startup, pass it to [`Server::serve`](crate::Server::serve).
/// Each registration returns `self` so calls chain.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
    prefixes: Vec<(Method, String, BoxedHandler)>,
    counters: Arc<Counters>,
}

enum Lookup {
    Found(BoxedHandler),
    WrongMethod,
    Missing,
}

impl Router {
    pub fn new() -> Self {
        Self::with_counters(Arc::new(Counters::new()))
    }

    /// A router that records into `counters`, so handlers registered later
    /// can hold the same `Arc` and report it.
    pub fn with_counters(counters: Arc<Counters>) -> Self {
        Self { routes: HashMap::new(), prefixes: Vec::new(), counters }
    }

    pub fn counters(&self) -> &Arc<Counters> {
        &self.counters
    }

    /// Register `handler` for an exact request target.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or is already registered for
    /// `method`.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        let handler: BoxedHandler = Arc::new(handler);
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler)
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Register `handler` for every request target starting with `prefix`.
    pub fn on_prefix(mut self, method: Method, prefix: &str, handler: impl Handler) -> Self {
        let handler: BoxedHandler = Arc::new(handler);
        self.prefixes.push((method, prefix.to_owned(), handler));
        self
    }

    /// Routes one request and produces one response. Never fails: unmatched
    /// requests become 404 or 405 responses.
    pub async fn dispatch<B>(&self, req: http::Request<B>) -> Response {
        self.counters.record_request();

        let (parts, _) = req.into_parts();
        let req = Request::from_parts(parts);
        let method = req.method().clone();
        let target = req.target().to_owned();

        let response = match self.lookup(&method, &target) {
            Lookup::Found(handler) => handler.call(req).await,
            Lookup::WrongMethod => ApiError::MethodNotAllowed.into_response(),
            Lookup::Missing => ApiError::RouteNotFound.into_response(),
        };

        let status = response.code();
        if status.is_client_error() {
            self.counters.record_error();
        }
        debug!(%method, %target, status = status.as_u16(), "request handled");
        response
    }

    fn lookup(&self, method: &Method, target: &str) -> Lookup {
        if let Some(handler) = self.find(method, target) {
            return Lookup::Found(handler);
        }
        let elsewhere = self
            .routes
            .keys()
            .chain(self.prefixes.iter().map(|(m, _, _)| m))
            .filter(|m| *m != method)
            .any(|m| self.find(m, target).is_some());
        if elsewhere { Lookup::WrongMethod } else { Lookup::Missing }
    }

    fn find(&self, method: &Method, target: &str) -> Option<BoxedHandler> {
        if let Some(matched) = self.routes.get(method).and_then(|tree| tree.at(target).ok()) {
            return Some(Arc::clone(matched.value));
        }
        self.prefixes
            .iter()
            .find(|(m, prefix, _)| m == method && target.starts_with(prefix.as_str()))
            .map(|(_, _, handler)| Arc::clone(handler))
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use http::StatusCode;

    use super::*;
    use crate::counters::Snapshot;

    async fn teapot(_req: Request) -> StatusCode {
        StatusCode::IM_A_TEAPOT
    }

    async fn no_content(_req: Request) -> StatusCode {
        StatusCode::NO_CONTENT
    }

    async fn echo_target(req: Request) -> Response {
        Response::bytes(req.target().to_owned())
    }

    fn get(uri: &str) -> http::Request<()> {
        http::Request::get(uri).body(()).unwrap()
    }

    fn router() -> Router {
        Router::new()
            .on(Method::GET, "/ping", no_content)
            .on(Method::POST, "/brew", teapot)
            .on_prefix(Method::GET, "/echo", echo_target)
    }

    #[tokio::test]
    async fn exact_routes_match_the_whole_target() {
        let r = router();
        assert_eq!(r.dispatch(get("/ping")).await.code(), StatusCode::NO_CONTENT);
        assert_eq!(r.dispatch(get("/ping?x=1")).await.code(), StatusCode::NOT_FOUND);
        assert_eq!(r.dispatch(get("/ping/")).await.code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn prefix_routes_see_the_full_target() {
        let r = router();
        let res = r.dispatch(get("/echo?p=abc")).await;
        assert_eq!(res.code(), StatusCode::OK);
        assert_eq!(res.body(), b"/echo?p=abc");
        assert_eq!(r.dispatch(get("/echoes")).await.body(), b"/echoes");
    }

    #[tokio::test]
    async fn wrong_method_is_405() {
        let r = router();
        assert_eq!(r.dispatch(get("/brew")).await.code(), StatusCode::METHOD_NOT_ALLOWED);
        let post = http::Request::post("/ping").body(()).unwrap();
        assert_eq!(r.dispatch(post).await.code(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn counts_requests_and_client_errors() {
        let r = router();
        r.dispatch(get("/ping")).await;
        r.dispatch(get("/missing")).await;
        r.dispatch(http::Request::post("/brew").body(()).unwrap()).await; // 418
        r.dispatch(get("/echo")).await;
        assert_eq!(r.counters().snapshot(), Snapshot { requests: 4, errors: 2 });
    }

    #[tokio::test]
    async fn shared_counters() {
        let counters = Arc::new(Counters::new());
        let r = Router::with_counters(Arc::clone(&counters)).on(Method::GET, "/ping", no_content);
        r.dispatch(get("/nope")).await;
        assert_eq!(counters.snapshot(), Snapshot { requests: 1, errors: 1 });
    }

    #[test]
    #[should_panic(expected = "invalid route")]
    fn duplicate_route_panics() {
        let _ = Router::new()
            .on(Method::GET, "/ping", no_content)
            .on(Method::GET, "/ping", no_content);
    }
}
