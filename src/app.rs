//! The anagramd route table.

use std::sync::Arc;

use http::Method;

use crate::handlers;
use crate::router::Router;
use crate::state::AppState;

/// Builds the service router. Its counters are `state.counters`.
///
/// ```rust,no_run
/// use anagramd::{app, AppState, FileSecret, Server};
///
/// # async fn run() -> Result<(), anagramd::Error> {
/// let state = AppState::new(FileSecret::new("/tmp/secret.key"));
/// Server::bind("0.0.0.0:8088").await?.serve(app::router(state)).await
/// # }
/// ```
pub fn router(state: AppState) -> Router {
    let secret = state.clone();
    let status = state.clone();
    let anagram = state.clone();

    Router::with_counters(Arc::clone(&state.counters))
        .on(Method::GET, "/ping", handlers::ping)
        .on(Method::GET, "/secret", move |req| handlers::secret(secret.clone(), req))
        .on(Method::GET, "/status", move |req| handlers::status(status.clone(), req))
        .on_prefix(Method::GET, "/anagram", move |req| handlers::anagram(anagram.clone(), req))
}
