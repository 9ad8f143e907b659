//! Route handlers as trait objects.
//!
//! Anything callable as `Fn(Request) -> impl Future<Output = impl
//! IntoResponse>` is a [`Handler`]: named `async fn`s like `handlers::ping`
//! and closures that clone [`AppState`](crate::AppState) into the future they
//! return. The router stores each one as a [`BoxedHandler`] and calls it
//! through one vtable dispatch per request.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// The future a [`Handler`] returns once its output is converted.
pub type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

pub type BoxedHandler = Arc<dyn Handler>;

pub trait Handler: Send + Sync + 'static {
    fn call(&self, req: Request) -> BoxFuture;
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, req: Request) -> BoxFuture {
        let fut = self(req);
        Box::pin(async move { fut.await.into_response() })
    }
}
