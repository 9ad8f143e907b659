//! # anagramd
//!
//! Counts the distinct anagrams of a word and serves the count over HTTP.
//!
//! ## The count
//!
//! A word of length `n` whose distinct letters occur `k₁ … kₘ` times has
//! `n! / (k₁! · … · kₘ!)` distinct arrangements. `"aab"` has three: `aab`,
//! `aba`, `baa`. Counts are exact [`num_bigint::BigUint`]s, so long words do
//! not overflow. See [`combinatorics`].
//!
//! ## The service
//!
//! | Request | Response |
//! |---|---|
//! | `GET /ping` | `204`, empty |
//! | `GET /secret` | `200` + the secret file's bytes, `404` if it is missing |
//! | `GET /status` | `{"time":"2024-05-01T12:30:00Z","req":7,"err":2}` |
//! | `GET /anagram?p=aab` | `{"p":"aab","total":"3"}`, `400` for empty or non-letter input |
//! | anything else | `404` |
//!
//! Every request counts toward `req`; every 4xx counts toward `err`.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use anagramd::{app, AppState, FileSecret, Server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), anagramd::Error> {
//!     let state = AppState::new(FileSecret::new("/tmp/secret.key"));
//!     Server::bind("0.0.0.0:8088").await?.serve(app::router(state)).await
//! }
//! ```

mod error;
mod handler;
mod request;
mod response;
mod router;
mod server;
mod state;

pub mod app;
pub mod clock;
pub mod combinatorics;
pub mod config;
pub mod counters;
pub mod handlers;
pub mod query;
pub mod secret;
pub mod telemetry;

pub use clock::{Clock, FixedClock, SystemClock};
pub use combinatorics::{AnagramError, count_anagrams};
pub use config::ServerConfig;
pub use counters::{Counters, Snapshot};
pub use error::{ApiError, Error};
pub use handler::Handler;
pub use query::QueryMode;
pub use request::Request;
pub use response::{IntoResponse, Json, Response};
pub use router::Router;
pub use secret::{FileSecret, MemorySecret, SecretStore};
pub use server::Server;
pub use state::AppState;
