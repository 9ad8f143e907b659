//! The four route handlers.
//!
//! | Route | Handler | Outcome |
//! |---|---|---|
//! | `GET /ping` | [`ping`] | `204`, empty |
//! | `GET /secret` | [`secret`] | `200` + blob bytes, or `404` |
//! | `GET /status` | [`status`] | `200` + `{"time","req","err"}` |
//! | `GET /anagram?p=…` | [`anagram`] | `200` + `{"p","total"}`, or `400` |
//!
//! Error totals are kept by the [`Router`](crate::Router); handlers only
//! choose the status.

use std::io;

use http::StatusCode;
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::clock::iso_seconds;
use crate::combinatorics::{count_anagrams, validate};
use crate::error::ApiError;
use crate::query::anagram_param;
use crate::request::Request;
use crate::response::{Json, Response};
use crate::state::AppState;

/// Body of `GET /status`.
#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub time: String,
    pub req: u64,
    pub err: u64,
}

/// Body of `GET /anagram`. `total` is a decimal string, not a JSON number.
#[derive(Debug, Serialize)]
pub struct AnagramBody {
    pub p: String,
    pub total: String,
}

/// Liveness: if this answers, the process is up.
pub async fn ping(_req: Request) -> StatusCode {
    StatusCode::NO_CONTENT
}

pub async fn secret(state: AppState, _req: Request) -> Result<Response, ApiError> {
    if !state.secret.exists().await {
        return Err(ApiError::ResourceAbsent);
    }
    match state.secret.read_all().await {
        Ok(blob) => Ok(Response::bytes(blob)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("secret disappeared between existence check and read");
            Err(ApiError::ResourceAbsent)
        }
        Err(e) => {
            error!("secret read failed: {e}");
            Err(ApiError::Internal(e.to_string()))
        }
    }
}

/// Current time and both totals. `req` already includes this request.
pub async fn status(state: AppState, _req: Request) -> Json<StatusBody> {
    let totals = state.counters.snapshot();
    Json(StatusBody {
        time: iso_seconds(state.clock.now()),
        req: totals.requests,
        err: totals.errors,
    })
}

/// Words at least this long are counted on the blocking pool instead of the
/// async worker.
pub const BLOCKING_THRESHOLD: usize = 1024;

pub async fn anagram(state: AppState, req: Request) -> Result<Json<AnagramBody>, ApiError> {
    let p = anagram_param(req.target(), state.query_mode).unwrap_or_default().into_owned();
    let total = if p.len() < BLOCKING_THRESHOLD {
        count_anagrams(&p)?
    } else {
        validate(&p)?;
        let word = p.clone();
        tokio::task::spawn_blocking(move || count_anagrams(&word))
            .await
            .map_err(|e| {
                error!("anagram count task failed: {e}");
                ApiError::Internal(e.to_string())
            })??
    };
    debug!(len = p.len(), "anagrams counted");
    Ok(Json(AnagramBody { p, total: total.to_string() }))
}
