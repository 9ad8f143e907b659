//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Handlers build a [`Response`] (or anything that converts into one) and
//! return it. The router never inspects bodies, only the status code.

use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderValue};
use http::StatusCode;
use http_body_util::Full;
use serde::Serialize;
use tracing::error;

const APPLICATION_JSON: &str = "application/json";

// ── Response ─────────────────────────────────────────────────────────────────

/// An outgoing HTTP response.
///
/// ```rust
/// use anagramd::Response;
/// use http::StatusCode;
///
/// Response::json(br#"{"p":"aab","total":"3"}"#.to_vec());
/// Response::bytes(b"raw secret".to_vec());
/// Response::status(StatusCode::NO_CONTENT);
/// ```
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    content_type: Option<&'static str>,
    body: Bytes,
}

impl Response {
    /// `200 OK` — `application/json`.
    pub fn json(body: impl Into<Bytes>) -> Self {
        Self { status: StatusCode::OK, content_type: Some(APPLICATION_JSON), body: body.into() }
    }

    /// `200 OK` with raw bytes and no `content-type` header.
    pub fn bytes(body: impl Into<Bytes>) -> Self {
        Self { status: StatusCode::OK, content_type: None, body: body.into() }
    }

    /// Response with no body.
    pub fn status(code: StatusCode) -> Self {
        Self { status: code, content_type: None, body: Bytes::new() }
    }

    pub fn code(&self) -> StatusCode { self.status }
    pub fn content_type(&self) -> Option<&'static str> { self.content_type }
    pub fn body(&self) -> &[u8] { &self.body }

    pub(crate) fn into_inner(self) -> http::Response<Full<Bytes>> {
        let mut res = http::Response::new(Full::new(self.body));
        *res.status_mut() = self.status;
        if let Some(ct) = self.content_type {
            res.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static(ct));
        }
        res
    }
}

// ── IntoResponse ──────────────────────────────────────────────────────────────

/// Conversion into an HTTP [`Response`].
///
/// Implemented for [`Response`], bare [`StatusCode`]s, [`Json`] bodies,
/// [`ApiError`](crate::ApiError), and `Result`s of any two of those, so a
/// handler can use `?` on domain errors.
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response { self }
}

/// Return a status directly from a handler: `StatusCode::NO_CONTENT`.
impl IntoResponse for StatusCode {
    fn into_response(self) -> Response { Response::status(self) }
}

impl<T, E> IntoResponse for Result<T, E>
where
    T: IntoResponse,
    E: IntoResponse,
{
    fn into_response(self) -> Response {
        match self {
            Ok(v) => v.into_response(),
            Err(e) => e.into_response(),
        }
    }
}

// ── Json ──────────────────────────────────────────────────────────────────────

/// A serde-serialisable body sent as compact `application/json`.
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(bytes) => Response::json(bytes),
            Err(e) => {
                error!("response serialisation failed: {e}");
                Response::status(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Body {
        p: &'static str,
        total: String,
    }

    #[test]
    fn json_is_compact_and_typed() {
        let res = Json(Body { p: "aab", total: "3".into() }).into_response();
        assert_eq!(res.code(), StatusCode::OK);
        assert_eq!(res.content_type(), Some("application/json"));
        assert_eq!(res.body(), br#"{"p":"aab","total":"3"}"#);
    }

    #[test]
    fn bytes_have_no_content_type() {
        let inner = Response::bytes(vec![0u8, 1, 2]).into_inner();
        assert_eq!(inner.status(), StatusCode::OK);
        assert!(inner.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn into_inner_carries_status_and_header() {
        let inner = Response::json("{}").into_inner();
        assert_eq!(inner.headers()[CONTENT_TYPE], "application/json");

        let inner = StatusCode::NO_CONTENT.into_response().into_inner();
        assert_eq!(inner.status(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn result_picks_the_matching_side() {
        let ok: Result<StatusCode, StatusCode> = Ok(StatusCode::NO_CONTENT);
        assert_eq!(ok.into_response().code(), StatusCode::NO_CONTENT);

        let err: Result<StatusCode, StatusCode> = Err(StatusCode::BAD_REQUEST);
        assert_eq!(err.into_response().code(), StatusCode::BAD_REQUEST);
    }
}
