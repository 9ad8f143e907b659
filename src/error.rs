//! Error types.
//!
//! Two families:
//!
//! - [`ApiError`] is a request outcome. It becomes a 4xx/5xx [`Response`]
//!   and the server keeps going.
//! - [`Error`] is an infrastructure failure: binding a port, reading the
//!   configuration. It is returned from startup code.

use http::StatusCode;

use crate::combinatorics::AnagramError;
use crate::response::{IntoResponse, Response};

/// The error type returned by anagramd's fallible startup operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid address `{addr}`: {source}")]
    Addr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// A failed request, mapped onto an HTTP status with an empty body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] AnagramError),

    #[error("resource absent")]
    ResourceAbsent,

    #[error("route not found")]
    RouteNotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::ResourceAbsent | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        Response::status(self.status_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ApiError::from(AnagramError::Empty).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::ResourceAbsent.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::RouteNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::MethodNotAllowed.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            ApiError::Internal("disk".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_responses_have_no_body() {
        let res = ApiError::RouteNotFound.into_response();
        assert_eq!(res.code(), StatusCode::NOT_FOUND);
        assert!(res.body().is_empty());
        assert_eq!(res.content_type(), None);
    }
}
