//! Incoming HTTP request type.

use http::Method;

/// The parts of an incoming request that routing and handlers look at.
///
/// Bodies are dropped at dispatch; every route is a `GET`.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    target: String,
}

impl Request {
    pub(crate) fn from_parts(parts: http::request::Parts) -> Self {
        let target = parts
            .uri
            .path_and_query()
            .map_or_else(|| parts.uri.path().to_owned(), |pq| pq.as_str().to_owned());
        Self { method: parts.method, target }
    }

    pub fn method(&self) -> &Method { &self.method }

    /// The request target as sent: path plus `?query`, if any. Routing and
    /// `p` extraction both work on this raw string.
    pub fn target(&self) -> &str { &self.target }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(uri: &str) -> Request {
        let (parts, ()) = http::Request::get(uri).body(()).unwrap().into_parts();
        Request::from_parts(parts)
    }

    #[test]
    fn keeps_the_query_in_the_target() {
        let req = request("/anagram?p=ab?c");
        assert_eq!(req.method(), Method::GET);
        assert_eq!(req.target(), "/anagram?p=ab?c");
    }

    #[test]
    fn no_query() {
        assert_eq!(request("/ping").target(), "/ping");
    }

    #[test]
    fn absolute_form_uses_origin_target() {
        let req = request("http://localhost:8088/status");
        assert_eq!(req.target(), "/status");
    }
}
