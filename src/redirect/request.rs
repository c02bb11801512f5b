//! Request shape consumed by the decision engine.
//!
//! # Responsibilities
//! - Detect XHR requests from the `X-Requested-With` header
//! - Derive the request origin (scheme + host) relative targets resolve against
//! - Classify the HTTP method

use axum::http::{header, request::Parts, HeaderMap, Method};
use url::Url;

use crate::redirect::error::ResolveError;

/// Header set by in-page scripts on AJAX requests.
pub const X_REQUESTED_WITH: &str = "x-requested-with";

/// Marker value of `X-Requested-With` identifying an XHR.
pub const XML_HTTP_REQUEST: &str = "XMLHttpRequest";

/// Header carrying the scheme seen by a fronting proxy.
pub const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Returns true if the headers mark the request as an XHR.
pub fn is_xhr(headers: &HeaderMap) -> bool {
    headers
        .get(X_REQUESTED_WITH)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case(XML_HTTP_REQUEST))
        .unwrap_or(false)
}

/// First hop of a scheme list, if it is `http` or `https`.
fn web_scheme(raw: &str) -> Option<&'static str> {
    let first = raw.split(',').next()?.trim();
    if first.eq_ignore_ascii_case("https") {
        Some("https")
    } else if first.eq_ignore_ascii_case("http") {
        Some("http")
    } else {
        None
    }
}

/// What the engine needs to know about the inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectRequest {
    pub method: Method,
    pub xhr: bool,
    pub origin: Url,
}

impl RedirectRequest {
    pub fn new(method: Method, origin: Url) -> Self {
        Self {
            method,
            xhr: false,
            origin,
        }
    }

    pub fn xhr(mut self, xhr: bool) -> Self {
        self.xhr = xhr;
        self
    }

    /// Build from request parts. `default_host` is used when neither the
    /// `Host` header nor the URI carries an authority.
    pub fn from_parts(parts: &Parts, default_host: &str) -> Result<Self, ResolveError> {
        let scheme = parts
            .headers
            .get(X_FORWARDED_PROTO)
            .and_then(|v| v.to_str().ok())
            .and_then(web_scheme)
            .or_else(|| parts.uri.scheme_str().and_then(web_scheme))
            .unwrap_or("http");

        let host = parts
            .headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .or_else(|| parts.uri.authority().map(|a| a.as_str()))
            .unwrap_or(default_host);

        let raw = format!("{}://{}/", scheme, host);
        let origin = Url::parse(&raw).map_err(|e| ResolveError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            method: parts.method.clone(),
            xhr: is_xhr(&parts.headers),
            origin,
        })
    }

    /// POST, PATCH, PUT or DELETE.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self.method,
            Method::POST | Method::PATCH | Method::PUT | Method::DELETE
        )
    }

    pub fn is_get(&self) -> bool {
        self.method == Method::GET
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts(req: Request<()>) -> Parts {
        req.into_parts().0
    }

    #[test]
    fn test_xhr_detection() {
        let req = Request::builder()
            .header("X-Requested-With", "XMLHttpRequest")
            .body(())
            .unwrap();
        assert!(is_xhr(req.headers()));

        let req = Request::builder()
            .header("X-Requested-With", "xmlhttprequest")
            .body(())
            .unwrap();
        assert!(is_xhr(req.headers())); // Case insensitive

        let req = Request::builder()
            .header("X-Requested-With", "Fetch")
            .body(())
            .unwrap();
        assert!(!is_xhr(req.headers()));

        let req = Request::builder().body(()).unwrap();
        assert!(!is_xhr(req.headers()));
    }

    #[test]
    fn test_origin_from_host_header() {
        let p = parts(
            Request::builder()
                .method(Method::POST)
                .uri("/redirect/action")
                .header("Host", "test.host")
                .header("X-Requested-With", "XMLHttpRequest")
                .body(())
                .unwrap(),
        );
        let req = RedirectRequest::from_parts(&p, "localhost").unwrap();
        assert_eq!(req.origin.as_str(), "http://test.host/");
        assert_eq!(req.method, Method::POST);
        assert!(req.xhr);
    }

    #[test]
    fn test_origin_forwarded_proto_and_fallback() {
        let p = parts(
            Request::builder()
                .uri("/path")
                .header("X-Forwarded-Proto", "https")
                .body(())
                .unwrap(),
        );
        let req = RedirectRequest::from_parts(&p, "example.org:8443").unwrap();
        assert_eq!(req.origin.as_str(), "https://example.org:8443/");
        assert!(!req.xhr);
    }

    #[test]
    fn test_forwarded_proto_list_uses_first_hop() {
        let p = parts(
            Request::builder()
                .uri("/path")
                .header("Host", "test.host")
                .header("X-Forwarded-Proto", "HTTPS, http")
                .body(())
                .unwrap(),
        );
        let req = RedirectRequest::from_parts(&p, "localhost").unwrap();
        assert_eq!(req.origin.as_str(), "https://test.host/");
    }

    #[test]
    fn test_forwarded_proto_rejects_other_schemes() {
        for proto in ["javascript", "ftp", "", "javascript, https"] {
            let p = parts(
                Request::builder()
                    .uri("/path")
                    .header("Host", "test.host")
                    .header("X-Forwarded-Proto", proto)
                    .body(())
                    .unwrap(),
            );
            let req = RedirectRequest::from_parts(&p, "localhost").unwrap();
            assert_eq!(req.origin.as_str(), "http://test.host/", "proto {:?}", proto);
        }
    }

    #[test]
    fn test_method_classes() {
        let origin = Url::parse("http://test.host/").unwrap();
        for m in [Method::POST, Method::PATCH, Method::PUT, Method::DELETE] {
            assert!(RedirectRequest::new(m, origin.clone()).is_mutating());
        }
        assert!(!RedirectRequest::new(Method::GET, origin.clone()).is_mutating());
        assert!(RedirectRequest::new(Method::GET, origin.clone()).is_get());
        assert!(!RedirectRequest::new(Method::HEAD, origin).is_get());
    }
}
