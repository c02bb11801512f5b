//! Shared utilities for integration tests.

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use tower::ServiceExt;
use turbolinks_redirect::{AppConfig, HttpServer};

/// Router with default config, dispatched in-process.
pub fn app() -> Router {
    HttpServer::new(AppConfig::default()).router()
}

/// Call a controller action as `test.host` would.
pub async fn dispatch(method: Method, action: &str, xhr: bool) -> Response<Body> {
    let mut req = Request::builder()
        .method(method)
        .uri(format!("/redirect/{}", action))
        .header(header::HOST, "test.host");
    if xhr {
        req = req.header("X-Requested-With", "XMLHttpRequest");
    }

    app().oneshot(req.body(Body::empty()).unwrap()).await.unwrap()
}

pub async fn body_string(res: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(res.into_body(), 64 * 1024).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Assert a 200 `text/javascript` response carrying `Turbolinks.visit`.
pub async fn assert_turbolinks_visit(res: Response<Body>, url: &str, directive: Option<&str>) {
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[header::CONTENT_TYPE], "text/javascript");
    assert!(res.headers().get(header::LOCATION).is_none());

    let expected = match directive {
        Some(d) => format!("Turbolinks.visit('{}', {});", url, d),
        None => format!("Turbolinks.visit('{}');", url),
    };
    assert_eq!(body_string(res).await, expected);
}

/// Assert a plain redirect with the given status and `Location`.
pub fn assert_redirected_to(res: &Response<Body>, status: StatusCode, url: &str) {
    assert_eq!(res.status(), status);
    assert_eq!(res.headers()[header::LOCATION], url);
}
