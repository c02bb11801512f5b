//! Redirect controller tests, dispatched through the full router.

use axum::http::{Method, StatusCode};
use url::Url;

use turbolinks_redirect::http::X_REQUEST_ID;
use turbolinks_redirect::redirect::{
    RedirectError, RedirectOptions, RedirectRequest, RedirectTarget, Redirector,
};
use turbolinks_redirect::routing::RouteTable;

mod common;
use common::{assert_redirected_to, assert_turbolinks_visit, body_string, dispatch};

#[tokio::test]
async fn test_redirect_to_url_string_with_turbolinks() {
    let res = dispatch(Method::POST, "redirect_to_url_string_with_turbolinks", false).await;
    assert_turbolinks_visit(res, "http://example.com", None).await;
}

#[tokio::test]
async fn test_redirect_to_url_string_with_turbolinks_via_get_does_normal_redirect() {
    let res = dispatch(Method::GET, "redirect_to_url_string_with_turbolinks", true).await;
    assert_redirected_to(&res, StatusCode::FOUND, "http://example.com");
}

#[tokio::test]
async fn test_redirect_to_url_hash_with_turbolinks() {
    let res = dispatch(Method::PUT, "redirect_to_url_hash_with_turbolinks", false).await;
    assert_turbolinks_visit(res, "http://test.host/redirect/action", None).await;
}

#[tokio::test]
async fn test_redirect_to_url_string_via_xhr_and_post_redirects_via_turbolinks() {
    let res = dispatch(Method::POST, "redirect_to_url_string", true).await;
    assert_turbolinks_visit(res, "http://example.com", None).await;
}

#[tokio::test]
async fn test_redirect_to_url_hash_via_xhr_and_patch_redirects_via_turbolinks() {
    let res = dispatch(Method::PATCH, "redirect_to_url_hash", true).await;
    assert_turbolinks_visit(res, "http://test.host/redirect/action", None).await;
}

#[tokio::test]
async fn test_redirect_to_path_and_custom_status_via_xhr_and_delete_redirects_via_turbolinks() {
    let res = dispatch(Method::DELETE, "redirect_to_path_and_custom_status", true).await;
    assert_turbolinks_visit(res, "http://test.host/path", None).await;
}

#[tokio::test]
async fn test_redirect_to_via_xhr_and_get_does_normal_redirect() {
    let res = dispatch(Method::GET, "redirect_to_path_and_custom_status", true).await;
    assert_redirected_to(&res, StatusCode::SEE_OTHER, "http://test.host/path");
}

#[tokio::test]
async fn test_redirect_to_via_post_and_not_xhr_does_normal_redirect() {
    let res = dispatch(Method::POST, "redirect_to_url_hash", false).await;
    assert_redirected_to(&res, StatusCode::FOUND, "http://test.host/redirect/action");
}

#[tokio::test]
async fn test_redirect_to_via_patch_and_not_xhr_does_normal_redirect() {
    let res = dispatch(Method::PATCH, "redirect_to_url_string", false).await;
    assert_redirected_to(&res, StatusCode::FOUND, "http://example.com");
}

#[tokio::test]
async fn test_redirect_to_via_xhr_and_post_with_single_change_option() {
    let res = dispatch(Method::POST, "redirect_to_path_with_single_change_option", true).await;
    assert_turbolinks_visit(res, "http://test.host/path", Some("{ change: ['foo'] }")).await;
}

#[tokio::test]
async fn test_redirect_to_via_xhr_and_post_with_multiple_change_option() {
    let res = dispatch(Method::POST, "redirect_to_path_with_multiple_change_option", true).await;
    assert_turbolinks_visit(res, "http://test.host/path", Some("{ change: ['foo', 'bar'] }")).await;
}

#[tokio::test]
async fn test_redirect_to_via_xhr_and_post_with_change_option_and_custom_status() {
    let res = dispatch(
        Method::POST,
        "redirect_to_path_with_change_option_and_custom_status",
        true,
    )
    .await;
    assert_turbolinks_visit(res, "http://test.host/path", Some("{ change: ['foo', 'bar'] }")).await;
}

#[tokio::test]
async fn test_redirect_to_via_xhr_and_get_with_change_option() {
    let res = dispatch(Method::GET, "redirect_to_path_with_multiple_change_option", true).await;
    assert_redirected_to(&res, StatusCode::FOUND, "http://test.host/path");
}

#[tokio::test]
async fn test_redirect_to_via_post_and_not_xhr_with_change_option_and_custom_status() {
    let res = dispatch(
        Method::POST,
        "redirect_to_path_with_change_option_and_custom_status",
        false,
    )
    .await;
    assert_redirected_to(&res, StatusCode::SEE_OTHER, "http://test.host/path");
}

#[tokio::test]
async fn test_redirect_to_with_turbolinks_and_single_keep_option() {
    let res = dispatch(
        Method::POST,
        "redirect_to_path_with_turbolinks_and_single_keep_option",
        false,
    )
    .await;
    assert_turbolinks_visit(res, "http://test.host/path", Some("{ keep: ['foo'] }")).await;
}

#[tokio::test]
async fn test_redirect_to_with_turbolinks_and_multiple_keep_option() {
    let res = dispatch(
        Method::DELETE,
        "redirect_to_path_with_turbolinks_and_multiple_keep_option",
        false,
    )
    .await;
    assert_turbolinks_visit(res, "http://test.host/path", Some("{ keep: ['foo', 'bar'] }")).await;
}

#[tokio::test]
async fn test_redirect_to_with_turbolinks_and_keep_option_via_get_does_normal_redirect() {
    let res = dispatch(
        Method::GET,
        "redirect_to_path_with_turbolinks_and_single_keep_option",
        false,
    )
    .await;
    assert_redirected_to(&res, StatusCode::FOUND, "http://test.host/path");
}

#[tokio::test]
async fn test_redirect_via_turbolinks_to_ignores_method_and_xhr() {
    for (method, xhr) in [(Method::GET, false), (Method::GET, true), (Method::POST, false)] {
        let res = dispatch(method, "redirect_via_turbolinks_to_path", xhr).await;
        assert_turbolinks_visit(res, "http://test.host/path", Some("{ keep: ['foo'] }")).await;
    }
}

#[tokio::test]
async fn test_redirect_to_with_change_and_keep_fails_the_request() {
    for method in [Method::GET, Method::POST] {
        let res = dispatch(method, "redirect_to_path_with_change_and_keep", true).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

#[test]
fn test_redirect_to_with_change_and_keep_raises_conflicting_options() {
    let redirector = Redirector::new(RouteTable::new());
    let request = RedirectRequest::new(Method::GET, Url::parse("http://test.host/").unwrap());
    let result = redirector.decide(
        &request,
        &RedirectTarget::from("/path"),
        &RedirectOptions::new().change("foo").keep("bar"),
    );
    assert_eq!(result, Err(RedirectError::ConflictingOptions));
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let res = dispatch(Method::POST, "redirect_to_url_string", true).await;
    assert!(res.headers().contains_key(X_REQUEST_ID));
}

#[tokio::test]
async fn test_redirect_target_action_is_served() {
    let res = dispatch(Method::GET, "action", false).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_string(res).await, "action");
}

#[tokio::test]
async fn test_forwarded_proto_limited_to_web_schemes() {
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt;

    let cases = [
        ("https, http", "https://test.host/path"),
        ("javascript", "http://test.host/path"),
        ("ftp", "http://test.host/path"),
    ];
    for (proto, url) in cases {
        let req = Request::builder()
            .method(Method::POST)
            .uri("/redirect/redirect_to_path_and_custom_status")
            .header(header::HOST, "test.host")
            .header("X-Requested-With", "XMLHttpRequest")
            .header("X-Forwarded-Proto", proto)
            .body(Body::empty())
            .unwrap();
        let res = common::app().oneshot(req).await.unwrap();
        assert_turbolinks_visit(res, url, None).await;
    }
}
