//! Redirect controller.
//!
//! Every action exercises one combination of target and options so the
//! whole decision table can be driven over HTTP.

use axum::{http::StatusCode, routing::any, Router};

use crate::http::server::AppState;
use crate::redirect::{
    RedirectContext, RedirectDecision, RedirectOptions, RedirectResult, RouteDescriptor,
};

/// Controller name used for conventional routes.
pub const CONTROLLER: &str = "redirect";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/redirect/action", any(action))
        .route("/redirect/redirect_to_url_string", any(redirect_to_url_string))
        .route(
            "/redirect/redirect_to_url_string_with_turbolinks",
            any(redirect_to_url_string_with_turbolinks),
        )
        .route("/redirect/redirect_to_url_hash", any(redirect_to_url_hash))
        .route(
            "/redirect/redirect_to_url_hash_with_turbolinks",
            any(redirect_to_url_hash_with_turbolinks),
        )
        .route(
            "/redirect/redirect_to_path_and_custom_status",
            any(redirect_to_path_and_custom_status),
        )
        .route(
            "/redirect/redirect_to_path_with_single_change_option",
            any(redirect_to_path_with_single_change_option),
        )
        .route(
            "/redirect/redirect_to_path_with_multiple_change_option",
            any(redirect_to_path_with_multiple_change_option),
        )
        .route(
            "/redirect/redirect_to_path_with_change_option_and_custom_status",
            any(redirect_to_path_with_change_option_and_custom_status),
        )
        .route(
            "/redirect/redirect_to_path_with_turbolinks_and_single_keep_option",
            any(redirect_to_path_with_turbolinks_and_single_keep_option),
        )
        .route(
            "/redirect/redirect_to_path_with_turbolinks_and_multiple_keep_option",
            any(redirect_to_path_with_turbolinks_and_multiple_keep_option),
        )
        .route(
            "/redirect/redirect_via_turbolinks_to_path",
            any(redirect_via_turbolinks_to_path),
        )
        .route(
            "/redirect/redirect_to_path_with_change_and_keep",
            any(redirect_to_path_with_change_and_keep),
        )
}

async fn action() -> (StatusCode, &'static str) {
    (StatusCode::OK, "action")
}

async fn redirect_to_url_string(redirect: RedirectContext) -> RedirectResult<RedirectDecision> {
    redirect.redirect_to("http://example.com", RedirectOptions::new())
}

async fn redirect_to_url_string_with_turbolinks(
    redirect: RedirectContext,
) -> RedirectResult<RedirectDecision> {
    redirect.redirect_to("http://example.com", RedirectOptions::new().turbolinks(true))
}

async fn redirect_to_url_hash(redirect: RedirectContext) -> RedirectResult<RedirectDecision> {
    redirect.redirect_to(RouteDescriptor::action(CONTROLLER, "action"), RedirectOptions::new())
}

async fn redirect_to_url_hash_with_turbolinks(
    redirect: RedirectContext,
) -> RedirectResult<RedirectDecision> {
    redirect.redirect_to(
        RouteDescriptor::action(CONTROLLER, "action"),
        RedirectOptions::new().turbolinks(true),
    )
}

async fn redirect_to_path_and_custom_status(
    redirect: RedirectContext,
) -> RedirectResult<RedirectDecision> {
    redirect.redirect_to("/path", RedirectOptions::new().status(StatusCode::SEE_OTHER))
}

async fn redirect_to_path_with_single_change_option(
    redirect: RedirectContext,
) -> RedirectResult<RedirectDecision> {
    redirect.redirect_to("/path", RedirectOptions::new().change("foo"))
}

async fn redirect_to_path_with_multiple_change_option(
    redirect: RedirectContext,
) -> RedirectResult<RedirectDecision> {
    redirect.redirect_to("/path", RedirectOptions::new().change(["foo", "bar"]))
}

async fn redirect_to_path_with_change_option_and_custom_status(
    redirect: RedirectContext,
) -> RedirectResult<RedirectDecision> {
    redirect.redirect_to(
        "/path",
        RedirectOptions::new()
            .change(["foo", "bar"])
            .status(StatusCode::SEE_OTHER),
    )
}

async fn redirect_to_path_with_turbolinks_and_single_keep_option(
    redirect: RedirectContext,
) -> RedirectResult<RedirectDecision> {
    redirect.redirect_to("/path", RedirectOptions::new().turbolinks(true).keep("foo"))
}

async fn redirect_to_path_with_turbolinks_and_multiple_keep_option(
    redirect: RedirectContext,
) -> RedirectResult<RedirectDecision> {
    redirect.redirect_to(
        "/path",
        RedirectOptions::new().turbolinks(true).keep(["foo", "bar"]),
    )
}

async fn redirect_via_turbolinks_to_path(
    redirect: RedirectContext,
) -> RedirectResult<RedirectDecision> {
    redirect.redirect_via_turbolinks_to("/path", RedirectOptions::new().keep("foo"))
}

async fn redirect_to_path_with_change_and_keep(
    redirect: RedirectContext,
) -> RedirectResult<RedirectDecision> {
    redirect.redirect_to("/path", RedirectOptions::new().change("foo").keep("bar"))
}
