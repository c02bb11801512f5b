//! Axum extractor exposing the two redirect call shapes to handlers.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::{request::Parts, StatusCode};

use crate::redirect::decision::RedirectDecision;
use crate::redirect::engine::Redirector;
use crate::redirect::error::RedirectResult;
use crate::redirect::options::RedirectOptions;
use crate::redirect::request::RedirectRequest;
use crate::redirect::target::RedirectTarget;

/// Shared redirect settings pulled from application state.
#[derive(Debug, Clone)]
pub struct RedirectState {
    pub redirector: Arc<Redirector>,
    /// Host used when the request carries no authority.
    pub default_host: String,
}

/// Per-request handle for issuing redirects.
///
/// ```ignore
/// async fn update(redirect: RedirectContext) -> RedirectResult<RedirectDecision> {
///     redirect.redirect_to("/posts", RedirectOptions::new().change("comments"))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RedirectContext {
    request: RedirectRequest,
    redirector: Arc<Redirector>,
}

impl RedirectContext {
    pub fn new(request: RedirectRequest, redirector: Arc<Redirector>) -> Self {
        Self { request, redirector }
    }

    /// Redirect, substituting a `Turbolinks.visit` where the request shape
    /// or `options.turbolinks` calls for it.
    pub fn redirect_to(
        &self,
        target: impl Into<RedirectTarget>,
        options: RedirectOptions,
    ) -> RedirectResult<RedirectDecision> {
        self.redirector.decide(&self.request, &target.into(), &options)
    }

    /// Always answer with a `Turbolinks.visit`, whatever the request shape.
    pub fn redirect_via_turbolinks_to(
        &self,
        target: impl Into<RedirectTarget>,
        options: RedirectOptions,
    ) -> RedirectResult<RedirectDecision> {
        self.redirector
            .decide_via_turbolinks(&self.request, &target.into(), &options)
    }
}

impl<S> FromRequestParts<S> for RedirectContext
where
    RedirectState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = RedirectState::from_ref(state);
        let request = RedirectRequest::from_parts(parts, &state.default_host).map_err(|e| {
            tracing::warn!(error = %e, "Cannot derive request origin");
            (StatusCode::BAD_REQUEST, "Invalid Host header")
        })?;
        Ok(Self::new(request, state.redirector))
    }
}
