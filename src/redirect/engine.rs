//! Redirect decision engine.
//!
//! # Responsibilities
//! - Validate per-call options before anything else
//! - Decide between a client instruction and a plain redirect
//! - Resolve the target through the injected `UrlResolver`
//!
//! # Design Decisions
//! - Immutable after construction, shared via `Arc` across requests
//! - Decision is a pure function of (request, target, options)
//! - GET never gets an instruction through `decide`; only
//!   `decide_via_turbolinks` bypasses the request shape

use std::sync::Arc;

use axum::http::StatusCode;

use crate::observability::metrics;
use crate::redirect::decision::RedirectDecision;
use crate::redirect::error::RedirectResult;
use crate::redirect::instruction::VisitInstruction;
use crate::redirect::options::RedirectOptions;
use crate::redirect::request::RedirectRequest;
use crate::redirect::target::{RedirectTarget, UrlResolver};

/// Status used for plain redirects when the caller does not pick one.
pub const DEFAULT_REDIRECT_STATUS: StatusCode = StatusCode::FOUND;

/// Decides how a redirect reaches the client.
#[derive(Clone)]
pub struct Redirector {
    resolver: Arc<dyn UrlResolver>,
    default_status: StatusCode,
}

impl Redirector {
    /// Create an engine resolving symbolic routes with `resolver`.
    pub fn new(resolver: impl UrlResolver + 'static) -> Self {
        Self {
            resolver: Arc::new(resolver),
            default_status: DEFAULT_REDIRECT_STATUS,
        }
    }

    pub fn with_default_status(mut self, status: StatusCode) -> Self {
        self.default_status = status;
        self
    }

    /// Convenience call shape: emits an instruction for mutating XHR
    /// requests, or when `options.turbolinks` asks for it on a non-GET
    /// request.
    pub fn decide(
        &self,
        request: &RedirectRequest,
        target: &RedirectTarget,
        options: &RedirectOptions,
    ) -> RedirectResult<RedirectDecision> {
        self.build(request, target, options, wants_instruction(request, options))
    }

    /// Dedicated call shape: always emits an instruction.
    pub fn decide_via_turbolinks(
        &self,
        request: &RedirectRequest,
        target: &RedirectTarget,
        options: &RedirectOptions,
    ) -> RedirectResult<RedirectDecision> {
        self.build(request, target, options, true)
    }

    fn build(
        &self,
        request: &RedirectRequest,
        target: &RedirectTarget,
        options: &RedirectOptions,
        instruction: bool,
    ) -> RedirectResult<RedirectDecision> {
        let directive = options.directive()?;
        let url = target.resolve(&request.origin, self.resolver.as_ref())?;

        let decision = if instruction {
            if url.contains('\'') {
                tracing::warn!(url = %url, "Redirect URL contains a single quote; instruction will not parse");
            }
            RedirectDecision::Instruction(VisitInstruction::new(url, directive))
        } else {
            RedirectDecision::HttpRedirect {
                location: url,
                status: options.status.unwrap_or(self.default_status),
            }
        };

        tracing::debug!(
            method = %request.method,
            xhr = request.xhr,
            outcome = decision.outcome(),
            location = %decision.location(),
            "Redirect decided"
        );
        metrics::record_decision(decision.outcome());

        Ok(decision)
    }
}

impl std::fmt::Debug for Redirector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Redirector")
            .field("default_status", &self.default_status)
            .finish_non_exhaustive()
    }
}

fn wants_instruction(request: &RedirectRequest, options: &RedirectOptions) -> bool {
    if request.is_get() {
        return false;
    }
    match options.turbolinks {
        Some(enabled) => enabled,
        None => request.xhr && request.is_mutating(),
    }
}
