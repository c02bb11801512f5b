//! Redirect error definitions.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors raised while resolving a symbolic or relative target to a URL.
///
/// These belong to the URL resolver; the engine passes them through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No route with this name is registered.
    #[error("No route named '{0}'")]
    UnknownRoute(String),

    /// A path template segment had no matching parameter.
    #[error("Route '{route}' requires parameter ':{param}'")]
    MissingParam { route: String, param: String },

    /// The target could not be parsed or joined onto the request origin.
    #[error("Invalid redirect URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Errors surfaced by a redirect call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RedirectError {
    /// Both `change` and `keep` were supplied.
    #[error("cannot combine :change and :keep options")]
    ConflictingOptions,

    /// Target resolution failed.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Result type for redirect operations.
pub type RedirectResult<T> = Result<T, RedirectError>;

impl IntoResponse for RedirectError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Redirect failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
