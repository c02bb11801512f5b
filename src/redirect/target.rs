//! Redirect targets and URL resolution.
//!
//! # Responsibilities
//! - Represent what a handler redirects to (URL string or symbolic route)
//! - Define the `UrlResolver` capability for symbolic routes
//! - Turn any target into an absolute URL against the request origin
//!
//! # Design Decisions
//! - Strings that already carry a scheme are used verbatim (no normalization)
//! - Paths are joined onto the request origin
//! - Resolver errors propagate untouched

use url::Url;

use crate::redirect::error::ResolveError;

/// Symbolic route reference resolved by a `UrlResolver`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDescriptor {
    /// Conventional `/{controller}/{action}` route.
    Action {
        controller: String,
        action: String,
        params: Vec<(String, String)>,
    },
    /// Route registered under a name with a path template.
    Named {
        name: String,
        params: Vec<(String, String)>,
    },
}

impl RouteDescriptor {
    pub fn action(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self::Action {
            controller: controller.into(),
            action: action.into(),
            params: Vec::new(),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Append a parameter. Parameters keep insertion order.
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        let entry = (key.into(), value.to_string());
        match &mut self {
            Self::Action { params, .. } | Self::Named { params, .. } => params.push(entry),
        }
        self
    }

    pub fn params(&self) -> &[(String, String)] {
        match self {
            Self::Action { params, .. } | Self::Named { params, .. } => params,
        }
    }
}

/// Capability that turns symbolic routes into URLs.
pub trait UrlResolver: Send + Sync {
    /// Resolve `route` for a request served from `origin`.
    fn url_for(&self, origin: &Url, route: &RouteDescriptor) -> Result<Url, ResolveError>;
}

impl<F> UrlResolver for F
where
    F: Fn(&Url, &RouteDescriptor) -> Result<Url, ResolveError> + Send + Sync,
{
    fn url_for(&self, origin: &Url, route: &RouteDescriptor) -> Result<Url, ResolveError> {
        self(origin, route)
    }
}

/// Where a redirect points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectTarget {
    /// Absolute URL, absolute path, or relative path.
    Url(String),
    /// Symbolic route.
    Route(RouteDescriptor),
}

impl RedirectTarget {
    /// Resolve to the absolute URL string sent to the client.
    pub fn resolve(&self, origin: &Url, resolver: &dyn UrlResolver) -> Result<String, ResolveError> {
        match self {
            Self::Url(target) => absolutize(origin, target),
            Self::Route(route) => Ok(resolver.url_for(origin, route)?.to_string()),
        }
    }
}

impl From<&str> for RedirectTarget {
    fn from(url: &str) -> Self {
        Self::Url(url.to_string())
    }
}

impl From<String> for RedirectTarget {
    fn from(url: String) -> Self {
        Self::Url(url)
    }
}

impl From<RouteDescriptor> for RedirectTarget {
    fn from(route: RouteDescriptor) -> Self {
        Self::Route(route)
    }
}

fn absolutize(origin: &Url, target: &str) -> Result<String, ResolveError> {
    let invalid = |reason: url::ParseError| ResolveError::InvalidUrl {
        url: target.to_string(),
        reason: reason.to_string(),
    };

    match Url::parse(target) {
        Ok(_) => Ok(target.to_string()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            origin.join(target).map(String::from).map_err(invalid)
        }
        Err(e) => Err(invalid(e)),
    }
}
