//! Route table resolving symbolic routes to URLs.
//!
//! # Responsibilities
//! - Store named path templates (`/posts/:id`)
//! - Expand conventional `/{controller}/{action}[/{id}]` routes
//! - Append unused params as query pairs, in given order
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) name lookup via HashMap
//! - Explicit `UnknownRoute` rather than a silent default
//! - Segments and query values are percent-encoded by `url`

use std::collections::HashMap;

use url::Url;

use crate::config::RouteConfig;
use crate::redirect::error::ResolveError;
use crate::redirect::target::{RouteDescriptor, UrlResolver};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// Parsed path template.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PathTemplate {
    segments: Vec<Segment>,
}

impl PathTemplate {
    fn parse(path: &str) -> Self {
        let segments = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(s.to_string()),
            })
            .collect();
        Self { segments }
    }

    /// Fill the template. Returns path segments and the params left over.
    fn expand<'a>(
        &self,
        route: &str,
        params: &'a [(String, String)],
    ) -> Result<(Vec<String>, Vec<&'a (String, String)>), ResolveError> {
        let mut used = vec![false; params.len()];
        let mut out = Vec::with_capacity(self.segments.len());

        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => out.push(s.clone()),
                Segment::Param(name) => {
                    let idx = params
                        .iter()
                        .enumerate()
                        .position(|(i, (k, _))| !used[i] && k == name)
                        .ok_or_else(|| ResolveError::MissingParam {
                            route: route.to_string(),
                            param: name.clone(),
                        })?;
                    used[idx] = true;
                    out.push(params[idx].1.clone());
                }
            }
        }

        let rest = params
            .iter()
            .zip(used)
            .filter_map(|(p, u)| (!u).then_some(p))
            .collect();
        Ok((out, rest))
    }
}

/// Immutable table of named routes.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    named: HashMap<String, PathTemplate>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile the table from configuration. Later duplicates win;
    /// validation rejects them before this point.
    pub fn from_config(routes: &[RouteConfig]) -> Self {
        routes
            .iter()
            .fold(Self::new(), |table, r| table.with_route(&r.name, &r.path))
    }

    pub fn with_route(mut self, name: impl Into<String>, path: &str) -> Self {
        self.named.insert(name.into(), PathTemplate::parse(path));
        self
    }

    pub fn len(&self) -> usize {
        self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty()
    }
}

impl UrlResolver for RouteTable {
    fn url_for(&self, origin: &Url, route: &RouteDescriptor) -> Result<Url, ResolveError> {
        let (segments, rest) = match route {
            RouteDescriptor::Named { name, params } => self
                .named
                .get(name)
                .ok_or_else(|| ResolveError::UnknownRoute(name.clone()))?
                .expand(name, params)?,
            RouteDescriptor::Action {
                controller,
                action,
                params,
            } => {
                let mut segments = vec![controller.clone(), action.clone()];
                let mut rest = Vec::new();
                let mut id_taken = false;
                for param in params {
                    if param.0 == "id" && !id_taken {
                        segments.push(param.1.clone());
                        id_taken = true;
                    } else {
                        rest.push(param);
                    }
                }
                (segments, rest)
            }
        };

        let mut url = origin.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| ResolveError::InvalidUrl {
                url: origin.to_string(),
                reason: "origin cannot be a base".to_string(),
            })?
            .clear()
            .extend(&segments);

        if !rest.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(rest.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        Ok(url)
    }
}
