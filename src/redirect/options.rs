//! Per-call redirect options.
//!
//! # Design Decisions
//! - Explicit fields instead of an open option bag
//! - Unknown keys are rejected when deserializing
//! - `change`/`keep` exclusivity is checked on every call, before the
//!   request shape is looked at

use axum::http::StatusCode;
use serde::{Deserialize, Deserializer};

use crate::redirect::error::{RedirectError, RedirectResult};
use crate::redirect::instruction::VisitDirective;

/// Ordered list of query-parameter keys for a `change` or `keep` directive.
///
/// Built from a single key or a list of keys; input order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "OneOrMany")]
pub struct QueryKeys(Vec<String>);

impl QueryKeys {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for QueryKeys {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(key) => Self(vec![key]),
            OneOrMany::Many(keys) => Self(keys),
        }
    }
}

impl From<&str> for QueryKeys {
    fn from(key: &str) -> Self {
        Self(vec![key.to_string()])
    }
}

impl From<String> for QueryKeys {
    fn from(key: String) -> Self {
        Self(vec![key])
    }
}

impl From<Vec<String>> for QueryKeys {
    fn from(keys: Vec<String>) -> Self {
        Self(keys)
    }
}

impl From<Vec<&str>> for QueryKeys {
    fn from(keys: Vec<&str>) -> Self {
        Self(keys.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for QueryKeys {
    fn from(keys: [&str; N]) -> Self {
        Self(keys.iter().map(|k| k.to_string()).collect())
    }
}

/// Options accepted by both redirect call shapes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RedirectOptions {
    /// `Some(true)` asks for the instruction, `Some(false)` forbids it,
    /// `None` leaves it to the request shape.
    pub turbolinks: Option<bool>,

    /// Status for a plain redirect. Ignored for instructions.
    #[serde(deserialize_with = "deserialize_status")]
    pub status: Option<StatusCode>,

    /// Keys the client should refresh after navigating.
    pub change: Option<QueryKeys>,

    /// Keys the client should preserve while navigating.
    pub keep: Option<QueryKeys>,
}

impl RedirectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turbolinks(mut self, enabled: bool) -> Self {
        self.turbolinks = Some(enabled);
        self
    }

    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    pub fn change(mut self, keys: impl Into<QueryKeys>) -> Self {
        self.change = Some(keys.into());
        self
    }

    pub fn keep(mut self, keys: impl Into<QueryKeys>) -> Self {
        self.keep = Some(keys.into());
        self
    }

    /// Check `change`/`keep` exclusivity and fold them into a directive.
    ///
    /// An empty key list counts as present for the conflict check but
    /// yields no directive.
    pub fn directive(&self) -> RedirectResult<Option<VisitDirective>> {
        match (&self.change, &self.keep) {
            (Some(_), Some(_)) => Err(RedirectError::ConflictingOptions),
            (Some(keys), None) if !keys.is_empty() => {
                Ok(Some(VisitDirective::Change(keys.as_slice().to_vec())))
            }
            (None, Some(keys)) if !keys.is_empty() => {
                Ok(Some(VisitDirective::Keep(keys.as_slice().to_vec())))
            }
            _ => Ok(None),
        }
    }
}

fn deserialize_status<'de, D>(deserializer: D) -> Result<Option<StatusCode>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<u16>::deserialize(deserializer)?
        .map(StatusCode::from_u16)
        .transpose()
        .map_err(serde::de::Error::custom)
}
