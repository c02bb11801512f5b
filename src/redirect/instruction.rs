//! Client navigation instruction rendering.
//!
//! Renders exactly one shape:
//! ```text
//! Turbolinks.visit('<url>');
//! Turbolinks.visit('<url>', { change: ['<k1>', '<k2>'] });
//! Turbolinks.visit('<url>', { keep: ['<k1>', '<k2>'] });
//! ```

use std::fmt;

/// Media type of the instruction payload.
pub const JAVASCRIPT_CONTENT_TYPE: &str = "text/javascript";

/// Query keys the client should refresh or preserve during the visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitDirective {
    Change(Vec<String>),
    Keep(Vec<String>),
}

impl VisitDirective {
    fn parts(&self) -> (&'static str, &[String]) {
        match self {
            VisitDirective::Change(keys) => ("change", keys),
            VisitDirective::Keep(keys) => ("keep", keys),
        }
    }
}

impl fmt::Display for VisitDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, keys) = self.parts();
        write!(f, "{{ {}: [", name)?;
        for (i, key) in keys.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}'", key)?;
        }
        write!(f, "] }}")
    }
}

/// A `Turbolinks.visit` call telling the client to navigate itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitInstruction {
    pub url: String,
    pub directive: Option<VisitDirective>,
}

impl VisitInstruction {
    pub fn new(url: impl Into<String>, directive: Option<VisitDirective>) -> Self {
        Self {
            url: url.into(),
            directive,
        }
    }

    /// The response body.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VisitInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.directive {
            Some(directive) => write!(f, "Turbolinks.visit('{}', {});", self.url, directive),
            None => write!(f, "Turbolinks.visit('{}');", self.url),
        }
    }
}
