//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (redirect status is 3xx, timeouts > 0)
//! - Detect duplicate or malformed routes
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("redirect.default_status {0} is not a 3xx status")]
    NotRedirectStatus(u16),

    #[error("redirect.default_host must not be empty")]
    EmptyDefaultHost,

    #[error("timeouts.request_secs must be greater than 0")]
    ZeroTimeout,

    #[error("route name must not be empty")]
    EmptyRouteName,

    #[error("duplicate route name '{0}'")]
    DuplicateRoute(String),

    #[error("route '{name}' path '{path}' must start with '/'")]
    RelativeRoutePath { name: String, path: String },
}

/// Check the configuration, collecting every error.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !(300..400).contains(&config.redirect.default_status) {
        errors.push(ValidationError::NotRedirectStatus(config.redirect.default_status));
    }
    if config.redirect.default_host.trim().is_empty() {
        errors.push(ValidationError::EmptyDefaultHost);
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let mut seen = HashSet::new();
    for route in &config.routes {
        if route.name.is_empty() {
            errors.push(ValidationError::EmptyRouteName);
        } else if !seen.insert(route.name.as_str()) {
            errors.push(ValidationError::DuplicateRoute(route.name.clone()));
        }
        if !route.path.starts_with('/') {
            errors.push(ValidationError::RelativeRoutePath {
                name: route.name.clone(),
                path: route.path.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
