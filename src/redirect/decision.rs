//! Redirect decision outcome and how it is written to the response.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::redirect::instruction::{VisitInstruction, JAVASCRIPT_CONTENT_TYPE};

/// The two terminal outcomes of a redirect call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectDecision {
    /// Respond 200 with a `Turbolinks.visit` script.
    Instruction(VisitInstruction),
    /// Hand over to a conventional `Location` redirect.
    HttpRedirect { location: String, status: StatusCode },
}

impl RedirectDecision {
    /// Resolved URL the client ends up at.
    pub fn location(&self) -> &str {
        match self {
            Self::Instruction(visit) => &visit.url,
            Self::HttpRedirect { location, .. } => location,
        }
    }

    pub fn is_instruction(&self) -> bool {
        matches!(self, Self::Instruction(_))
    }

    /// Short label used in logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::Instruction(_) => "instruction",
            Self::HttpRedirect { .. } => "http_redirect",
        }
    }
}

impl IntoResponse for RedirectDecision {
    fn into_response(self) -> Response {
        match self {
            Self::Instruction(visit) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, JAVASCRIPT_CONTENT_TYPE)],
                visit.render(),
            )
                .into_response(),
            Self::HttpRedirect { location, status } => match HeaderValue::try_from(location.as_str()) {
                Ok(value) => (status, [(header::LOCATION, value)]).into_response(),
                Err(e) => {
                    tracing::error!(location = %location, error = %e, "Redirect location is not a valid header value");
                    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redirect::instruction::VisitDirective;

    #[tokio::test]
    async fn test_instruction_response() {
        let decision = RedirectDecision::Instruction(VisitInstruction::new(
            "http://test.host/path",
            Some(VisitDirective::Change(vec!["foo".into(), "bar".into()])),
        ));
        let res = decision.into_response();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()[header::CONTENT_TYPE], "text/javascript");
        assert!(res.headers().get(header::LOCATION).is_none());

        let body = axum::body::to_bytes(res.into_body(), 1024).await.unwrap();
        assert_eq!(
            &body[..],
            b"Turbolinks.visit('http://test.host/path', { change: ['foo', 'bar'] });"
        );
    }

    #[test]
    fn test_http_redirect_response() {
        let decision = RedirectDecision::HttpRedirect {
            location: "http://test.host/path".into(),
            status: StatusCode::SEE_OTHER,
        };
        assert_eq!(decision.outcome(), "http_redirect");

        let res = decision.into_response();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers()[header::LOCATION], "http://test.host/path");
    }

    #[test]
    fn test_invalid_location_fails() {
        let decision = RedirectDecision::HttpRedirect {
            location: "http://test.host/\nSet-Cookie: x".into(),
            status: StatusCode::FOUND,
        };
        let res = decision.into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
