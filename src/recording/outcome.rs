//! How an intercepted request was resolved.

use axum::http::StatusCode;

use crate::model::HttpResponse;

/// Result of running one request through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Answered from a registered mock.
    MockHit { mock_id: String, response: HttpResponse },

    /// Upstream answered. Any status, including 5xx, lands here.
    Forwarded(HttpResponse),

    /// Upstream could not be reached or its response could not be read.
    ForwardFailed(String),

    /// The inbound body could not be read.
    CaptureFailed(String),
}

impl Outcome {
    /// Short label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::MockHit { .. } => "mock_hit",
            Outcome::Forwarded(_) => "forwarded",
            Outcome::ForwardFailed(_) => "forward_failed",
            Outcome::CaptureFailed(_) => "capture_failed",
        }
    }

    /// Id of the mock that answered, if any.
    pub fn mock_id(&self) -> Option<&str> {
        match self {
            Outcome::MockHit { mock_id, .. } => Some(mock_id),
            _ => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::ForwardFailed(_) | Outcome::CaptureFailed(_))
    }

    /// The response stored in the ledger.
    pub fn recorded_response(&self) -> HttpResponse {
        match self {
            Outcome::MockHit { response, .. } | Outcome::Forwarded(response) => response.clone(),
            Outcome::ForwardFailed(_) | Outcome::CaptureFailed(_) => HttpResponse::failed(),
        }
    }

    /// The response sent back to the caller.
    pub fn into_client_response(self) -> HttpResponse {
        match self {
            Outcome::MockHit { response, .. } | Outcome::Forwarded(response) => response,
            Outcome::ForwardFailed(description) => {
                HttpResponse::plain_text(StatusCode::BAD_GATEWAY.as_u16(), description)
            }
            Outcome::CaptureFailed(description) => HttpResponse::plain_text(
                StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                description,
            ),
        }
    }
}
