//! Admin API errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::mocks::InvalidMock;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("malformed mock: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("invalid mock: {0}")]
    Invalid(#[from] InvalidMock),

    #[error("failed to serialize response: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl AdminError {
    pub fn status(&self) -> StatusCode {
        match self {
            AdminError::Malformed(_) | AdminError::Invalid(_) => StatusCode::BAD_REQUEST,
            AdminError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Admin request failed");
        } else {
            tracing::warn!(error = %self, "Admin request rejected");
        }
        (status, self.to_string()).into_response()
    }
}
