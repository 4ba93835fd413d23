//! Response rendering.
//!
//! # Responsibilities
//! - Turn a captured or synthesized `HttpResponse` into a wire response
//! - Copy headers value-for-value, body byte-for-byte
//!
//! # Design Decisions
//! - A response that cannot be expressed on the wire becomes a 500 for
//!   that caller only

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::model::HttpResponse;

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        let status = u16::try_from(self.status_code)
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok());
        let Some(status) = status else {
            tracing::error!(status = self.status_code, "Response status cannot be sent");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("invalid response status {}", self.status_code),
            )
                .into_response();
        };

        let headers = match self.header.to_header_map() {
            Ok(headers) => headers,
            Err(e) => {
                tracing::error!(error = %e, "Response headers cannot be sent");
                return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
            }
        };

        let mut response = Response::new(Body::from(self.body.to_bytes()));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        response
    }
}
