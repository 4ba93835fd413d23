//! Transport gateway subsystem.
//!
//! # Data Flow
//! ```text
//! HttpRequest (method, absolute url, header, body)
//!     → client.rs (build hyper request, enforce timeouts)
//!     → upstream server
//!     → HttpResponse (status, header, fully read body)
//!       or TransportError (description only)
//! ```
//!
//! # Design Decisions
//! - Stateless from the pipeline's point of view; connection reuse,
//!   TLS and redirects are left entirely to the client
//! - Every call has a deadline; a hung upstream only holds its own task
//! - Upstream 4xx/5xx are responses, not errors

pub mod client;

use std::time::Duration;

use futures_util::future::BoxFuture;
use thiserror::Error;

use crate::model::{HttpRequest, HttpResponse};

pub use client::HyperGateway;

/// Why a request never produced an upstream response.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid outbound request: {0}")]
    InvalidRequest(String),

    #[error("upstream request failed: {0}")]
    Upstream(String),

    #[error("upstream response body could not be read: {0}")]
    Body(String),

    #[error("upstream did not respond within {0:?}")]
    Timeout(Duration),
}

/// Sends a captured request to the real upstream.
pub trait Transport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: &'a HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportError>>;
}

/// Render an error together with its source chain.
pub(crate) fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !description.contains(&text) {
            description.push_str(": ");
            description.push_str(&text);
        }
        source = cause.source();
    }
    description
}
