//! Captured HTTP messages.
//!
//! # Data Flow
//! ```text
//! axum Request<Body>            upstream Response<Incoming>
//!     → HttpRequest                 → HttpResponse
//!        (method, url, header,         (statusCode, header, body)
//!         body)
//!     → matched against mocks, forwarded, recorded
//! ```
//!
//! # Design Decisions
//! - Messages are plain values: captured once, never mutated afterwards
//! - Header names are stored lower-cased, values verbatim and in order
//! - Bodies are raw bytes; the wire form is a string

pub mod headers;
pub mod message;

pub use headers::{HeaderError, Headers};
pub use message::{HttpRequest, HttpResponse, Payload, FAILED_STATUS};
