//! Inbound request capture.
//!
//! # Responsibilities
//! - Record method and request target verbatim
//! - Copy every header value, keeping per-name order
//! - Drop headers that describe how the request reached the proxy
//!
//! # Design Decisions
//! - The body is buffered by the pipeline, once, so it can be both matched
//!   and forwarded
//! - `Host` duplicates the authority already present in the URL

use axum::http::{request::Parts, Uri};

use crate::model::{Headers, HttpRequest, Payload};

/// Headers removed from every captured request.
pub const TRANSPORT_ARTIFACT_HEADERS: [&str; 2] = ["host", "proxy-connection"];

/// Capture everything but the body.
pub fn capture_head(parts: &Parts) -> HttpRequest {
    let mut header = Headers::from_header_map(&parts.headers);
    for name in TRANSPORT_ARTIFACT_HEADERS {
        header.remove(name);
    }

    HttpRequest {
        method: parts.method.as_str().to_string(),
        url: request_target(&parts.uri),
        header,
        body: Payload::empty(),
    }
}

/// The target as the client wrote it.
///
/// `Uri`'s `Display` prints an empty path as `/`, which would turn
/// `http://x?q=1` into `http://x/?q=1`. A target with nothing after the
/// authority is already `/` once parsed.
fn request_target(uri: &Uri) -> String {
    let (Some(scheme), Some(authority)) = (uri.scheme_str(), uri.authority()) else {
        return uri.to_string();
    };
    let path_and_query = uri.path_and_query().map_or("", |pq| pq.as_str());
    format!("{scheme}://{authority}{path_and_query}")
}

/// True when the request target names its own scheme and authority, i.e.
/// the client is using this process as a forward proxy.
pub fn is_absolute_form(uri: &Uri) -> bool {
    uri.scheme().is_some() && uri.authority().is_some()
}
