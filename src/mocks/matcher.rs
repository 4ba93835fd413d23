//! Exact request matching.
//!
//! # Rules
//! - Method strings equal, case-sensitive
//! - URLs equal as strings (no slash, query-order or percent-encoding folding)
//! - Header maps deeply equal: same names, same values in the same order
//! - Bodies equal byte-for-byte
//!
//! All four must hold. There is no wildcard and no partial header match.

use crate::model::HttpRequest;

/// Returns true if `actual` is exactly the request `expected` describes.
pub fn matches(expected: &HttpRequest, actual: &HttpRequest) -> bool {
    expected.method == actual.method
        && expected.url == actual.url
        && expected.header == actual.header
        && expected.body.as_bytes() == actual.body.as_bytes()
}
