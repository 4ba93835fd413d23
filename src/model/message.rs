//! Request and response records.

use std::fmt;

use axum::body::Bytes;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::headers::Headers;

/// Status recorded when forwarding failed and no real response exists.
pub const FAILED_STATUS: i32 = -1;

/// Message body. Compared byte-for-byte; serialized as a string.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Payload(Bytes);

impl Payload {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Cheap clone of the underlying buffer.
    pub fn to_bytes(&self) -> Bytes {
        self.0.clone()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(&self.0))
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Self(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Self(Bytes::from(s))
    }
}

impl From<Bytes> for Payload {
    fn from(bytes: Bytes) -> Self {
        Self(bytes)
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(&self.0))
    }
}

impl<'de> Deserialize<'de> for Payload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let body: Option<String> = Option::deserialize(deserializer)?;
        Ok(body.map(Payload::from).unwrap_or_default())
    }
}

/// A captured HTTP request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequest {
    /// Method, case-sensitive.
    pub method: String,

    /// Request target as received, including the query.
    pub url: String,

    #[serde(default)]
    pub header: Headers,

    #[serde(default)]
    pub body: Payload,
}

impl HttpRequest {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            header: Headers::new(),
            body: Payload::empty(),
        }
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.header.append(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<Payload>) -> Self {
        self.body = body.into();
        self
    }
}

/// An HTTP response, real or synthesized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    /// Status code, or [`FAILED_STATUS`].
    pub status_code: i32,

    #[serde(default)]
    pub header: Headers,

    #[serde(default)]
    pub body: Payload,
}

impl HttpResponse {
    pub fn new(status_code: i32) -> Self {
        Self {
            status_code,
            header: Headers::new(),
            body: Payload::empty(),
        }
    }

    /// The record left behind when no upstream response exists.
    pub fn failed() -> Self {
        Self::new(FAILED_STATUS)
    }

    /// A plain-text response generated by the proxy itself.
    pub fn plain_text(status_code: u16, text: impl Into<String>) -> Self {
        Self::new(i32::from(status_code))
            .with_header("content-type", "text/plain; charset=utf-8")
            .with_body(text.into())
    }

    pub fn is_failed(&self) -> bool {
        self.status_code == FAILED_STATUS
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.header.append(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<Payload>) -> Self {
        self.body = body.into();
        self
    }
}
