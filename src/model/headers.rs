//! Header multimap.
//!
//! Each name maps to the ordered sequence of values it carried. A name with
//! an empty sequence is distinct from an absent name.

use std::collections::BTreeMap;
use std::fmt;

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// A header cannot be represented on the wire.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    #[error("invalid header name {0:?}")]
    InvalidName(String),

    #[error("invalid value for header {name:?}: {value:?}")]
    InvalidValue { name: String, value: String },
}

/// Header name → ordered values. Names are lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Headers(BTreeMap<String, Vec<String>>);

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture every value of every header, keeping per-name order.
    pub fn from_header_map(map: &HeaderMap) -> Self {
        let mut headers = Self::new();
        for (name, value) in map.iter() {
            headers.append(
                name.as_str(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            );
        }
        headers
    }

    /// Append a value after any existing values for `name`.
    pub fn append(&mut self, name: &str, value: impl Into<String>) {
        self.0
            .entry(name.to_ascii_lowercase())
            .or_default()
            .push(value.into());
    }

    /// Insert `name` with an explicit value list, replacing what was there.
    pub fn insert(&mut self, name: &str, values: Vec<String>) {
        self.0.insert(name.to_ascii_lowercase(), values);
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.0.remove(&name.to_ascii_lowercase())
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.0.get(&name.to_ascii_lowercase()).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Convert into a transport header map, appending values in order.
    ///
    /// A name with no values has no wire representation and is skipped.
    pub fn to_header_map(&self) -> Result<HeaderMap, HeaderError> {
        let mut map = HeaderMap::new();
        for (name, values) in &self.0 {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| HeaderError::InvalidName(name.clone()))?;
            for value in values {
                let header_value =
                    HeaderValue::from_str(value).map_err(|_| HeaderError::InvalidValue {
                        name: name.clone(),
                        value: value.clone(),
                    })?;
                map.append(header_name.clone(), header_value);
            }
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for Headers {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(HeadersVisitor)
    }
}

/// Folds entries in document order, so names repeated with any casing
/// keep every value in the order it was written.
struct HeadersVisitor;

impl<'de> Visitor<'de> for HeadersVisitor {
    type Value = Headers;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of header names to value lists, or null")
    }

    fn visit_none<E>(self) -> Result<Headers, E> {
        Ok(Headers::new())
    }

    fn visit_unit<E>(self) -> Result<Headers, E> {
        Ok(Headers::new())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Headers, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }

    fn visit_map<A>(self, mut access: A) -> Result<Headers, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut headers = Headers::new();
        while let Some((name, values)) = access.next_entry::<String, Vec<String>>()? {
            headers
                .0
                .entry(name.to_ascii_lowercase())
                .or_default()
                .extend(values);
        }
        Ok(headers)
    }
}

impl<const N: usize> From<[(&str, &[&str]); N]> for Headers {
    fn from(pairs: [(&str, &[&str]); N]) -> Self {
        let mut headers = Headers::new();
        for (name, values) in pairs {
            headers.insert(name, values.iter().map(|v| v.to_string()).collect());
        }
        headers
    }
}
