//! Mock registration and lookup.

use std::sync::Arc;

use arc_swap::ArcSwap;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mocks::matcher::matches;
use crate::model::{HeaderError, HttpRequest, HttpResponse};

/// A registered (expected request, canned response) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mock {
    /// Caller-supplied identifier. Not required to be unique.
    pub id: String,
    pub request: HttpRequest,
    pub response: HttpResponse,
}

/// Reasons a parsed mock cannot be registered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidMock {
    #[error("mock {id:?}: status code {status} is not a valid HTTP status")]
    Status { id: String, status: i32 },

    #[error("mock {id:?}: {source}")]
    Header {
        id: String,
        #[source]
        source: HeaderError,
    },
}

impl Mock {
    /// Check that the canned response can be sent to a client as-is.
    pub fn validate(&self) -> Result<(), InvalidMock> {
        let status = self.response.status_code;
        let valid_status = u16::try_from(status)
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .is_some();
        if !valid_status {
            return Err(InvalidMock::Status {
                id: self.id.clone(),
                status,
            });
        }

        self.response
            .header
            .to_header_map()
            .map_err(|source| InvalidMock::Header {
                id: self.id.clone(),
                source,
            })?;

        Ok(())
    }
}

/// Ordered, append-only collection of mocks.
///
/// Readers load the current snapshot without blocking; each registration
/// publishes a new snapshot containing the appended mock.
#[derive(Debug, Default)]
pub struct MockRegistry {
    mocks: ArcSwap<Vec<Mock>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a mock. Duplicate ids are allowed.
    pub fn register(&self, mock: Mock) {
        self.mocks.rcu(|current| {
            let mut next = Vec::with_capacity(current.len() + 1);
            next.extend(current.iter().cloned());
            next.push(mock.clone());
            next
        });
    }

    /// First mock, in registration order, whose expected request equals `request`.
    pub fn find_match(&self, request: &HttpRequest) -> Option<Mock> {
        self.mocks
            .load()
            .iter()
            .find(|mock| matches(&mock.request, request))
            .cloned()
    }

    /// Snapshot of all mocks in registration order.
    pub fn list(&self) -> Arc<Vec<Mock>> {
        self.mocks.load_full()
    }

    pub fn len(&self) -> usize {
        self.mocks.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
