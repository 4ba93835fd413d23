//! Append-only log of processed requests.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::model::{HttpRequest, HttpResponse};
use crate::recording::outcome::Outcome;

/// One processed request and the response it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedExchange {
    pub request: HttpRequest,
    pub response: HttpResponse,
}

impl RecordedExchange {
    /// Pair a captured request with whatever its outcome recorded.
    pub fn new(request: HttpRequest, outcome: &Outcome) -> Self {
        Self {
            request,
            response: outcome.recorded_response(),
        }
    }
}

/// Thread-safe, append-only traffic log.
#[derive(Debug, Default)]
pub struct TrafficLedger {
    entries: Mutex<Vec<RecordedExchange>>,
}

impl TrafficLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exchange at the end. Returns its position.
    pub fn append(&self, exchange: RecordedExchange) -> usize {
        let mut entries = self.lock();
        entries.push(exchange);
        entries.len() - 1
    }

    /// Copy of all entries in append order.
    pub fn snapshot(&self) -> Vec<RecordedExchange> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Vec::push never leaves a partial entry; a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, Vec<RecordedExchange>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
