//! Per-request interception.

use std::sync::Arc;
use std::time::Instant;

use axum::{body::Body, http::Request};
use tracing::Instrument;
use uuid::Uuid;

use crate::gateway::{describe, Transport};
use crate::http::request::capture_head;
use crate::mocks::MockRegistry;
use crate::model::{HttpRequest, HttpResponse, Payload};
use crate::observability::metrics;
use crate::recording::{Outcome, RecordedExchange, TrafficLedger};

/// Decides, per request, between a mock and the upstream, and records the result.
pub struct InterceptionPipeline {
    registry: Arc<MockRegistry>,
    ledger: Arc<TrafficLedger>,
    transport: Arc<dyn Transport>,
    max_body_bytes: usize,
}

impl InterceptionPipeline {
    pub fn new(
        registry: Arc<MockRegistry>,
        ledger: Arc<TrafficLedger>,
        transport: Arc<dyn Transport>,
        max_body_bytes: usize,
    ) -> Self {
        Self {
            registry,
            ledger,
            transport,
            max_body_bytes,
        }
    }

    /// Run one inbound request to completion.
    ///
    /// Always appends exactly one entry to the ledger and returns the
    /// response owed to the caller.
    pub async fn process(&self, request: Request<Body>) -> HttpResponse {
        let span = tracing::info_span!(
            "intercept",
            exchange_id = %Uuid::new_v4(),
            method = %request.method(),
            url = %request.uri(),
        );
        self.run(request).instrument(span).await
    }

    async fn run(&self, request: Request<Body>) -> HttpResponse {
        let start = Instant::now();

        // RECEIVED
        let (parts, body) = request.into_parts();
        let mut captured = capture_head(&parts);
        let outcome = match axum::body::to_bytes(body, self.max_body_bytes).await {
            Ok(bytes) => {
                captured.body = Payload::from(bytes);
                self.resolve(&captured).await
            }
            Err(e) => {
                let description = format!("failed to read request body: {}", describe(&e));
                tracing::warn!(error = %description, "Inbound body unreadable");
                Outcome::CaptureFailed(description)
            }
        };

        // RECORDED
        let label = outcome.label();
        let position = self.ledger.append(RecordedExchange::new(captured, &outcome));
        metrics::record_exchange(label, start, position + 1);
        tracing::info!(
            outcome = label,
            mock_id = outcome.mock_id(),
            ledger_position = position,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Exchange recorded"
        );

        outcome.into_client_response()
    }

    async fn resolve(&self, request: &HttpRequest) -> Outcome {
        // MATCHING
        if let Some(mock) = self.registry.find_match(request) {
            tracing::debug!(mock_id = %mock.id, "Mock matched");
            return Outcome::MockHit {
                mock_id: mock.id,
                response: mock.response,
            };
        }

        // FORWARDING
        match self.transport.send(request).await {
            Ok(response) => {
                tracing::debug!(status = response.status_code, "Upstream responded");
                Outcome::Forwarded(response)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Forwarding failed");
                Outcome::ForwardFailed(e.to_string())
            }
        }
    }
}
