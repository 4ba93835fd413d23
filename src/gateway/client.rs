//! hyper-based upstream client.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Method, Request, Uri},
};
use futures_util::future::BoxFuture;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

use crate::config::{LimitsConfig, TimeoutConfig};
use crate::gateway::{describe, Transport, TransportError};
use crate::model::{Headers, HttpRequest, HttpResponse, Payload};

/// Forwards requests over a pooled hyper client.
#[derive(Clone)]
pub struct HyperGateway {
    client: Client<HttpConnector, Body>,
    request_timeout: Duration,
    max_body_bytes: usize,
}

impl HyperGateway {
    pub fn new(timeouts: &TimeoutConfig, limits: &LimitsConfig) -> Self {
        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(Duration::from_secs(timeouts.connect_secs)));

        let client = Client::builder(TokioExecutor::new()).build(connector);

        Self {
            client,
            request_timeout: Duration::from_secs(timeouts.request_secs),
            max_body_bytes: limits.max_body_bytes,
        }
    }

    fn build_request(request: &HttpRequest) -> Result<Request<Body>, TransportError> {
        let method = Method::from_bytes(request.method.as_bytes()).map_err(|_| {
            TransportError::InvalidRequest(format!("invalid method {:?}", request.method))
        })?;

        let uri: Uri = request
            .url
            .parse()
            .map_err(|e| TransportError::InvalidRequest(format!("{}: {}", request.url, e)))?;
        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(TransportError::InvalidRequest(format!(
                "{} is not an absolute URL",
                request.url
            )));
        }

        let headers = request
            .header
            .to_header_map()
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        let mut outbound = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::from(request.body.to_bytes()))
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
        *outbound.headers_mut() = headers;

        Ok(outbound)
    }

    async fn round_trip(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let outbound = Self::build_request(request)?;

        let response = self
            .client
            .request(outbound)
            .await
            .map_err(|e| TransportError::Upstream(describe(&e)))?;

        let (parts, body) = response.into_parts();
        let bytes = axum::body::to_bytes(Body::new(body), self.max_body_bytes)
            .await
            .map_err(|e| TransportError::Body(describe(&e)))?;

        Ok(HttpResponse {
            status_code: i32::from(parts.status.as_u16()),
            header: Headers::from_header_map(&parts.headers),
            body: Payload::from(bytes),
        })
    }
}

impl Transport for HyperGateway {
    fn send<'a>(
        &'a self,
        request: &'a HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportError>> {
        Box::pin(async move {
            tracing::debug!(method = %request.method, url = %request.url, "Forwarding upstream");
            match tokio::time::timeout(self.request_timeout, self.round_trip(request)).await {
                Ok(result) => result,
                Err(_) => Err(TransportError::Timeout(self.request_timeout)),
            }
        })
    }
}
