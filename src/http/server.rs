//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the axum Router with admin routes and the proxy fallback
//! - Send absolute-form (forward proxy) requests straight to the pipeline
//! - Run each intercepted request on its own task
//! - Bind server to listener and drain on shutdown

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::admin;
use crate::config::ProxyConfig;
use crate::gateway::{HyperGateway, Transport};
use crate::http::request::is_absolute_form;
use crate::lifecycle::shutdown::notified;
use crate::mocks::MockRegistry;
use crate::pipeline::InterceptionPipeline;
use crate::recording::TrafficLedger;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<MockRegistry>,
    pub ledger: Arc<TrafficLedger>,
    pub pipeline: Arc<InterceptionPipeline>,
}

impl AppState {
    /// Fresh, empty registry and ledger wired to `transport`.
    pub fn new(transport: Arc<dyn Transport>, max_body_bytes: usize) -> Self {
        let registry = Arc::new(MockRegistry::new());
        let ledger = Arc::new(TrafficLedger::new());
        let pipeline = Arc::new(InterceptionPipeline::new(
            registry.clone(),
            ledger.clone(),
            transport,
            max_body_bytes,
        ));
        Self {
            registry,
            ledger,
            pipeline,
        }
    }
}

/// HTTP server for the mock proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a server that forwards misses with the hyper gateway.
    pub fn new(config: ProxyConfig) -> Self {
        let gateway = HyperGateway::new(&config.timeouts, &config.limits);
        Self::with_transport(config, Arc::new(gateway))
    }

    /// Create a server that forwards misses through `transport`.
    pub fn with_transport(config: ProxyConfig, transport: Arc<dyn Transport>) -> Self {
        let state = AppState::new(transport, config.limits.max_body_bytes);
        let router = Self::build_router(state.clone());
        Self {
            router,
            config,
            state,
        }
    }

    /// Build the axum router with all middleware layers.
    pub fn build_router(state: AppState) -> Router {
        Router::new()
            .merge(admin::router())
            .fallback(proxy_handler)
            .layer(middleware::from_fn_with_state(
                state.clone(),
                absolute_form_dispatch,
            ))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// A clone of the router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(notified(shutdown))
            .await?;

        tracing::info!(
            recorded = self.state.ledger.len(),
            mocks = self.state.registry.len(),
            "HTTP server stopped"
        );
        Ok(())
    }
}

/// Forward-proxy requests bypass the admin routes regardless of path.
async fn absolute_form_dispatch(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if is_absolute_form(request.uri()) {
        intercept(state, request).await
    } else {
        next.run(request).await
    }
}

/// Everything that is not an admin call goes through the pipeline.
pub(crate) async fn proxy_handler(State(state): State<AppState>, request: Request) -> Response {
    intercept(state, request).await
}

// The pipeline runs detached so a dropped client connection cannot cancel
// recording, and a panic only fails this one request.
async fn intercept(state: AppState, request: Request) -> Response {
    let pipeline = state.pipeline.clone();
    match tokio::spawn(async move { pipeline.process(request).await }).await {
        Ok(response) => response.into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Interception task failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal proxy error").into_response()
        }
    }
}
