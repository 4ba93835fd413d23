//! Administrative API.
//!
//! | Route | Handler |
//! |---|---|
//! | `POST /addMock` | register one mock |
//! | `GET /mocks` | registry snapshot |
//! | `GET /recordedRequests` | ledger snapshot |
//!
//! Any other method on these paths falls through to the proxy. That
//! includes `HEAD`, which axum would otherwise answer with the `GET` handler.

pub mod error;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};

use crate::http::server::{proxy_handler, AppState};

pub use error::AdminError;
use handlers::{add_mock, list_mocks, recorded_requests};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/addMock", post(add_mock).fallback(proxy_handler))
        .route(
            "/mocks",
            get(list_mocks).head(proxy_handler).fallback(proxy_handler),
        )
        .route(
            "/recordedRequests",
            get(recorded_requests)
                .head(proxy_handler)
                .fallback(proxy_handler),
        )
}
