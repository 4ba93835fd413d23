//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, absolute-form vs admin dispatch)
//!     → request.rs (capture method/url/headers, strip transport artifacts)
//!     → [pipeline decides mock or upstream] on its own task
//!     → response.rs (HttpResponse → wire response)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use server::{AppState, HttpServer};
