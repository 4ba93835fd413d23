//! Recording forward proxy with canned-response mocks.

pub mod admin;
pub mod config;
pub mod gateway;
pub mod http;
pub mod lifecycle;
pub mod mocks;
pub mod model;
pub mod observability;
pub mod pipeline;
pub mod recording;

pub use config::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
