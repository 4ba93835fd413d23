//! Mock subsystem.
//!
//! # Data Flow
//! ```text
//! POST /addMock
//!     → Mock::validate (response must be sendable)
//!     → registry.rs (append to ordered snapshot)
//!
//! Intercepted request:
//!     → registry.rs (scan in registration order)
//!     → matcher.rs (exact method/url/header/body equality)
//!     → Return: first matching Mock or None
//! ```
//!
//! # Design Decisions
//! - Exact, unnormalized matching: what you register is what matches
//! - First match wins, so later mocks never shadow earlier ones
//! - Linear scan; mock counts are harness-sized
//! - Readers take a lock-free snapshot, writers swap in a new one

pub mod matcher;
pub mod registry;

pub use matcher::matches;
pub use registry::{InvalidMock, Mock, MockRegistry};
