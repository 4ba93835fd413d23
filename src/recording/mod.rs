//! Traffic recording subsystem.
//!
//! # Data Flow
//! ```text
//! Pipeline finishes a request
//!     → outcome.rs (MockHit | Forwarded | ForwardFailed | CaptureFailed)
//!     → RecordedExchange::new(request, &outcome)
//!     → ledger.rs (append under lock)
//!
//! GET /recordedRequests
//!     → ledger.rs (copy of entries in append order)
//! ```
//!
//! # Design Decisions
//! - Append-only: nothing is updated or removed
//! - Append order is completion order, not arrival order
//! - Failures are recorded with the sentinel status, never dropped

pub mod ledger;
pub mod outcome;

pub use ledger::{RecordedExchange, TrafficLedger};
pub use outcome::Outcome;
