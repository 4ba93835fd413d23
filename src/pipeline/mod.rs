//! Interception pipeline.
//!
//! # State Machine (per request)
//! ```text
//! RECEIVED   capture method/url/headers, strip transport artifacts,
//!            buffer the body once
//!     │          └─ body unreadable ──────────────┐
//!     ▼                                           │
//! MATCHING   registry.find_match                  │
//!     ├─ hit  → MOCK_HIT    canned response       │
//!     └─ miss → FORWARDING  transport.send        │
//!                  ├─ Ok  → upstream response     │
//!                  └─ Err → sentinel + 502        │
//!     ▼                                           ▼
//! RECORDED   ledger.append exactly once, then reply
//! ```
//!
//! # Design Decisions
//! - No retries; every request reaches RECORDED exactly once
//! - The registry is only read through a snapshot, so no lock is held
//!   while the upstream call is in flight
//! - Outcomes are a tagged enum; one constructor builds the ledger entry

pub mod interceptor;

pub use interceptor::InterceptionPipeline;
