//! # steelcore-agent
//!
//! The deterministic query router for the STEELCORE finance agent.
//!
//! Free text goes in, a formatted answer comes out, and every computation
//! in between is appended to the audit trail. Classification is a fixed
//! ordered keyword table (see [`router`]), never inferred intent.

pub mod agent;
pub mod router;

pub use agent::{FinanceAgent, NOT_FOUND_MESSAGE, REFUSAL_MESSAGE};
pub use router::{classify, normalize, Route, RouteOp, ROUTES};

// ── Tests ─────────────────────────────────────────────────────────────────────
