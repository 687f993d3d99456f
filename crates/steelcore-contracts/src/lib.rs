//! # steelcore-contracts
//!
//! Shared types, errors, and money helpers for the STEELCORE finance agent.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions, error types, and the currency
//! parse/format pair used at the display boundary.

pub mod error;
pub mod event;
pub mod money;
pub mod record;

pub use error::{SteelError, SteelResult};
pub use event::{ActionType, AuditEvent};
pub use money::{format_usd, parse_currency};
pub use record::FinanceRecord;
