//! Audit event types.
//!
//! `AuditEvent` is the content that gets hashed and persisted — one per
//! router decision. The derived `audit_id` (computed in steelcore-audit)
//! is a pure function of every field here, timestamp included: identical
//! content at the identical instant produces the identical id. The id is a
//! content fingerprint, not a random identifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of operations the router can audit.
///
/// Serialized in SCREAMING_SNAKE_CASE so log lines read
/// `"action_type":"CALC_PROFIT"` exactly as downstream consumers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    /// Summed revenue minus summed cost over the whole table.
    CalcProfit,
    /// A single record fetched by normalized-name match.
    LookupProject,
    /// A lookup that matched no record. Logged like any other decision.
    LookupFailed,
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionType::CalcProfit => "CALC_PROFIT",
            ActionType::LookupProject => "LOOKUP_PROJECT",
            ActionType::LookupFailed => "LOOKUP_FAILED",
        };
        f.write_str(s)
    }
}

/// One router decision, immutable once written.
///
/// The audit logger serializes this with lexicographically sorted keys to
/// a canonical byte string, hashes it, and appends
/// `{audit_id, ...these fields}` as a single JSON line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Wall-clock time (UTC, ISO-8601) the event was assembled.
    pub timestamp: DateTime<Utc>,

    /// Which deterministic operation produced this event.
    pub action_type: ActionType,

    /// The operation's inputs as a structured mapping
    /// (e.g. `{"revenue_total": "...", "cost_total": "..."}`).
    pub inputs: serde_json::Value,

    /// The operation's result — a structured value or a plain string.
    pub result: serde_json::Value,

    /// The originating dataset name (e.g. `finance_data.csv`).
    pub source: String,
}

impl AuditEvent {
    /// Assemble an event with a fresh UTC timestamp.
    pub fn now(
        action_type: ActionType,
        inputs: serde_json::Value,
        result: serde_json::Value,
        source: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            action_type,
            inputs,
            result,
            source: source.into(),
        }
    }
}
