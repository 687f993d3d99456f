//! The finance agent: routed, deterministic, fully audited.
//!
//! Arithmetic and lookups are never delegated to probabilistic inference;
//! every answer is computed from the in-memory table and logged before it
//! is returned. The agent is stateless across calls apart from the
//! read-only table and the shared logger.

use rust_decimal::Decimal;
use serde_json::json;
use tracing::info_span;
use uuid::Uuid;

use steelcore_audit::AuditLogger;
use steelcore_contracts::{format_usd, ActionType, FinanceRecord};

use crate::router::{classify, normalize, RouteOp};

/// Fixed answer for inputs matching no routing rule. Not audited — the
/// router made no decision over the table.
pub const REFUSAL_MESSAGE: &str =
    "I can only handle auditable profit or project queries.";

/// Fixed answer for a lookup that matched no record.
pub const NOT_FOUND_MESSAGE: &str = "Project not found in the financial table.";

/// The query engine over one loaded financial table.
pub struct FinanceAgent {
    table: Vec<FinanceRecord>,
    auditor: AuditLogger,
    /// Dataset name written into every audit event's `source` field.
    source: String,
    /// Operational-only session tag: appears in tracing spans, never in
    /// hashed audit content, so audit ids stay pure content fingerprints.
    session: Uuid,
}

impl FinanceAgent {
    /// Wrap a loaded table and an open audit logger.
    ///
    /// `source` is the dataset name (e.g. `finance_data.csv`) recorded in
    /// every event this agent logs.
    pub fn new(
        table: Vec<FinanceRecord>,
        auditor: AuditLogger,
        source: impl Into<String>,
    ) -> Self {
        Self {
            table,
            auditor,
            source: source.into(),
            session: Uuid::new_v4(),
        }
    }

    /// The loaded table, in dataset order.
    pub fn table(&self) -> &[FinanceRecord] {
        &self.table
    }

    /// Answer one free-text query.
    ///
    /// Classification is first-match-wins over the routing table; every
    /// computed answer is audited before it is returned. Unclassified
    /// input gets the fixed refusal with no audit entry.
    pub fn process_query(&self, text: &str) -> String {
        let span = info_span!("query", session = %self.session);
        let _enter = span.enter();

        match classify(text) {
            Some(RouteOp::CalcProfit) => self.calculate_profit(),
            Some(RouteOp::LookupProject) => self.lookup_project(text),
            None => REFUSAL_MESSAGE.to_string(),
        }
    }

    /// Total profit over the whole table: Σrevenue − Σcost, exact.
    ///
    /// The audited result is the unrounded Decimal; only the returned
    /// message rounds, at the display boundary.
    fn calculate_profit(&self) -> String {
        let revenue_total: Decimal = self.table.iter().map(|r| r.revenue).sum();
        let cost_total: Decimal = self.table.iter().map(|r| r.cost).sum();
        let profit = revenue_total - cost_total;

        let audit_id = self.auditor.log_event(
            ActionType::CalcProfit,
            json!({ "revenue_total": revenue_total, "cost_total": cost_total }),
            json!(profit),
            &self.source,
        );

        format!(
            "Total profit: {} (audit ID: {})",
            format_usd(profit),
            audit_id
        )
    }

    /// Fetch the first record whose normalized name appears in the
    /// normalized query text.
    ///
    /// Table order breaks ties when several names match — a documented
    /// limitation, not an error. Misses are audited too: a failed lookup
    /// is still a router decision.
    fn lookup_project(&self, text: &str) -> String {
        let needle = normalize(text);
        let found = self
            .table
            .iter()
            .find(|record| needle.contains(&normalize(&record.project)));

        let Some(record) = found else {
            self.auditor.log_event(
                ActionType::LookupFailed,
                json!({ "search_term": text }),
                json!("Not Found"),
                &self.source,
            );
            return NOT_FOUND_MESSAGE.to_string();
        };

        let audit_id = self.auditor.log_event(
            ActionType::LookupProject,
            json!({ "search_term": text }),
            json!({ "status": record.status, "revenue": record.revenue }),
            &self.source,
        );

        format!(
            "{}\n  Status: {}\n  Revenue: {}\n  Cost: {}\n  (audit ID: {})",
            record.project,
            record.status,
            format_usd(record.revenue),
            format_usd(record.cost),
            audit_id
        )
    }
}
