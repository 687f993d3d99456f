//! The financial table row.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One project's financials — one row of the in-memory table.
///
/// The table is loaded once at startup and treated as read-only for the
/// process lifetime. Amounts are fixed-point `Decimal`, never floats, so
/// sums are exact and only display formatting rounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceRecord {
    /// Project name, unique within the table (e.g. `Project_Alpha`).
    pub project: String,
    /// Lifecycle status (e.g. `Active`, `Planning`, `Closed`).
    pub status: String,
    /// Total revenue booked against the project.
    pub revenue: Decimal,
    /// Total cost booked against the project.
    pub cost: Decimal,
}

impl FinanceRecord {
    /// Revenue minus cost for this single record. Exact.
    pub fn profit(&self) -> Decimal {
        self.revenue - self.cost
    }
}
