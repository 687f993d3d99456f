//! CSV table loading and currency cleanup.

use std::path::Path;

use serde::Deserialize;

use steelcore_contracts::{parse_currency, FinanceRecord, SteelError, SteelResult};

/// One CSV row as it arrives, amounts still text.
///
/// Revenue and Cost may be currency-formatted (`"$1,000,000.00"`) or plain
/// numeric strings; `parse_currency` handles both.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Project")]
    project: String,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Revenue")]
    revenue: String,
    #[serde(rename = "Cost")]
    cost: String,
}

/// Load the financial table from a CSV with columns
/// Project, Status, Revenue, Cost.
///
/// Row order is preserved — lookup resolution depends on it.
pub fn load_table(path: &Path) -> SteelResult<Vec<FinanceRecord>> {
    if !path.exists() {
        return Err(SteelError::DatasetMissing {
            path: path.display().to_string(),
        });
    }

    let mut reader = csv::Reader::from_path(path).map_err(|e| SteelError::DatasetParse {
        reason: format!("cannot read {}: {}", path.display(), e),
    })?;

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<RawRow>().enumerate() {
        let row = row.map_err(|e| SteelError::DatasetParse {
            reason: format!("row {}: {}", idx + 1, e),
        })?;
        records.push(FinanceRecord {
            project: row.project,
            status: row.status,
            revenue: parse_currency(&row.revenue)?,
            cost: parse_currency(&row.cost)?,
        });
    }

    Ok(records)
}
