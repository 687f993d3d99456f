//! Built-in demo dataset.
//!
//! All data in this module is hardcoded and fictional. It stands in for a
//! real financial export so the agent always has something to query: when
//! the configured dataset is missing, `load_or_seed` writes these rows to
//! disk and carries on instead of failing.

use std::path::Path;

use rust_decimal_macros::dec;
use tracing::warn;

use steelcore_contracts::{FinanceRecord, SteelError, SteelResult};

use crate::loader::load_table;

/// The three-project demo table.
pub fn seed_records() -> Vec<FinanceRecord> {
    vec![
        FinanceRecord {
            project: "Project_Alpha".to_string(),
            status: "Active".to_string(),
            revenue: dec!(1000000.00),
            cost: dec!(600000.00),
        },
        FinanceRecord {
            project: "Project_Beta".to_string(),
            status: "Planning".to_string(),
            revenue: dec!(500000.00),
            cost: dec!(200000.00),
        },
        FinanceRecord {
            project: "Project_Gamma".to_string(),
            status: "Closed".to_string(),
            revenue: dec!(750000.00),
            cost: dec!(400000.00),
        },
    ]
}

/// Write the seed table to `path` as a standard Project/Status/Revenue/Cost
/// CSV.
pub fn write_seed_csv(path: &Path) -> SteelResult<()> {
    let missing = |e: csv::Error| SteelError::DatasetMissing {
        path: format!("{} (seeding failed: {})", path.display(), e),
    };

    let mut writer = csv::Writer::from_path(path).map_err(missing)?;
    writer
        .write_record(["Project", "Status", "Revenue", "Cost"])
        .map_err(missing)?;
    for record in seed_records() {
        let revenue = record.revenue.to_string();
        let cost = record.cost.to_string();
        writer
            .write_record([
                record.project.as_str(),
                record.status.as_str(),
                revenue.as_str(),
                cost.as_str(),
            ])
            .map_err(missing)?;
    }
    writer.flush().map_err(|e| SteelError::DatasetMissing {
        path: format!("{} (seeding failed: {})", path.display(), e),
    })?;

    Ok(())
}

/// Load the table from `path`, seeding the demo dataset first if the file
/// does not exist.
///
/// Missing datasets are recoverable by policy: the demo must run on first
/// launch, so we seed and warn rather than terminate.
pub fn load_or_seed(path: &Path) -> SteelResult<Vec<FinanceRecord>> {
    if path.exists() {
        return load_table(path);
    }

    warn!(
        path = %path.display(),
        "dataset missing; seeding built-in demo data"
    );
    write_seed_csv(path)?;
    Ok(seed_records())
}
