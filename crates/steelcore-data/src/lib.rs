//! # steelcore-data
//!
//! Dataset loading for the STEELCORE finance agent: CSV parsing with
//! currency cleanup, plus the built-in seed table written when the
//! configured dataset is missing.

pub mod loader;
pub mod seed;

pub use loader::load_table;
pub use seed::{load_or_seed, seed_records, write_seed_csv};

#[cfg(test)]
mod tests {
    use std::fs;

    use rust_decimal_macros::dec;

    use steelcore_contracts::SteelError;

    use super::{load_or_seed, load_table, seed_records};

    #[test]
    fn load_table_parses_currency_formatted_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("finance_data.csv");
        fs::write(
            &path,
            "Project,Status,Revenue,Cost\n\
             Project_Alpha,Active,\"$1,000,000.00\",\"$600,000.00\"\n\
             Project_Beta,Planning,500000,200000\n",
        )
        .unwrap();

        let table = load_table(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].project, "Project_Alpha");
        assert_eq!(table[0].revenue, dec!(1000000.00));
        assert_eq!(table[0].cost, dec!(600000.00));
        assert_eq!(table[1].revenue, dec!(500000));
    }

    #[test]
    fn load_table_preserves_row_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("finance_data.csv");
        fs::write(
            &path,
            "Project,Status,Revenue,Cost\n\
             Zeta,Active,1,1\n\
             Alpha,Active,2,2\n",
        )
        .unwrap();

        let table = load_table(&path).unwrap();
        assert_eq!(table[0].project, "Zeta");
        assert_eq!(table[1].project, "Alpha");
    }

    #[test]
    fn load_table_missing_file_is_dataset_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        let err = load_table(&path).unwrap_err();
        assert!(matches!(err, SteelError::DatasetMissing { .. }));
    }

    #[test]
    fn load_table_rejects_bad_amount() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("finance_data.csv");
        fs::write(
            &path,
            "Project,Status,Revenue,Cost\nProject_Alpha,Active,lots,600000\n",
        )
        .unwrap();

        let err = load_table(&path).unwrap_err();
        assert!(matches!(err, SteelError::DatasetParse { .. }));
    }

    #[test]
    fn load_or_seed_writes_and_returns_the_demo_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("finance_data.csv");

        let table = load_or_seed(&path).unwrap();
        assert_eq!(table, seed_records());
        assert!(path.exists(), "seed file must be written for next launch");

        // The written file must parse back to the identical table.
        let reloaded = load_table(&path).unwrap();
        assert_eq!(reloaded, seed_records());
    }

    #[test]
    fn seed_totals_match_the_canned_scenario() {
        let table = seed_records();
        let revenue: rust_decimal::Decimal = table.iter().map(|r| r.revenue).sum();
        let cost: rust_decimal::Decimal = table.iter().map(|r| r.cost).sum();
        assert_eq!(revenue, dec!(2250000.00));
        assert_eq!(cost, dec!(1200000.00));
        assert_eq!(revenue - cost, dec!(1050000.00));
    }
}
